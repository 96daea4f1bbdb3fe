// Copyright 2024 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.

use core::fmt;

/// An error returned when a [`PadConfig`](crate::PadConfig) is rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The width bounds are negative, not finite, or inverted.
    InvalidWidthRange {
        /// The rejected minimum width.
        min: f64,
        /// The rejected maximum width.
        max: f64,
    },
    /// The velocity filter weight is outside `[0, 1]`.
    InvalidFilterWeight(f64),
    /// A fixed dot size is negative or not finite.
    InvalidDotSize(f64),
    /// The minimum sample distance is negative or not finite.
    InvalidMinDistance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidWidthRange { min, max } => {
                write!(f, "Invalid width range [{min}, {max}]")
            }
            ConfigError::InvalidFilterWeight(w) => {
                write!(f, "Velocity filter weight {w} is outside [0, 1]")
            }
            ConfigError::InvalidDotSize(s) => write!(f, "Invalid dot size {s}"),
            ConfigError::InvalidMinDistance(d) => write!(f, "Invalid minimum distance {d}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
