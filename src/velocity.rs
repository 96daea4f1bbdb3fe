// Copyright 2024 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exponentially smoothed drawing velocity.

use crate::common::FloatExt;
use crate::Sample;

/// The default weight given to the newest velocity estimate.
pub const DEFAULT_VELOCITY_FILTER_WEIGHT: f64 = 0.7;

/// An exponential smoothing filter over raw sample velocities.
///
/// Each new estimate is blended with the previous smoothed value as
/// `weight * raw + (1 - weight) * previous`. A weight close to 1 follows the
/// pointer closely; a weight close to 0 changes width only slowly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocityFilter {
    /// Weight of the newest estimate, in `[0, 1]`.
    pub weight: f64,
}

impl VelocityFilter {
    /// Create a filter with the given weight.
    #[inline]
    pub const fn new(weight: f64) -> VelocityFilter {
        VelocityFilter { weight }
    }

    /// Smooth the velocity of the motion from `prior` to `current`.
    ///
    /// `previous` is the smoothed velocity returned for the last segment of
    /// the same stroke, or 0 at the start of a stroke.
    #[inline]
    pub fn apply(&self, prior: Sample, current: Sample, previous: f64) -> f64 {
        current.velocity_from(prior).smooth(previous, self.weight)
    }
}

impl Default for VelocityFilter {
    fn default() -> Self {
        VelocityFilter::new(DEFAULT_VELOCITY_FILTER_WEIGHT)
    }
}
