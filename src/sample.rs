// Copyright 2024 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timestamped input samples.

use core::fmt;

use crate::Point;

/// The smallest elapsed time, in milliseconds, used when estimating velocity.
///
/// Two samples that share a timestamp (or arrive out of order) are treated
/// as one millisecond apart.
pub const MIN_ELAPSED: f64 = 1.0;

/// One timestamped coordinate from the pointing device.
///
/// Coordinates are in surface-local units and `time` is in milliseconds.
/// Any monotonic clock works; only differences between samples are used.
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    /// The x coordinate.
    pub x: f64,
    /// The y coordinate.
    pub y: f64,
    /// The timestamp, in milliseconds.
    pub time: f64,
}

impl Sample {
    /// Create a new sample.
    #[inline]
    pub const fn new(x: f64, y: f64, time: f64) -> Sample {
        Sample { x, y, time }
    }

    /// The position of this sample.
    #[inline]
    pub const fn point(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Euclidean distance to another sample, ignoring time.
    #[inline]
    pub fn distance(self, other: Sample) -> f64 {
        self.point().distance(other.point())
    }

    /// Raw velocity travelling from `prior` to `self`.
    ///
    /// This is the distance between the two samples divided by the elapsed
    /// time, with the elapsed time floored at [`MIN_ELAPSED`]. The result is
    /// always non-negative and finite for finite inputs.
    ///
    /// # Examples
    ///
    /// ```
    /// use quill::Sample;
    ///
    /// let a = Sample::new(0.0, 0.0, 100.0);
    /// let b = Sample::new(3.0, 4.0, 110.0);
    /// assert_eq!(b.velocity_from(a), 0.5);
    ///
    /// // Same timestamp: elapsed time is floored, no division by zero.
    /// let c = Sample::new(3.0, 4.0, 100.0);
    /// assert_eq!(c.velocity_from(a), 5.0);
    /// ```
    #[inline]
    pub fn velocity_from(self, prior: Sample) -> f64 {
        let elapsed = (self.time - prior.time).max(MIN_ELAPSED);
        self.distance(prior) / elapsed
    }

    /// Is this sample [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.time.is_finite()
    }
}

impl From<Sample> for Point {
    #[inline]
    fn from(s: Sample) -> Point {
        s.point()
    }
}

impl fmt::Debug for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?} @ {:?}ms)", self.x, self.y, self.time)
    }
}
