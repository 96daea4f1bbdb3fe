// Copyright 2024 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping drawing velocity to stroke width.

/// The range of widths a stroke may take.
///
/// Slow motion draws close to `max`, fast motion thins the line down to
/// `min`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WidthRange {
    /// Thinnest width, reached at high velocity.
    pub min: f64,
    /// Widest width, reached when the pointer is at rest.
    pub max: f64,
}

impl WidthRange {
    /// Create a new width range.
    #[inline]
    pub const fn new(min: f64, max: f64) -> WidthRange {
        WidthRange { min, max }
    }

    /// The width drawn for a smoothed `velocity`.
    ///
    /// This is `max / (velocity + 1)`, floored at `min`. It is `max` at rest
    /// and never increases with velocity.
    ///
    /// # Examples
    ///
    /// ```
    /// use quill::WidthRange;
    ///
    /// let range = WidthRange::new(0.5, 2.5);
    /// assert_eq!(range.width_for(0.0), 2.5);
    /// assert_eq!(range.width_for(1.5), 1.0);
    /// assert_eq!(range.width_for(100.0), 0.5);
    /// ```
    #[inline]
    pub fn width_for(&self, velocity: f64) -> f64 {
        (self.max / (velocity + 1.0)).max(self.min)
    }

    /// Midpoint of the range, used as the width a stroke starts with.
    #[inline]
    pub fn mid(&self) -> f64 {
        0.5 * (self.min + self.max)
    }

    /// Returns `true` if `width` lies within the range, inclusive.
    #[inline]
    pub fn contains(&self, width: f64) -> bool {
        (self.min..=self.max).contains(&width)
    }
}

impl Default for WidthRange {
    fn default() -> Self {
        WidthRange::new(0.5, 2.5)
    }
}
