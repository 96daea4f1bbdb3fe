// Copyright 2024 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implementation of circle shape.

use crate::{Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A circle.
///
/// Filled circles ("dots") are the only primitive the rasterizer emits.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// The center.
    pub center: Point,
    /// The radius.
    pub radius: f64,
}

impl Circle {
    /// A new circle from center and radius.
    #[inline]
    pub fn new(center: impl Into<Point>, radius: f64) -> Circle {
        Circle {
            center: center.into(),
            radius,
        }
    }

    /// Returns `true` if `pt` lies inside the circle or on its boundary.
    #[inline]
    pub fn contains(&self, pt: Point) -> bool {
        pt.distance_squared(self.center) <= self.radius * self.radius
    }

    /// The axis-aligned bounds of the circle, as `(min, max)` corners.
    #[inline]
    pub fn bounds(&self) -> (Point, Point) {
        let r = self.radius.abs();
        let d = Vec2::new(r, r);
        (self.center - d, self.center + d)
    }

    /// Is this circle finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Circle, Point};

    #[test]
    fn contains_boundary() {
        let c = Circle::new((5.0, 5.0), 2.0);
        assert!(c.contains(Point::new(5.0, 5.0)));
        assert!(c.contains(Point::new(7.0, 5.0)));
        assert!(!c.contains(Point::new(7.0, 6.0)));
    }

    #[test]
    fn bounds_with_negative_radius() {
        let c = Circle::new((0.0, 0.0), -3.0);
        assert_eq!(c.bounds(), (Point::new(-3.0, -3.0), Point::new(3.0, 3.0)));
    }
}
