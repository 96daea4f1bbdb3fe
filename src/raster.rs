// Copyright 2024 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rasterization of variable-width curves as runs of discs.
//!
//! A curve is sampled at roughly one point per unit of length and a disc
//! is stamped at each sample. The disc diameter moves from the start
//! width to the end width along the curve, with most of the change near
//! the end (the blend factor is `t³`, not `t`).

use smallvec::SmallVec;

use crate::{Circle, Color, CubicBez, ParamCurve, Point, Surface};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Discs for a typical curve segment fit inline.
pub type Discs = SmallVec<[Circle; 32]>;

/// Upper bound on the number of discs stamped for one curve.
pub const MAX_CURVE_DISCS: usize = 1 << 16;

/// Width at parameter `t` of a segment going from `start_width` to `end_width`.
#[inline]
pub fn width_at(t: f64, start_width: f64, end_width: f64) -> f64 {
    let ttt = t * t * t;
    start_width + ttt * (end_width - start_width)
}

/// The discs approximating `curve` drawn from `start_width` to `end_width`.
///
/// The number of discs is the curve's estimated length rounded down, so a
/// curve shorter than one unit yields no discs at all. The count is capped
/// at [`MAX_CURVE_DISCS`], and a curve whose length overflows yields none.
/// Sampling starts at `t = 0` and stops short of `t = 1`; the end point is
/// covered by the following segment of the stroke.
///
/// # Examples
///
/// ```
/// use quill::{curve_discs, CubicBez};
///
/// let c = CubicBez::new((0.0, 0.0), (1.0, 0.0), (2.5, 0.0), (3.5, 0.0));
/// let discs = curve_discs(&c, 2.0, 1.0);
/// assert_eq!(discs.len(), 3);
/// assert_eq!(discs[0].radius, 1.0);
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn curve_discs(curve: &CubicBez, start_width: f64, end_width: f64) -> Discs {
    let mut discs = Discs::new();
    let length = curve.length();
    if !curve.is_finite() || !length.is_finite() {
        return discs;
    }
    let steps = (length.floor() as usize).min(MAX_CURVE_DISCS);
    discs.reserve(steps);
    for i in 0..steps {
        let t = i as f64 / steps as f64;
        let width = width_at(t, start_width, end_width);
        discs.push(Circle::new(curve.eval(t), 0.5 * width));
    }
    discs
}

/// Draw `curve` onto `surface` as one fill, returning the number of discs.
pub fn draw_curve<S: Surface + ?Sized>(
    surface: &mut S,
    curve: &CubicBez,
    start_width: f64,
    end_width: f64,
    color: Color,
) -> usize {
    let discs = curve_discs(curve, start_width, end_width);
    if !discs.is_empty() {
        surface.fill_discs(&discs, color);
    }
    discs.len()
}

/// Draw a single dot of the given `radius` centered on `center`.
pub fn draw_dot<S: Surface + ?Sized>(surface: &mut S, center: Point, radius: f64, color: Color) {
    surface.fill_discs(&[Circle::new(center, radius)], color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        fills: Vec<(Vec<Circle>, Color)>,
    }

    impl Surface for Recorder {
        fn fill_discs(&mut self, discs: &[Circle], color: Color) {
            self.fills.push((discs.to_vec(), color));
        }

        fn fill_background(&mut self, _color: Color) {}

        fn clear(&mut self) {
            self.fills.clear();
        }
    }

    fn assert_approx_eq(x: f64, y: f64) {
        assert!((x - y).abs() < 1e-9, "{x} != {y}");
    }

    #[test]
    fn width_blend_is_cubic_in_t() {
        assert_approx_eq(width_at(0.0, 1.0, 3.0), 1.0);
        assert_approx_eq(width_at(0.5, 1.0, 3.0), 1.25);
        assert_approx_eq(width_at(1.0, 1.0, 3.0), 3.0);
        assert_approx_eq(width_at(0.5, 3.0, 1.0), 2.75);
    }

    #[test]
    fn step_count_follows_length() {
        let short = CubicBez::new((0., 0.), (3.5, 0.), (7., 0.), (10.5, 0.));
        let long = CubicBez::new((0., 0.), (33.5, 0.), (67., 0.), (100.5, 0.));
        assert_eq!(curve_discs(&short, 1., 1.).len(), 10);
        assert_eq!(curve_discs(&long, 1., 1.).len(), 100);
    }

    #[test]
    fn discs_follow_the_curve() {
        let c = CubicBez::new((0., 0.), (0., 20.), (20., 20.), (20., 0.));
        let discs = curve_discs(&c, 1.0, 2.0);
        assert!(!discs.is_empty());
        assert_eq!(discs[0].center, c.p0);
        let n = discs.len() as f64;
        for (i, d) in discs.iter().enumerate() {
            let t = i as f64 / n;
            assert!(d.center.distance(c.eval(t)) < 1e-9);
            assert_approx_eq(d.radius, 0.5 * width_at(t, 1.0, 2.0));
            assert!(d.radius >= 0.5 && d.radius <= 1.0);
        }
    }

    #[test]
    fn sub_unit_curve_draws_nothing() {
        let c = CubicBez::new((0., 0.), (0.2, 0.), (0.4, 0.), (0.6, 0.));
        let mut surface = Recorder::default();
        assert_eq!(draw_curve(&mut surface, &c, 1.0, 1.0, Color::BLACK), 0);
        assert!(surface.fills.is_empty());
    }

    #[test]
    fn one_fill_per_curve() {
        let c = CubicBez::new((0., 0.), (10., 5.), (20., 5.), (30., 0.));
        let mut surface = Recorder::default();
        let n = draw_curve(&mut surface, &c, 2.0, 1.0, Color::WHITE);
        assert!(n >= 30);
        assert_eq!(surface.fills.len(), 1);
        assert_eq!(surface.fills[0].0.len(), n);
        assert_eq!(surface.fills[0].1, Color::WHITE);
    }

    #[test]
    fn non_finite_curve_draws_nothing() {
        let c = CubicBez::new((0., 0.), (f64::NAN, 0.), (2., 0.), (3., 0.));
        assert!(curve_discs(&c, 1.0, 1.0).is_empty());
    }

    #[test]
    fn huge_curves_are_bounded() {
        let c = CubicBez::new((0., 0.), (1e200, 0.), (1e200, 1e200), (0., 1e200));
        assert!(c.length().is_finite());
        let discs = curve_discs(&c, 1.0, 2.0);
        assert_eq!(discs.len(), MAX_CURVE_DISCS);
        assert!(discs.iter().all(Circle::is_finite));

        // Finite control points whose length overflows.
        let c = CubicBez::new((-1e308, 0.), (0., 0.), (0., 0.), (1e308, 0.));
        assert!(c.is_finite());
        assert!(curve_discs(&c, 1.0, 1.0).is_empty());
    }

    #[test]
    fn dot_is_one_disc() {
        let mut surface = Recorder::default();
        draw_dot(&mut surface, Point::new(4., 2.), 3.0, Color::BLACK);
        assert_eq!(surface.fills.len(), 1);
        assert_eq!(surface.fills[0].0, vec![Circle::new((4., 2.), 3.0)]);
    }
}
