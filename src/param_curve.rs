// Copyright 2024 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A trait for curves parametrized by a scalar.

use crate::Point;

/// The number of chords used by [`ParamCurve::chord_length`] by default.
pub const DEFAULT_CHORD_STEPS: usize = 10;

/// A curve parametrized by a scalar.
pub trait ParamCurve: Sized {
    /// Evaluate the curve at parameter `t`.
    ///
    /// Generally `t` is in the range [0..1].
    fn eval(&self, t: f64) -> Point;

    /// The start point.
    fn start(&self) -> Point {
        self.eval(0.0)
    }

    /// The end point.
    fn end(&self) -> Point {
        self.eval(1.0)
    }

    /// Approximate the length of the curve by a polyline.
    ///
    /// The curve is evaluated at `steps + 1` uniformly spaced parameter
    /// values and the lengths of the resulting chords are summed. This
    /// underestimates the true arc length, by less as `steps` grows.
    /// With `steps == 0` the result is 0.
    fn chord_length(&self, steps: usize) -> f64 {
        if steps == 0 {
            return 0.0;
        }
        let step = (steps as f64).recip();
        let mut last = self.start();
        let mut length = 0.0;
        for i in 1..=steps {
            let p = self.eval(i as f64 * step);
            length += p.distance(last);
            last = p;
        }
        length
    }
}
