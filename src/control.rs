// Copyright 2024 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Control point estimation for smooth curves through sampled points.

use crate::{Point, Sample};

/// A pair of Bézier control points flanking a sampled point.
///
/// `c1` is the control point on the incoming side (towards the previous
/// sample) and `c2` on the outgoing side (towards the next sample).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlPoints {
    /// Incoming control point.
    pub c1: Point,
    /// Outgoing control point.
    pub c2: Point,
}

/// Estimate the control points around `s2`, given its neighbors `s1` and `s3`.
///
/// The midpoints of the two segments are joined, and the point dividing
/// that join in proportion to the segment lengths is moved onto `s2`. The
/// midpoints, shifted by the same amount, become the control points. A
/// curve built from these points passes through `s2` with a tangent
/// parallel to the line between the midpoints.
///
/// When all three samples coincide the proportion is taken as 0.
///
/// # Examples
///
/// ```
/// use quill::{control_points, Point, Sample};
///
/// let cp = control_points(
///     Sample::new(0.0, 0.0, 0.0),
///     Sample::new(10.0, 10.0, 1.0),
///     Sample::new(20.0, 0.0, 2.0),
/// );
/// assert_eq!(cp.c1, Point::new(5.0, 10.0));
/// assert_eq!(cp.c2, Point::new(15.0, 10.0));
/// ```
pub fn control_points(s1: Sample, s2: Sample, s3: Sample) -> ControlPoints {
    let (p1, p2, p3) = (s1.point(), s2.point(), s3.point());
    let m1 = p1.midpoint(p2);
    let m2 = p2.midpoint(p3);

    let l1 = p1.distance(p2);
    let l2 = p2.distance(p3);
    let total = l1 + l2;
    let k = if total > 0.0 { l2 / total } else { 0.0 };

    let cm = m2 + (m1 - m2) * k;
    let shift = p2 - cm;

    ControlPoints {
        c1: m1 + shift,
        c2: m2 + shift,
    }
}
