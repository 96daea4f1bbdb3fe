// Copyright 2024 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Incremental curve synthesis from a sliding window of samples.

use arrayvec::ArrayVec;

use crate::{control_points, CubicBez, Sample};

/// The maximum number of samples held by a [`CurveBuffer`].
pub const WINDOW_CAPACITY: usize = 4;

/// A curve segment completed by a [`CurveBuffer`].
///
/// The curve runs from `start` to `end`; their timestamps give the speed
/// at which the segment was drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// The fitted curve.
    pub curve: CubicBez,
    /// The sample the curve starts at.
    pub start: Sample,
    /// The sample the curve ends at.
    pub end: Sample,
}

/// A sliding window over the most recent samples of a stroke.
///
/// Each pushed sample yields at most one cubic segment. The segment spans
/// the two middle samples of the window, with control points estimated
/// from their outer neighbors, so consecutive segments join smoothly.
///
/// The window never holds more than [`WINDOW_CAPACITY`] samples.
#[derive(Clone, Debug, Default)]
pub struct CurveBuffer {
    samples: ArrayVec<Sample, WINDOW_CAPACITY>,
}

impl CurveBuffer {
    /// Create an empty buffer.
    #[inline]
    pub fn new() -> CurveBuffer {
        CurveBuffer::default()
    }

    /// Add a sample, returning the segment it completes, if any.
    ///
    /// Nothing is returned for the first two samples of a stroke. On the
    /// third, the first sample is duplicated so that the opening segment
    /// can be drawn right away rather than one sample later.
    ///
    /// # Examples
    ///
    /// ```
    /// use quill::{CurveBuffer, Point, Sample};
    ///
    /// let mut buf = CurveBuffer::new();
    /// assert!(buf.push(Sample::new(0.0, 0.0, 0.0)).is_none());
    /// assert!(buf.push(Sample::new(10.0, 0.0, 16.0)).is_none());
    /// let seg = buf.push(Sample::new(10.0, 10.0, 32.0)).unwrap();
    /// assert_eq!(seg.curve.p0, Point::new(0.0, 0.0));
    /// assert_eq!(seg.curve.p3, Point::new(10.0, 0.0));
    /// assert_eq!(seg.end.time, 16.0);
    /// assert_eq!(buf.len(), 3);
    /// ```
    pub fn push(&mut self, sample: Sample) -> Option<Segment> {
        // Invariant: at most 3 samples are held between calls.
        self.samples.push(sample);

        if self.samples.len() == 3 {
            let first = self.samples[0];
            self.samples.insert(0, first);
        }

        if self.samples.len() < WINDOW_CAPACITY {
            return None;
        }

        let w = &self.samples;
        let c2 = control_points(w[0], w[1], w[2]).c2;
        let c1 = control_points(w[1], w[2], w[3]).c1;
        let segment = Segment {
            curve: CubicBez::new(w[1].point(), c2, c1, w[2].point()),
            start: w[1],
            end: w[2],
        };
        self.samples.remove(0);
        Some(segment)
    }

    /// Remove all samples.
    #[inline]
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// The number of samples currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if no samples are held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns `true` once enough samples have arrived to emit curves.
    ///
    /// This stays true for the rest of the stroke.
    #[inline]
    pub fn can_draw_curve(&self) -> bool {
        self.samples.len() > 2
    }

    /// The oldest sample still held.
    #[inline]
    pub fn first(&self) -> Option<Sample> {
        self.samples.first().copied()
    }

    /// The most recently pushed sample.
    #[inline]
    pub fn last(&self) -> Option<Sample> {
        self.samples.last().copied()
    }

    /// The samples currently held, oldest first.
    #[inline]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }
}
