// Copyright 2024 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stroke state machine.
//!
//! A stroke is driven by three transitions: [`begin`](StrokeState::begin),
//! [`update`](StrokeState::update) and [`end`](StrokeState::end). Each one
//! consumes the current [`StrokeState`] and returns the next one together
//! with a [`Step`] describing what to draw and which notification to
//! deliver. No surface is involved, so the whole pipeline can be exercised
//! with plain values; [`SignaturePad`](crate::SignaturePad) applies the
//! steps to a real surface.

use tracing::{debug, trace};

use crate::{CubicBez, CurveBuffer, PadConfig, Point, Sample, WidthRange};

/// Whether a stroke is in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// No stroke is in progress.
    #[default]
    Idle,
    /// A stroke has begun and not yet ended.
    Active,
}

/// Velocity and width carried from one segment of a stroke to the next.
///
/// Each segment starts at the width the previous one ended with, which
/// keeps the line continuous across segment boundaries.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FilterState {
    /// Smoothed velocity of the last segment.
    pub last_velocity: f64,
    /// End width of the last segment.
    pub last_width: f64,
}

impl FilterState {
    /// The state at the start of a stroke: at rest, at mid width.
    #[inline]
    pub fn reset(widths: WidthRange) -> FilterState {
        FilterState {
            last_velocity: 0.0,
            last_width: widths.mid(),
        }
    }
}

/// Something to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mark {
    /// A curve segment whose width goes from `start_width` to `end_width`.
    Curve {
        /// The segment.
        curve: CubicBez,
        /// Width at the start of the segment.
        start_width: f64,
        /// Width at the end of the segment.
        end_width: f64,
    },
    /// A single dot, for strokes too short to form a curve.
    Dot {
        /// Center of the dot.
        center: Point,
        /// Radius of the dot.
        radius: f64,
    },
}

/// A stroke lifecycle notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StrokeEvent {
    /// A stroke began at the given sample.
    Begin(Sample),
    /// A stroke ended at the given sample.
    End(Sample),
}

/// The output of a single transition.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Step {
    /// What to draw, if anything.
    pub mark: Option<Mark>,
    /// Which notification to deliver, if any.
    pub event: Option<StrokeEvent>,
}

impl Step {
    /// Returns `true` if the step neither draws nor notifies.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mark.is_none() && self.event.is_none()
    }
}

/// The state of the stroke being captured.
///
/// Holds the phase, the sliding window of recent samples, and the filter
/// state. All three are reset when a stroke begins.
#[derive(Clone, Debug, Default)]
pub struct StrokeState {
    phase: Phase,
    window: CurveBuffer,
    filter: FilterState,
}

impl StrokeState {
    /// An idle state with no samples.
    #[inline]
    pub fn new() -> StrokeState {
        StrokeState::default()
    }

    /// The current phase.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns `true` while a stroke is in progress.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    /// The sliding window of recent samples.
    #[inline]
    pub fn window(&self) -> &CurveBuffer {
        &self.window
    }

    /// The filter state of the current (or last) stroke.
    #[inline]
    pub fn filter(&self) -> FilterState {
        self.filter
    }

    /// Start a new stroke at `sample`.
    ///
    /// Beginning while a stroke is already active abandons that stroke
    /// without an end notification; whatever it drew stays drawn.
    pub fn begin(mut self, sample: Sample, config: &PadConfig) -> (StrokeState, Step) {
        if self.is_active() {
            debug!(?sample, "stroke restarted before it ended");
        } else {
            debug!(?sample, "stroke begin");
        }
        self.phase = Phase::Active;
        self.window.clear();
        self.filter = FilterState::reset(config.widths());
        // A single sample never completes a segment.
        self.window.push(sample);
        let step = Step {
            mark: None,
            event: Some(StrokeEvent::Begin(sample)),
        };
        (self, step)
    }

    /// Add `sample` to the stroke in progress.
    ///
    /// Samples arriving while idle, or closer than the configured minimum
    /// distance to the previous sample, are ignored.
    pub fn update(mut self, sample: Sample, config: &PadConfig) -> (StrokeState, Step) {
        if !self.is_active() {
            trace!(?sample, "sample outside of a stroke ignored");
            return (self, Step::default());
        }
        if let Some(last) = self.window.last() {
            if config.min_distance > 0.0 && sample.distance(last) < config.min_distance {
                trace!(?sample, "sample too close to the previous one ignored");
                return (self, Step::default());
            }
        }

        let Some(segment) = self.window.push(sample) else {
            return (self, Step::default());
        };
        let velocity = config.velocity_filter().apply(
            segment.start,
            segment.end,
            self.filter.last_velocity,
        );
        let width = config.widths().width_for(velocity);
        let mark = Mark::Curve {
            curve: segment.curve,
            start_width: self.filter.last_width,
            end_width: width,
        };
        self.filter = FilterState {
            last_velocity: velocity,
            last_width: width,
        };
        let step = Step {
            mark: Some(mark),
            event: None,
        };
        (self, step)
    }

    /// Finish the stroke in progress with a final `sample`.
    ///
    /// If the stroke never gathered enough samples to form a curve, a dot
    /// is drawn at its first sample instead, sized by the configured dot
    /// size policy. Ending while idle does nothing.
    pub fn end(self, sample: Sample, config: &PadConfig) -> (StrokeState, Step) {
        if !self.is_active() {
            trace!(?sample, "end outside of a stroke ignored");
            return (self, Step::default());
        }
        let (mut state, step) = self.update(sample, config);
        let mut mark = step.mark;
        if !state.window.can_draw_curve() {
            if let Some(first) = state.window.first() {
                mark = Some(Mark::Dot {
                    center: first.point(),
                    radius: config.dot_radius(),
                });
            }
        }
        state.phase = Phase::Idle;
        debug!(?sample, "stroke end");
        let step = Step {
            mark,
            event: Some(StrokeEvent::End(sample)),
        };
        (state, step)
    }
}
