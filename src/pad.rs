// Copyright 2024 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A signature pad: stroke capture bound to a surface.

use core::mem;

use tracing::{debug, trace, warn};

use crate::{
    draw_curve, draw_dot, ConfigError, Mark, PadConfig, Sample, Step, StrokeEvent, StrokeState,
    Surface,
};

/// Captures strokes and draws them onto a surface.
///
/// The input adapter feeds pointer samples to [`begin`](Self::begin),
/// [`update`](Self::update) and [`end`](Self::end); the returned
/// [`StrokeEvent`]s can be forwarded to whoever wants to know that a
/// signature is being drawn.
///
/// # Examples
///
/// ```
/// use quill::{Color, PadConfig, Pixmap, Sample, SignaturePad, StrokeEvent};
///
/// let config = PadConfig::new().with_background_color(Color::WHITE);
/// let mut pad = SignaturePad::new(Pixmap::new(64, 64), config).unwrap();
/// assert!(pad.is_empty());
///
/// let down = Sample::new(10.0, 10.0, 0.0);
/// assert_eq!(pad.begin(down), Some(StrokeEvent::Begin(down)));
/// pad.update(Sample::new(20.0, 14.0, 16.0));
/// pad.update(Sample::new(30.0, 24.0, 32.0));
/// pad.end(Sample::new(36.0, 36.0, 48.0));
/// assert!(!pad.is_empty());
///
/// pad.clear();
/// assert!(pad.is_empty());
/// assert!(pad.surface().is_blank(Color::WHITE));
/// ```
#[derive(Debug)]
pub struct SignaturePad<S: Surface> {
    surface: S,
    config: PadConfig,
    state: StrokeState,
    empty: bool,
}

impl<S: Surface> SignaturePad<S> {
    /// Create a pad drawing onto `surface`.
    ///
    /// The surface is cleared and painted with the background color.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` does not [validate](PadConfig::validate).
    pub fn new(surface: S, config: PadConfig) -> Result<Self, ConfigError> {
        if let Err(e) = config.validate() {
            warn!(%e, "rejected pad configuration");
            return Err(e);
        }
        let mut pad = SignaturePad {
            surface,
            config,
            state: StrokeState::new(),
            empty: true,
        };
        pad.clear();
        Ok(pad)
    }

    /// Replace the configuration.
    ///
    /// The new configuration applies to the next sample. A stroke in
    /// progress keeps its current width until its next segment, so a
    /// changed width range fully applies from the next stroke.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the current configuration in place, if
    /// `config` does not [validate](PadConfig::validate).
    pub fn set_config(&mut self, config: PadConfig) -> Result<(), ConfigError> {
        if let Err(e) = config.validate() {
            warn!(%e, "rejected pad configuration");
            return Err(e);
        }
        debug!(?config, "pad configuration changed");
        self.config = config;
        Ok(())
    }

    /// The current configuration.
    #[inline]
    pub fn config(&self) -> &PadConfig {
        &self.config
    }

    /// The surface strokes are drawn onto.
    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Consume the pad, returning its surface.
    #[inline]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// The state of the stroke being captured.
    #[inline]
    pub fn stroke_state(&self) -> &StrokeState {
        &self.state
    }

    /// Returns `true` while a stroke is in progress.
    #[inline]
    pub fn is_drawing(&self) -> bool {
        self.state.is_active()
    }

    /// Returns `true` if nothing has been drawn since the last clear.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Start a stroke.
    pub fn begin(&mut self, sample: Sample) -> Option<StrokeEvent> {
        self.advance(|state, config| state.begin(sample, config))
    }

    /// Continue the stroke in progress.
    ///
    /// This never produces an event; it returns nothing so that hosts
    /// can call it from a pointer-move handler without further checks.
    pub fn update(&mut self, sample: Sample) {
        let event = self.advance(|state, config| state.update(sample, config));
        debug_assert!(event.is_none(), "update never notifies");
    }

    /// Finish the stroke in progress.
    pub fn end(&mut self, sample: Sample) -> Option<StrokeEvent> {
        self.advance(|state, config| state.end(sample, config))
    }

    /// Erase everything and return to idle.
    ///
    /// The surface is reset to the background color and any stroke in
    /// progress is dropped without an end notification.
    pub fn clear(&mut self) {
        debug!("pad cleared");
        self.surface.clear();
        self.surface.fill_background(self.config.background_color);
        self.state = StrokeState::new();
        self.empty = true;
    }

    fn advance(
        &mut self,
        transition: impl FnOnce(StrokeState, &PadConfig) -> (StrokeState, Step),
    ) -> Option<StrokeEvent> {
        let state = mem::take(&mut self.state);
        let (state, step) = transition(state, &self.config);
        self.state = state;
        if let Some(mark) = step.mark {
            self.render(mark);
        }
        step.event
    }

    fn render(&mut self, mark: Mark) {
        let color = self.config.pen_color;
        match mark {
            Mark::Curve {
                curve,
                start_width,
                end_width,
            } => {
                let discs = draw_curve(&mut self.surface, &curve, start_width, end_width, color);
                trace!(discs, start_width, end_width, "curve drawn");
                if discs > 0 {
                    self.empty = false;
                }
            }
            Mark::Dot { center, radius } => {
                draw_dot(&mut self.surface, center, radius, color);
                trace!(%center, radius, "dot drawn");
                self.empty = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Circle, Color, DotSize, Pixmap, Point};

    #[derive(Debug, Default)]
    struct Recorder {
        fills: Vec<Vec<Circle>>,
        backgrounds: Vec<Color>,
        clears: usize,
    }

    impl Surface for Recorder {
        fn fill_discs(&mut self, discs: &[Circle], _color: Color) {
            self.fills.push(discs.to_vec());
        }

        fn fill_background(&mut self, color: Color) {
            self.backgrounds.push(color);
        }

        fn clear(&mut self) {
            self.clears += 1;
        }
    }

    fn pad() -> SignaturePad<Recorder> {
        SignaturePad::new(Recorder::default(), PadConfig::default()).unwrap()
    }

    #[test]
    fn new_pad_is_empty_and_cleared() {
        let pad = pad();
        assert!(pad.is_empty());
        assert!(!pad.is_drawing());
        assert_eq!(pad.surface().clears, 1);
        assert_eq!(pad.surface().backgrounds, vec![Color::TRANSPARENT]);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = PadConfig::new().with_widths(2.0, 1.0);
        let err = SignaturePad::new(Recorder::default(), config).unwrap_err();
        assert_eq!(err, ConfigError::InvalidWidthRange { min: 2.0, max: 1.0 });

        let mut pad = pad();
        assert!(pad.set_config(PadConfig::new().with_velocity_filter_weight(2.0)).is_err());
        assert_eq!(pad.config().velocity_filter_weight, 0.7);
        assert!(pad.set_config(PadConfig::new().with_pen_color(Color::WHITE)).is_ok());
        assert_eq!(pad.config().pen_color, Color::WHITE);
    }

    #[test]
    fn single_tap_paints_one_disc() {
        let mut pad = SignaturePad::new(
            Recorder::default(),
            PadConfig::new().with_dot_size(DotSize::Fixed(3.0)),
        )
        .unwrap();
        let p = Sample::new(7., 9., 100.);
        assert_eq!(pad.begin(p), Some(StrokeEvent::Begin(p)));
        assert!(pad.is_drawing());
        assert!(pad.is_empty());
        assert_eq!(pad.end(p), Some(StrokeEvent::End(p)));
        assert!(!pad.is_drawing());
        assert!(!pad.is_empty());
        assert_eq!(pad.surface().fills, vec![vec![Circle::new(p.point(), 3.0)]]);
    }

    #[test]
    fn one_fill_per_curve() {
        let mut pad = pad();
        pad.begin(Sample::new(0., 0., 0.));
        for i in 1..10 {
            let t = f64::from(i);
            pad.update(Sample::new(20. * t, 5. * t, 16. * t));
        }
        pad.end(Sample::new(200., 60., 160.));
        // Ten samples after the first: one curve each from the second on.
        assert_eq!(pad.surface().fills.len(), 9);
        assert!(pad.surface().fills.iter().all(|f| f.len() >= 20));
        let range = pad.config().widths();
        for disc in pad.surface().fills.iter().flatten() {
            assert!(range.contains(2.0 * disc.radius));
        }
    }

    #[test]
    fn huge_coordinates_stay_bounded() {
        let mut pad = pad();
        pad.begin(Sample::new(0., 0., 0.));
        pad.update(Sample::new(1e200, 0., 16.));
        pad.update(Sample::new(1e200, 1e200, 32.));
        pad.end(Sample::new(0., 1e200, 48.));
        assert!(!pad.surface().fills.is_empty());
        assert!(pad
            .surface()
            .fills
            .iter()
            .all(|f| f.len() <= crate::MAX_CURVE_DISCS));

        let mut pad = SignaturePad::new(Pixmap::new(8, 8), PadConfig::default()).unwrap();
        pad.begin(Sample::new(1., 1., 0.));
        pad.update(Sample::new(1e200, 1., 16.));
        pad.end(Sample::new(1e200, 1e200, 32.));
        assert!(!pad.surface().pixel(1, 1).unwrap().is_transparent());
    }

    #[test]
    fn clear_drops_stroke_in_progress() {
        let mut pad = pad();
        pad.begin(Sample::new(0., 0., 0.));
        pad.update(Sample::new(10., 0., 16.));
        pad.clear();
        assert!(!pad.is_drawing());
        assert!(pad.is_empty());
        assert_eq!(pad.end(Sample::new(20., 0., 32.)), None);
        assert!(pad.surface().fills.is_empty());
    }

    #[test]
    fn clear_matches_fresh_surface() {
        let config = PadConfig::new().with_background_color(Color::from_rgb8(250, 250, 240));
        let mut pad = SignaturePad::new(Pixmap::new(40, 30), config).unwrap();
        pad.begin(Sample::new(5., 5., 0.));
        pad.update(Sample::new(15., 10., 16.));
        pad.update(Sample::new(25., 20., 32.));
        pad.end(Sample::new(30., 25., 48.));
        assert!(!pad.is_empty());
        assert!(!pad.surface().is_blank(config.background_color));

        pad.clear();
        assert!(pad.is_empty());
        let mut fresh = Pixmap::new(40, 30);
        fresh.fill_background(config.background_color);
        assert!(*pad.surface() == fresh);

        // Clearing again changes nothing.
        pad.clear();
        assert!(pad.into_surface() == fresh);
    }

    #[test]
    fn single_tap_on_pixmap() {
        let mut pad = SignaturePad::new(Pixmap::new(20, 20), PadConfig::default()).unwrap();
        let p = Sample::new(10., 10., 0.);
        pad.begin(p);
        pad.end(p);
        assert!(!pad.is_empty());
        let ink: Vec<Point> = (0..20)
            .flat_map(|y| (0..20).map(move |x| (x, y)))
            .filter(|&(x, y)| !pad.surface().pixel(x, y).unwrap().is_transparent())
            .map(|(x, y)| Point::new(x as f64 + 0.5, y as f64 + 0.5))
            .collect();
        assert!(!ink.is_empty());
        // The default dot has radius 1.5.
        assert!(ink.iter().all(|c| c.distance(p.point()) < 2.5));
        assert!(!pad.surface().pixel(11, 10).unwrap().is_transparent());
        assert!(pad.surface().pixel(12, 10).unwrap().is_transparent());
    }

    #[test]
    fn straight_stroke_on_pixmap() {
        let mut pad = SignaturePad::new(Pixmap::new(32, 32), PadConfig::default()).unwrap();
        pad.begin(Sample::new(2., 10., 0.));
        pad.update(Sample::new(16., 10., 16.));
        pad.update(Sample::new(30., 10., 32.));
        assert!(!pad.is_empty());
        // Only the segment ending at the second-to-last sample is drawn.
        assert!(!pad.surface().pixel(8, 9).unwrap().is_transparent());
        assert!(pad.surface().pixel(20, 9).unwrap().is_transparent());

        pad.end(Sample::new(30., 10., 48.));
        // Ink straddles the line y = 10 and stays near it.
        assert!(!pad.surface().pixel(20, 9).unwrap().is_transparent());
        assert!(pad.surface().pixel(8, 20).unwrap().is_transparent());
    }
}
