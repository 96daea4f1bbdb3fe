// Copyright 2024 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pad configuration.

use crate::{Color, ConfigError, VelocityFilter, WidthRange, DEFAULT_VELOCITY_FILTER_WEIGHT};

/// The radius of the dot drawn for a single tap.
///
/// A stroke that never gathers enough samples to form a curve has no
/// velocity, so its size comes from this policy instead.
#[derive(Clone, Copy, Debug, Default)]
pub enum DotSize {
    /// The average of the minimum and maximum widths.
    #[default]
    Average,
    /// A fixed radius.
    Fixed(f64),
    /// A function of `(min_width, max_width)`; its result is used as-is.
    Custom(fn(f64, f64) -> f64),
}

impl DotSize {
    /// The dot radius for the given width range.
    ///
    /// # Examples
    ///
    /// ```
    /// use quill::{DotSize, WidthRange};
    ///
    /// let range = WidthRange::new(1.0, 3.0);
    /// assert_eq!(DotSize::Average.resolve(range), 2.0);
    /// assert_eq!(DotSize::Fixed(5.0).resolve(range), 5.0);
    /// assert_eq!(DotSize::Custom(|_, max| max * 2.0).resolve(range), 6.0);
    /// ```
    #[inline]
    pub fn resolve(&self, widths: WidthRange) -> f64 {
        match self {
            DotSize::Average => widths.mid(),
            DotSize::Fixed(size) => *size,
            DotSize::Custom(f) => f(widths.min, widths.max),
        }
    }
}

/// Describes how strokes are captured and drawn.
///
/// All fields have defaults suited to signature capture at one surface
/// unit per CSS pixel. Use [`PadConfig::validate`] (or construct a
/// [`SignaturePad`](crate::SignaturePad), which validates) to reject
/// inconsistent settings up front.
#[derive(Clone, Copy, Debug)]
pub struct PadConfig {
    /// Weight of the newest velocity estimate in the smoothing filter.
    pub velocity_filter_weight: f64,
    /// Thinnest stroke width.
    pub min_width: f64,
    /// Widest stroke width.
    pub max_width: f64,
    /// Radius of the dot drawn for a tap.
    pub dot_size: DotSize,
    /// Color used for all ink.
    pub pen_color: Color,
    /// Color the surface is reset to on clear.
    pub background_color: Color,
    /// Samples closer than this to the previous one are ignored.
    ///
    /// Zero accepts every sample.
    pub min_distance: f64,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            velocity_filter_weight: DEFAULT_VELOCITY_FILTER_WEIGHT,
            min_width: 0.5,
            max_width: 2.5,
            dot_size: DotSize::Average,
            pen_color: Color::BLACK,
            background_color: Color::TRANSPARENT,
            min_distance: 0.0,
        }
    }
}

impl PadConfig {
    /// Creates a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method for setting the velocity filter weight.
    pub fn with_velocity_filter_weight(mut self, weight: f64) -> Self {
        self.velocity_filter_weight = weight;
        self
    }

    /// Builder method for setting both width bounds.
    pub fn with_widths(mut self, min_width: f64, max_width: f64) -> Self {
        self.min_width = min_width;
        self.max_width = max_width;
        self
    }

    /// Builder method for setting the dot size policy.
    pub fn with_dot_size(mut self, dot_size: DotSize) -> Self {
        self.dot_size = dot_size;
        self
    }

    /// Builder method for setting the pen color.
    pub fn with_pen_color(mut self, color: Color) -> Self {
        self.pen_color = color;
        self
    }

    /// Builder method for setting the background color.
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Builder method for setting the minimum distance between samples.
    pub fn with_min_distance(mut self, distance: f64) -> Self {
        self.min_distance = distance;
        self
    }

    /// The configured width range.
    #[inline]
    pub fn widths(&self) -> WidthRange {
        WidthRange::new(self.min_width, self.max_width)
    }

    /// The configured velocity filter.
    #[inline]
    pub fn velocity_filter(&self) -> VelocityFilter {
        VelocityFilter::new(self.velocity_filter_weight)
    }

    /// Radius of the dot drawn for a tap.
    #[inline]
    pub fn dot_radius(&self) -> f64 {
        self.dot_size.resolve(self.widths())
    }

    /// Check that the configuration is consistent.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: an invalid width range, a filter
    /// weight outside `[0, 1]`, an invalid fixed dot size, or an invalid
    /// minimum distance. Custom dot size functions are not checked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.min_width, self.max_width);
        if !(min.is_finite() && max.is_finite() && min >= 0.0 && min <= max) {
            return Err(ConfigError::InvalidWidthRange { min, max });
        }
        let w = self.velocity_filter_weight;
        if !(0.0..=1.0).contains(&w) {
            return Err(ConfigError::InvalidFilterWeight(w));
        }
        if let DotSize::Fixed(size) = self.dot_size {
            if !(size.is_finite() && size >= 0.0) {
                return Err(ConfigError::InvalidDotSize(size));
            }
        }
        let d = self.min_distance;
        if !(d.is_finite() && d >= 0.0) {
            return Err(ConfigError::InvalidMinDistance(d));
        }
        Ok(())
    }
}
