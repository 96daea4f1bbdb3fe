// Copyright 2024 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 8-bit RGBA colors.

use core::fmt;

/// An 8-bit per channel color with straight (non-premultiplied) alpha.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel; 0 is fully transparent.
    pub a: u8,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::from_rgba8(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Color = Color::from_rgb8(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Color = Color::from_rgb8(255, 255, 255);

    /// Create a color from its four channels.
    #[inline]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    /// Create an opaque color.
    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Color {
        Color::from_rgba8(r, g, b, 255)
    }

    /// The same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Color {
        Color { a, ..self }
    }

    /// Returns `true` if the alpha channel is zero.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Composite `self` over `dst` (Porter-Duff source-over).
    ///
    /// # Examples
    ///
    /// ```
    /// use quill::Color;
    ///
    /// assert_eq!(Color::BLACK.source_over(Color::WHITE), Color::BLACK);
    /// assert_eq!(Color::TRANSPARENT.source_over(Color::WHITE), Color::WHITE);
    /// assert_eq!(Color::WHITE.with_alpha(128).source_over(Color::TRANSPARENT).a, 128);
    /// ```
    pub fn source_over(self, dst: Color) -> Color {
        match (self.a, dst.a) {
            (255, _) | (_, 0) => return self,
            (0, _) => return dst,
            _ => {}
        }
        let sa = f64::from(self.a) / 255.0;
        let da = f64::from(dst.a) / 255.0;
        let out_a = sa + da * (1.0 - sa);
        let blend = |s: u8, d: u8| {
            let c = (f64::from(s) * sa + f64::from(d) * da * (1.0 - sa)) / out_a;
            channel(c)
        };
        Color {
            r: blend(self.r, dst.r),
            g: blend(self.g, dst.g),
            b: blend(self.b, dst.b),
            a: channel(out_a * 255.0),
        }
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn channel(v: f64) -> u8 {
    // `as` saturates, rounding is done by the + 0.5.
    (v + 0.5) as u8
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}
