// Copyright 2024 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A software raster surface.

use alloc::vec;
use alloc::vec::Vec;

use crate::color::channel;
use crate::{Circle, Color, Point, Surface};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Subsamples per axis used to estimate how much of a pixel a disc covers.
const SUBSAMPLES: usize = 4;

/// An in-memory RGBA image implementing [`Surface`].
///
/// Pixel `(x, y)` covers the unit square from `(x, y)` to `(x + 1, y + 1)`
/// in surface coordinates. Discs are anti-aliased by supersampling.
#[derive(Clone, PartialEq, Eq)]
pub struct Pixmap {
    width: usize,
    height: usize,
    data: Vec<Color>,
}

/// A half-open rectangle of pixel indices.
#[derive(Clone, Copy, Debug)]
struct PixelRect {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
}

impl PixelRect {
    fn union(self, other: PixelRect) -> PixelRect {
        PixelRect {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    fn width(self) -> usize {
        self.x1 - self.x0
    }
}

impl Pixmap {
    /// Create a fully transparent pixmap.
    pub fn new(width: usize, height: usize) -> Pixmap {
        Pixmap {
            width,
            height,
            data: vec![Color::TRANSPARENT; width * height],
        }
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The color of one pixel, or `None` if it is out of bounds.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.data[y * self.width + x])
        } else {
            None
        }
    }

    /// All pixels, in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.data
    }

    /// Returns `true` if every pixel is exactly `color`.
    pub fn is_blank(&self, color: Color) -> bool {
        self.data.iter().all(|&c| c == color)
    }

    /// Pixels touched by the bounding box of `disc`, clipped to the pixmap.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn pixel_rect(&self, disc: &Circle) -> Option<PixelRect> {
        if !disc.is_finite() || disc.radius <= 0.0 {
            return None;
        }
        let (min, max) = disc.bounds();
        let clip = |v: f64, limit: usize| v.max(0.0).min(limit as f64) as usize;
        let rect = PixelRect {
            x0: clip(min.x.floor(), self.width),
            y0: clip(min.y.floor(), self.height),
            x1: clip(max.x.ceil(), self.width),
            y1: clip(max.y.ceil(), self.height),
        };
        (rect.x0 < rect.x1 && rect.y0 < rect.y1).then_some(rect)
    }
}

/// Fraction of pixel `(x, y)` inside `disc`.
fn coverage(disc: &Circle, x: usize, y: usize) -> f32 {
    let step = (SUBSAMPLES as f64).recip();
    let mut inside = 0_u16;
    for j in 0..SUBSAMPLES {
        let sy = y as f64 + (j as f64 + 0.5) * step;
        for i in 0..SUBSAMPLES {
            let sx = x as f64 + (i as f64 + 0.5) * step;
            if disc.contains(Point::new(sx, sy)) {
                inside += 1;
            }
        }
    }
    f32::from(inside) / (SUBSAMPLES * SUBSAMPLES) as f32
}

impl Surface for Pixmap {
    fn fill_discs(&mut self, discs: &[Circle], color: Color) {
        if color.is_transparent() {
            return;
        }
        let rects: Vec<(usize, PixelRect)> = discs
            .iter()
            .enumerate()
            .filter_map(|(i, disc)| self.pixel_rect(disc).map(|r| (i, r)))
            .collect();
        let Some(bounds) = rects.iter().map(|&(_, r)| r).reduce(PixelRect::union) else {
            return;
        };

        // Coverage of the union, approximated by the best single disc per pixel.
        let stride = bounds.width();
        let mut mask = vec![0.0_f32; stride * (bounds.y1 - bounds.y0)];
        for &(i, rect) in &rects {
            for y in rect.y0..rect.y1 {
                for x in rect.x0..rect.x1 {
                    let slot = &mut mask[(y - bounds.y0) * stride + (x - bounds.x0)];
                    if *slot < 1.0 {
                        *slot = slot.max(coverage(&discs[i], x, y));
                    }
                }
            }
        }

        for y in bounds.y0..bounds.y1 {
            for x in bounds.x0..bounds.x1 {
                let c = mask[(y - bounds.y0) * stride + (x - bounds.x0)];
                if c <= 0.0 {
                    continue;
                }
                let src = color.with_alpha(channel(f64::from(color.a) * f64::from(c)));
                let px = &mut self.data[y * self.width + x];
                *px = src.source_over(*px);
            }
        }
    }

    fn fill_background(&mut self, color: Color) {
        if color.is_transparent() {
            return;
        }
        for px in &mut self.data {
            *px = color.source_over(*px);
        }
    }

    fn clear(&mut self) {
        self.data.fill(Color::TRANSPARENT);
    }
}

impl core::fmt::Debug for Pixmap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Pixmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn painted(p: &Pixmap) -> usize {
        p.pixels().iter().filter(|c| !c.is_transparent()).count()
    }

    #[test]
    fn new_pixmap_is_transparent() {
        let p = Pixmap::new(8, 4);
        assert_eq!(p.pixels().len(), 32);
        assert!(p.is_blank(Color::TRANSPARENT));
        assert_eq!(p.pixel(8, 0), None);
    }

    #[test]
    fn disc_covers_center_pixels() {
        let mut p = Pixmap::new(10, 10);
        p.fill_discs(&[Circle::new((5.0, 5.0), 1.25)], Color::BLACK);
        for (x, y) in [(4, 4), (5, 4), (4, 5), (5, 5)] {
            assert_eq!(p.pixel(x, y), Some(Color::BLACK));
        }
        assert_eq!(p.pixel(0, 0), Some(Color::TRANSPARENT));
        assert_eq!(p.pixel(7, 7), Some(Color::TRANSPARENT));
    }

    #[test]
    fn overlapping_discs_do_not_darken() {
        let grey = Color::BLACK.with_alpha(100);
        let mut once = Pixmap::new(10, 10);
        once.fill_discs(&[Circle::new((5.0, 5.0), 2.0)], grey);
        let mut twice = Pixmap::new(10, 10);
        twice.fill_discs(&[Circle::new((5.0, 5.0), 2.0), Circle::new((5.0, 5.0), 2.0)], grey);
        assert!(once == twice);
        assert_eq!(once.pixel(5, 5), Some(grey));
    }

    #[test]
    fn discs_outside_are_clipped() {
        let mut p = Pixmap::new(4, 4);
        p.fill_discs(&[Circle::new((-10.0, -10.0), 2.0), Circle::new((20.0, 2.0), 3.0)], Color::BLACK);
        assert!(p.is_blank(Color::TRANSPARENT));

        p.fill_discs(&[Circle::new((0.0, 0.0), 1.5)], Color::BLACK);
        assert_eq!(p.pixel(0, 0), Some(Color::BLACK));
    }

    #[test]
    fn degenerate_discs_are_ignored() {
        let mut p = Pixmap::new(4, 4);
        p.fill_discs(
            &[Circle::new((2.0, 2.0), 0.0), Circle::new((f64::NAN, 2.0), 1.0)],
            Color::BLACK,
        );
        assert!(p.is_blank(Color::TRANSPARENT));
    }

    #[test]
    fn thin_disc_is_partially_covered() {
        let mut p = Pixmap::new(4, 4);
        p.fill_discs(&[Circle::new((1.5, 1.5), 0.25)], Color::BLACK);
        let c = p.pixel(1, 1).unwrap();
        assert!(c.a > 0 && c.a < 255, "{c:?}");
        assert_eq!(painted(&p), 1);
    }

    #[test]
    fn background_then_clear() {
        let mut p = Pixmap::new(3, 3);
        p.fill_background(Color::WHITE);
        assert!(p.is_blank(Color::WHITE));
        p.fill_discs(&[Circle::new((1.5, 1.5), 1.0)], Color::BLACK);
        assert_eq!(p.pixel(1, 1), Some(Color::BLACK));
        p.clear();
        assert!(p.is_blank(Color::TRANSPARENT));
    }
}
