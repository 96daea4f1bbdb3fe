// Copyright 2024 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The raster target strokes are drawn onto.

use crate::{Circle, Color};

/// A raster target that can be filled with discs.
///
/// This is the whole of what the stroke pipeline needs from a drawing
/// backend. A host binds it to a canvas, a GPU texture, or an in-memory
/// buffer such as [`Pixmap`](crate::Pixmap).
pub trait Surface {
    /// Fill the union of `discs` with `color`, as one operation.
    ///
    /// Discs of the same batch overlap heavily; implementations should
    /// composite each covered pixel once, so that overlapping discs do not
    /// build up a darker line where they meet.
    fn fill_discs(&mut self, discs: &[Circle], color: Color);

    /// Composite `color` over the whole surface.
    fn fill_background(&mut self, color: Color);

    /// Reset every pixel to fully transparent.
    fn clear(&mut self);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    #[inline]
    fn fill_discs(&mut self, discs: &[Circle], color: Color) {
        (**self).fill_discs(discs, color);
    }

    #[inline]
    fn fill_background(&mut self, color: Color) {
        (**self).fill_background(color);
    }

    #[inline]
    fn clear(&mut self) {
        (**self).clear();
    }
}
