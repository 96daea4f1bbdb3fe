// Copyright 2024 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Velocity-sensitive ink strokes, for signature capture.
//!
//! Pointer samples (a position and a timestamp) go in; smooth cubic Bézier
//! segments drawn as runs of discs come out. Fast movement gives a thin
//! line and slow movement a thick one, which is what makes a captured
//! signature look like it was written with a pen.
//!
//! The pipeline is made of small pieces that can be used on their own:
//!
//! - [`VelocityFilter`] smooths the speed between successive samples.
//! - [`control_points`] derives Bézier control points from three samples.
//! - [`CurveBuffer`] holds the last four samples and emits one [`Segment`]
//!   per accepted sample once it can.
//! - [`WidthRange`] maps velocity to stroke width.
//! - [`curve_discs`] turns a segment into discs whose diameter moves from
//!   the start width to the end width.
//! - [`StrokeState`] is the begin / update / end state machine.
//! - [`SignaturePad`] ties them to a [`Surface`], such as the software
//!   [`Pixmap`].
//!
//! # Examples
//!
//! ```
//! use quill::{Color, PadConfig, Pixmap, Sample, SignaturePad};
//!
//! let config = PadConfig::new()
//!     .with_widths(0.5, 3.0)
//!     .with_pen_color(Color::from_rgb8(0, 0, 128))
//!     .with_background_color(Color::WHITE);
//! let mut pad = SignaturePad::new(Pixmap::new(200, 100), config).unwrap();
//!
//! pad.begin(Sample::new(20.0, 50.0, 0.0));
//! for i in 1..20 {
//!     let t = f64::from(i);
//!     pad.update(Sample::new(20.0 + 8.0 * t, 50.0 + 10.0 * (t / 3.0).sin(), 16.0 * t));
//! }
//! pad.end(Sample::new(180.0, 50.0, 320.0));
//!
//! assert!(!pad.is_empty());
//! assert!(!pad.surface().is_blank(Color::WHITE));
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. The `alloc` crate is used regardless.
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(clippy::many_single_char_names, clippy::float_cmp)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("quill requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

extern crate alloc;

mod circle;
mod color;
pub mod common;
mod config;
mod control;
mod cubicbez;
mod curve_buffer;
mod error;
mod pad;
mod param_curve;
mod pixmap;
mod point;
mod raster;
mod sample;
mod stroke;
mod surface;
mod vec2;
mod velocity;
mod width;

pub use crate::circle::*;
pub use crate::color::*;
pub use crate::config::*;
pub use crate::control::*;
pub use crate::cubicbez::*;
pub use crate::curve_buffer::*;
pub use crate::error::*;
pub use crate::pad::*;
pub use crate::param_curve::*;
pub use crate::pixmap::*;
pub use crate::point::*;
pub use crate::raster::*;
pub use crate::sample::*;
pub use crate::stroke::*;
pub use crate::surface::*;
pub use crate::vec2::*;
pub use crate::velocity::*;
pub use crate::width::*;
