// Copyright 2024 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

#![allow(missing_docs)]

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident/$lfname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f32 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lfname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("quill requires either the `std` or `libm` feature")
            })+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("quill requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs/fabsf;
    fn ceil(self) -> Self => ceil/ceilf;
    fn floor(self) -> Self => floor/floorf;
    fn hypot(self, other: Self) -> Self => hypot/hypotf;
}

/// Adds convenience methods to `f32` and `f64`.
pub trait FloatExt<T> {
    /// Exponential smoothing step.
    ///
    /// Returns `weight * self + (1 - weight) * previous`, so a weight of 1
    /// ignores history entirely and a weight of 0 never moves.
    ///
    /// # Examples
    ///
    /// ```
    /// use quill::common::FloatExt;
    ///
    /// assert_eq!(4.0_f64.smooth(0.0, 0.5), 2.0);
    /// assert_eq!(4.0_f64.smooth(2.0, 1.0), 4.0);
    /// assert_eq!(4.0_f32.smooth(2.0, 0.0), 2.0);
    /// ```
    fn smooth(self, previous: T, weight: T) -> T;
}

impl FloatExt<f64> for f64 {
    #[inline]
    fn smooth(self, previous: f64, weight: f64) -> f64 {
        weight * self + (1.0 - weight) * previous
    }
}

impl FloatExt<f32> for f32 {
    #[inline]
    fn smooth(self, previous: f32, weight: f32) -> f32 {
        weight * self + (1.0 - weight) * previous
    }
}
