//! Result-type promotion tables.
//!
//! ## Purpose
//!
//! A binary functor sees two element types and has to evaluate both in a
//! common type. This module holds the tables that pick that type, and the
//! conversions into it.
//!
//! ## Design notes
//!
//! * **Table-driven**: Each legal pair is one line of a macro invocation.
//!   A pair missing from the table has no impl, so an expression using it
//!   does not compile.
//! * **Lossless direction**: The narrower or less precise operand is
//!   converted; the result never drops the fractional or imaginary part of
//!   either side.
//!
//! ## Key concepts
//!
//! * **Promote**: usual arithmetic conversions. Identical types stay,
//!   `i32`/`i64` widen to `i64`, integer with float gives the float, `f32`
//!   with `f64` gives `f64`, real with complex of the same precision gives
//!   the complex type.
//! * **FloatPromote**: promotion for transcendental functions, whose result
//!   is always floating. `f32` stays single precision when paired with `f32`
//!   or `i32`; every other real pairing is computed in `f64`. A complex
//!   operand pulls the result into complex.
//! * **LeftScalar**: which scalar types may stand on the left of an operator.
//!   Each element type admits one integer and one floating scalar at most,
//!   so an unsuffixed literal such as `10 - &v` names a single type. Other
//!   pairings still promote when the scalar is on the right.
//!
//! ## Invariants
//!
//! * Both tables are symmetric in the types they accept.
//! * `Promote<T> for T` exists for every scalar type, including `bool`.

#[cfg(feature = "complex")]
use num_complex::Complex;

// ============================================================================
// Traits
// ============================================================================

/// Arithmetic promotion of `Self` against `Rhs`.
pub trait Promote<Rhs>: Copy {
    /// Common type both operands are evaluated in.
    type Output: Copy;

    /// Convert both operands into the common type.
    fn promote(self, rhs: Rhs) -> (Self::Output, Self::Output);
}

/// Scalar accepted on the left of an operator whose right operand has
/// elements of type `Elem`.
///
/// ```
/// use xprvec::prelude::*;
///
/// let counts = Vector::new([1_i64, 2, 3]);
/// // The literal is read as `i64`; no suffix is needed.
/// assert_eq!((10 - &counts).to_array(), [9, 8, 7]);
/// // A float literal against integers is read as `f64`.
/// assert_eq!((0.5 * &counts).to_array(), [0.5, 1.0, 1.5]);
/// ```
pub trait LeftScalar<Elem>: Copy {}

/// Floating promotion of `Self` against `Rhs` for transcendental functions.
pub trait FloatPromote<Rhs>: Copy {
    /// Floating (real or complex) type both operands are evaluated in.
    type Output: Copy;

    /// Convert both operands into the common floating type.
    fn promote_float(self, rhs: Rhs) -> (Self::Output, Self::Output);
}

// ============================================================================
// Arithmetic Table
// ============================================================================

macro_rules! promote_table {
    ($($lhs:ty, $rhs:ty => $out:ty;)*) => {
        $(
            impl Promote<$rhs> for $lhs {
                type Output = $out;

                #[inline]
                fn promote(self, rhs: $rhs) -> ($out, $out) {
                    (self as $out, rhs as $out)
                }
            }
        )*
    };
}

impl Promote<bool> for bool {
    type Output = bool;

    #[inline]
    fn promote(self, rhs: bool) -> (bool, bool) {
        (self, rhs)
    }
}

promote_table! {
    i32, i32 => i32;
    i32, i64 => i64;
    i32, f32 => f32;
    i32, f64 => f64;

    i64, i32 => i64;
    i64, i64 => i64;
    i64, f32 => f32;
    i64, f64 => f64;

    f32, i32 => f32;
    f32, i64 => f32;
    f32, f32 => f32;
    f32, f64 => f64;

    f64, i32 => f64;
    f64, i64 => f64;
    f64, f32 => f64;
    f64, f64 => f64;
}

// ============================================================================
// Floating Table
// ============================================================================

macro_rules! float_promote_table {
    ($($lhs:ty, $rhs:ty => $out:ty;)*) => {
        $(
            impl FloatPromote<$rhs> for $lhs {
                type Output = $out;

                #[inline]
                fn promote_float(self, rhs: $rhs) -> ($out, $out) {
                    (self as $out, rhs as $out)
                }
            }
        )*
    };
}

float_promote_table! {
    i32, i32 => f64;
    i32, i64 => f64;
    i32, f32 => f32;
    i32, f64 => f64;

    i64, i32 => f64;
    i64, i64 => f64;
    i64, f32 => f64;
    i64, f64 => f64;

    f32, i32 => f32;
    f32, i64 => f64;
    f32, f32 => f32;
    f32, f64 => f64;

    f64, i32 => f64;
    f64, i64 => f64;
    f64, f32 => f64;
    f64, f64 => f64;
}

// ============================================================================
// Left Scalar Table
// ============================================================================

macro_rules! left_scalar_table {
    ($($s:ty => $($elem:ty),+;)*) => {
        $($(
            impl LeftScalar<$elem> for $s {}
        )+)*
    };
}

left_scalar_table! {
    i32 => i32, f32, f64;
    i64 => i64;
    f32 => f32;
    f64 => f64, i32, i64;
}

#[cfg(feature = "complex")]
left_scalar_table! {
    f32 => Complex<f32>;
    f64 => Complex<f64>;
    Complex<f32> => Complex<f32>, f32;
    Complex<f64> => Complex<f64>, f64;
}

// ============================================================================
// Complex Tables
// ============================================================================

#[cfg(feature = "complex")]
macro_rules! complex_promote {
    ($($t:ty),*) => {
        $(
            impl Promote<Complex<$t>> for Complex<$t> {
                type Output = Complex<$t>;

                #[inline]
                fn promote(self, rhs: Complex<$t>) -> (Complex<$t>, Complex<$t>) {
                    (self, rhs)
                }
            }

            impl Promote<$t> for Complex<$t> {
                type Output = Complex<$t>;

                #[inline]
                fn promote(self, rhs: $t) -> (Complex<$t>, Complex<$t>) {
                    (self, Complex::from(rhs))
                }
            }

            impl Promote<Complex<$t>> for $t {
                type Output = Complex<$t>;

                #[inline]
                fn promote(self, rhs: Complex<$t>) -> (Complex<$t>, Complex<$t>) {
                    (Complex::from(self), rhs)
                }
            }

            impl FloatPromote<Complex<$t>> for Complex<$t> {
                type Output = Complex<$t>;

                #[inline]
                fn promote_float(self, rhs: Complex<$t>) -> (Complex<$t>, Complex<$t>) {
                    (self, rhs)
                }
            }

            impl FloatPromote<$t> for Complex<$t> {
                type Output = Complex<$t>;

                #[inline]
                fn promote_float(self, rhs: $t) -> (Complex<$t>, Complex<$t>) {
                    (self, Complex::from(rhs))
                }
            }

            impl FloatPromote<Complex<$t>> for $t {
                type Output = Complex<$t>;

                #[inline]
                fn promote_float(self, rhs: Complex<$t>) -> (Complex<$t>, Complex<$t>) {
                    (Complex::from(self), rhs)
                }
            }

            impl FloatPromote<i32> for Complex<$t> {
                type Output = Complex<$t>;

                #[inline]
                fn promote_float(self, rhs: i32) -> (Complex<$t>, Complex<$t>) {
                    (self, Complex::from(rhs as $t))
                }
            }
        )*
    };
}

#[cfg(feature = "complex")]
complex_promote!(f32, f64);
