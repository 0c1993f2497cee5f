//! Scalar capability traits.
//!
//! ## Purpose
//!
//! This module names the element types the engine knows about and the
//! capabilities functors require from them. Each trait is implemented for a
//! fixed list of types; a type outside the list simply cannot take part in
//! the corresponding operations.
//!
//! ## Key concepts
//!
//! * **Scalar**: a type that may appear as a bare literal operand.
//! * **Truth**: a type with a truth value, for logical operations and `select`.
//! * **Real**: a floating type with the C math library extras (`fmod`, `drem`,
//!   Bessel functions).
//! * **ToReal**: the floating type an element is evaluated in by
//!   transcendental functions.
//! * **Power**: raising to a power of the same type (real or complex).
//!
//! ## Non-goals
//!
//! * This module does not decide result types of mixed operands (see `promote`).

// External dependencies
use num_traits::Float;

#[cfg(feature = "complex")]
use num_complex::Complex;

// ============================================================================
// Scalar
// ============================================================================

/// Element types that may be used as broadcast literals.
pub trait Scalar: Copy {}

impl Scalar for bool {}
impl Scalar for i32 {}
impl Scalar for i64 {}
impl Scalar for f32 {}
impl Scalar for f64 {}

#[cfg(feature = "complex")]
impl Scalar for Complex<f32> {}
#[cfg(feature = "complex")]
impl Scalar for Complex<f64> {}

// ============================================================================
// Truth
// ============================================================================

/// Truth value of an element: non-zero numbers are `true`.
pub trait Truth: Copy {
    /// Interpret the element as a boolean.
    fn truth(self) -> bool;
}

impl Truth for bool {
    #[inline]
    fn truth(self) -> bool {
        self
    }
}

macro_rules! impl_truth {
    ($($t:ty => $zero:expr),* $(,)?) => {
        $(
            impl Truth for $t {
                #[inline]
                fn truth(self) -> bool {
                    self != $zero
                }
            }
        )*
    };
}

impl_truth!(i32 => 0, i64 => 0, f32 => 0.0, f64 => 0.0);

// ============================================================================
// Real
// ============================================================================

/// Floating types with the C math library functions `num-traits` lacks.
pub trait Real: Float {
    /// Remainder of `self / rhs` rounded toward zero (C `fmod`).
    fn fmod(self, rhs: Self) -> Self;

    /// IEEE remainder of `self / rhs` rounded to nearest (C `drem`).
    fn drem(self, rhs: Self) -> Self;

    /// Bessel function of the first kind of integer order `n`.
    fn bessel_jn(n: i32, x: Self) -> Self;

    /// Bessel function of the second kind of integer order `n`.
    fn bessel_yn(n: i32, x: Self) -> Self;
}

impl Real for f32 {
    #[inline]
    fn fmod(self, rhs: Self) -> Self {
        libm::fmodf(self, rhs)
    }

    #[inline]
    fn drem(self, rhs: Self) -> Self {
        libm::remainderf(self, rhs)
    }

    #[inline]
    fn bessel_jn(n: i32, x: Self) -> Self {
        libm::jnf(n, x)
    }

    #[inline]
    fn bessel_yn(n: i32, x: Self) -> Self {
        libm::ynf(n, x)
    }
}

impl Real for f64 {
    #[inline]
    fn fmod(self, rhs: Self) -> Self {
        libm::fmod(self, rhs)
    }

    #[inline]
    fn drem(self, rhs: Self) -> Self {
        libm::remainder(self, rhs)
    }

    #[inline]
    fn bessel_jn(n: i32, x: Self) -> Self {
        libm::jn(n, x)
    }

    #[inline]
    fn bessel_yn(n: i32, x: Self) -> Self {
        libm::yn(n, x)
    }
}

// ============================================================================
// ToReal
// ============================================================================

/// Conversion of a real element into the floating type math runs in.
///
/// Integers are evaluated in `f64`, floats in their own precision.
pub trait ToReal: Copy {
    /// Floating type of the conversion.
    type Output: Real;

    /// Convert the element.
    fn to_real(self) -> Self::Output;
}

macro_rules! impl_to_real {
    ($($t:ty => $out:ty),* $(,)?) => {
        $(
            impl ToReal for $t {
                type Output = $out;

                #[inline]
                fn to_real(self) -> $out {
                    self as $out
                }
            }
        )*
    };
}

impl_to_real!(i32 => f64, i64 => f64, f32 => f32, f64 => f64);

// ============================================================================
// Power
// ============================================================================

/// Raise a value to a power of the same type.
pub trait Power: Copy {
    /// `self` raised to `exponent`.
    fn power(self, exponent: Self) -> Self;
}

impl Power for f32 {
    #[inline]
    fn power(self, exponent: Self) -> Self {
        self.powf(exponent)
    }
}

impl Power for f64 {
    #[inline]
    fn power(self, exponent: Self) -> Self {
        self.powf(exponent)
    }
}

#[cfg(feature = "complex")]
impl<T: Float> Power for Complex<T> {
    #[inline]
    fn power(self, exponent: Self) -> Self {
        self.powc(exponent)
    }
}
