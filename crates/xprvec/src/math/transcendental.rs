//! Transcendental and elementary math functors.
//!
//! ## Purpose
//!
//! This module provides the functors behind the named math functions:
//! binary `pow`, `hypot`, `atan2`, `fmod`, `drem`, `jn`, `yn`, and the unary
//! elementary functions (`sqrt`, `exp`, `sin`, ...).
//!
//! ## Design notes
//!
//! * **Floating results**: Binary functors promote through [`FloatPromote`],
//!   unary functors through [`ToReal`]; integer inputs are computed in `f64`.
//! * **C semantics**: `fmod` truncates, `drem` rounds to nearest (IEEE
//!   remainder), `jn`/`yn` take an `i32` order and a real argument.
//!
//! ## Key concepts
//!
//! * `pow` only needs [`Power`] on the promoted type, so it also covers the
//!   complex pairings when that feature is on. The other binary functors need
//!   [`Real`] and reject complex operands.
//!
//! ## Non-goals
//!
//! * Accuracy beyond what `num-traits` and `libm` provide.

// External dependencies
use num_traits::{Float, Signed};

// Internal dependencies
use super::functor::{BinaryFunctor, UnaryFunctor};
use crate::primitives::promote::FloatPromote;
use crate::primitives::scalar::{Power, Real, ToReal};

// ============================================================================
// Binary Functions
// ============================================================================

/// `lhs` raised to the power `rhs`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pow;

impl<A, B> BinaryFunctor<A, B> for Pow
where
    A: FloatPromote<B>,
    A::Output: Power,
{
    type Output = A::Output;

    #[inline]
    fn apply(&self, lhs: A, rhs: B) -> Self::Output {
        let (base, exponent) = lhs.promote_float(rhs);
        base.power(exponent)
    }
}

macro_rules! real_binary {
    ($($(#[$doc:meta])* $name:ident => |$l:ident, $r:ident| $body:expr;)*) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
            pub struct $name;

            impl<A, B> BinaryFunctor<A, B> for $name
            where
                A: FloatPromote<B>,
                A::Output: Real,
            {
                type Output = A::Output;

                #[inline]
                fn apply(&self, lhs: A, rhs: B) -> Self::Output {
                    let ($l, $r) = lhs.promote_float(rhs);
                    $body
                }
            }
        )*
    };
}

real_binary! {
    /// Length of the hypotenuse, `sqrt(lhs² + rhs²)` without overflow.
    Hypot => |l, r| l.hypot(r);
    /// Four-quadrant arc tangent of `lhs / rhs`.
    Atan2 => |l, r| l.atan2(r);
    /// Remainder of `lhs / rhs` truncated toward zero.
    Fmod => |l, r| l.fmod(r);
    /// IEEE remainder of `lhs / rhs` rounded to nearest.
    Drem => |l, r| l.drem(r);
}

/// Bessel function of the first kind, `J_n(x)`, order on the left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jn;

impl<B: ToReal> BinaryFunctor<i32, B> for Jn {
    type Output = B::Output;

    #[inline]
    fn apply(&self, order: i32, x: B) -> Self::Output {
        <B::Output as Real>::bessel_jn(order, x.to_real())
    }
}

/// Bessel function of the second kind, `Y_n(x)`, order on the left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Yn;

impl<B: ToReal> BinaryFunctor<i32, B> for Yn {
    type Output = B::Output;

    #[inline]
    fn apply(&self, order: i32, x: B) -> Self::Output {
        <B::Output as Real>::bessel_yn(order, x.to_real())
    }
}

// ============================================================================
// Unary Functions
// ============================================================================

/// Absolute value; integers stay integers, complex numbers give their modulus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Abs;

macro_rules! signed_abs {
    ($($t:ty),*) => {
        $(
            impl UnaryFunctor<$t> for Abs {
                type Output = $t;

                #[inline]
                fn apply(&self, operand: $t) -> $t {
                    Signed::abs(&operand)
                }
            }
        )*
    };
}

signed_abs!(i32, i64, f32, f64);

macro_rules! real_unary {
    ($($(#[$doc:meta])* $name:ident => $method:ident;)*) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
            pub struct $name;

            impl<A: ToReal> UnaryFunctor<A> for $name {
                type Output = A::Output;

                #[inline]
                fn apply(&self, operand: A) -> Self::Output {
                    Float::$method(operand.to_real())
                }
            }
        )*
    };
}

real_unary! {
    /// Square root.
    Sqrt => sqrt;
    /// Cube root.
    Cbrt => cbrt;
    /// Natural exponential.
    Exp => exp;
    /// Natural logarithm.
    Ln => ln;
    /// Base-10 logarithm.
    Log10 => log10;
    /// Sine.
    Sin => sin;
    /// Cosine.
    Cos => cos;
    /// Tangent.
    Tan => tan;
    /// Arc sine.
    Asin => asin;
    /// Arc cosine.
    Acos => acos;
    /// Arc tangent.
    Atan => atan;
    /// Hyperbolic sine.
    Sinh => sinh;
    /// Hyperbolic cosine.
    Cosh => cosh;
    /// Hyperbolic tangent.
    Tanh => tanh;
    /// Largest integer not above the value.
    Floor => floor;
    /// Smallest integer not below the value.
    Ceil => ceil;
    /// Nearest integer, halfway cases away from zero.
    Round => round;
}
