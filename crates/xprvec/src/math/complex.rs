//! Complex-number functors (`complex` feature).
//!
//! Adds `polar` and the complex-only unary functions. Complex `pow` and the
//! complex arithmetic need nothing here: they come from the promotion tables
//! and from `num-complex` implementing the operator traits.

// External dependencies
use num_complex::Complex;
use num_traits::Float;

// Internal dependencies
use super::functor::{BinaryFunctor, UnaryFunctor};
use super::transcendental::Abs;
use crate::primitives::promote::FloatPromote;

// ============================================================================
// Polar
// ============================================================================

/// Complex number from modulus `lhs` and argument `rhs`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Polar;

impl<A, B> BinaryFunctor<A, B> for Polar
where
    A: FloatPromote<B>,
    A::Output: Float,
{
    type Output = Complex<A::Output>;

    #[inline]
    fn apply(&self, lhs: A, rhs: B) -> Self::Output {
        let (r, theta) = lhs.promote_float(rhs);
        Complex::from_polar(r, theta)
    }
}

// ============================================================================
// Unary
// ============================================================================

macro_rules! complex_unary {
    ($($(#[$doc:meta])* $name:ident => |$z:ident| $body:expr;)*) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
            pub struct $name;

            impl<T: Float> UnaryFunctor<Complex<T>> for $name {
                type Output = T;

                #[inline]
                fn apply(&self, $z: Complex<T>) -> T {
                    $body
                }
            }
        )*
    };
}

complex_unary! {
    /// Real part.
    Re => |z| z.re;
    /// Imaginary part.
    Im => |z| z.im;
    /// Argument (phase angle) in `(-pi, pi]`.
    Arg => |z| z.arg();
    /// Squared modulus, `re² + im²`.
    Norm => |z| z.norm_sqr();
}

/// Complex conjugate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Conj;

impl<T: Float> UnaryFunctor<Complex<T>> for Conj {
    type Output = Complex<T>;

    #[inline]
    fn apply(&self, z: Complex<T>) -> Complex<T> {
        z.conj()
    }
}

impl UnaryFunctor<Complex<f32>> for Abs {
    type Output = f32;

    #[inline]
    fn apply(&self, z: Complex<f32>) -> f32 {
        z.norm()
    }
}

impl UnaryFunctor<Complex<f64>> for Abs {
    type Output = f64;

    #[inline]
    fn apply(&self, z: Complex<f64>) -> f64 {
        z.norm()
    }
}
