//! Operator overloads.
//!
//! ## Purpose
//!
//! Wires the `core::ops` traits to the dispatch layer so that arithmetic on
//! vectors and expressions reads like arithmetic on numbers while building a
//! lazy tree.
//!
//! ## Design notes
//!
//! * **Unqualified**: `+`, `-` and `*` accept any operand on the right and a
//!   scalar on the left. Unary `-` and `!` work on any sized operand.
//! * **Left scalars**: a scalar on the left must be a [`LeftScalar`] of the
//!   element type on the right. `10 - &ints` reads `10` as the element type
//!   without a suffix; mixing in another type takes a scalar on the right or
//!   a typed one from the table.
//! * **Division**: `/` is unqualified only when one side is a scalar. Dividing
//!   two sized operands goes through `.element_wise()` so the reader sees it
//!   is not a matrix-style division.
//! * **Compound assignment**: `+=`, `-=`, `*=` take any operand; `/=` takes a
//!   scalar. They evaluate immediately into the vector.
//!
//! ## Invariants
//!
//! * Dimensions of sized operands agree by construction: every impl below is
//!   generic over a single `N`.
//! * Building an expression evaluates nothing.

// External dependencies
use core::ops;

// Internal dependencies
use super::operand::{binary, unary, ElemOf, Operand};
use crate::engine::expr::{Binary, Expr, Unary};
use crate::engine::literal::Literal;
use crate::engine::reference::VectorRef;
use crate::math::functor::{self, BinaryFunctor, UnaryFunctor};
use crate::primitives::promote::LeftScalar;
use crate::primitives::scalar::Scalar;
use crate::storage::vector::Vector;
use crate::storage::xpr::Xpr;

#[cfg(feature = "complex")]
use num_complex::Complex;

// ============================================================================
// Sized Left Operand
// ============================================================================

macro_rules! sized_binary_op {
    ($($op:ident::$method:ident => $functor:ident;)*) => {
        $(
            impl<E, R, const N: usize> ops::$op<R> for Xpr<E, N>
            where
                E: Expr,
                R: Operand<N>,
                functor::$functor: BinaryFunctor<E::Elem, ElemOf<R, N>>,
            {
                type Output = Xpr<Binary<functor::$functor, E, R::Node>, N>;

                #[inline]
                fn $method(self, rhs: R) -> Self::Output {
                    binary(functor::$functor, self, rhs)
                }
            }

            impl<'a, T, R, const N: usize> ops::$op<R> for &'a Vector<T, N>
            where
                T: Copy,
                R: Operand<N>,
                functor::$functor: BinaryFunctor<T, ElemOf<R, N>>,
            {
                type Output = Xpr<Binary<functor::$functor, VectorRef<'a, T, N>, R::Node>, N>;

                #[inline]
                fn $method(self, rhs: R) -> Self::Output {
                    binary(functor::$functor, self, rhs)
                }
            }
        )*
    };
}

sized_binary_op! {
    Add::add => Add;
    Sub::sub => Sub;
    Mul::mul => Mul;
}

// ============================================================================
// Scalar Operands
// ============================================================================

// `$s op sized`. The scalar must be the left scalar of the element type, so
// an unsuffixed literal resolves to exactly one impl.
macro_rules! scalar_binary_op {
    ($s:ty: $($op:ident::$method:ident => $functor:ident),*) => {
        $(
            impl<E, const N: usize> ops::$op<Xpr<E, N>> for $s
            where
                E: Expr,
                $s: LeftScalar<E::Elem>,
                functor::$functor: BinaryFunctor<$s, E::Elem>,
            {
                type Output = Xpr<Binary<functor::$functor, Literal<$s>, E>, N>;

                #[inline]
                fn $method(self, rhs: Xpr<E, N>) -> Self::Output {
                    binary(functor::$functor, self, rhs)
                }
            }

            impl<'a, T, const N: usize> ops::$op<&'a Vector<T, N>> for $s
            where
                T: Copy,
                $s: LeftScalar<T>,
                functor::$functor: BinaryFunctor<$s, T>,
            {
                type Output = Xpr<Binary<functor::$functor, Literal<$s>, VectorRef<'a, T, N>>, N>;

                #[inline]
                fn $method(self, rhs: &'a Vector<T, N>) -> Self::Output {
                    binary(functor::$functor, self, rhs)
                }
            }
        )*
    };
}

macro_rules! scalar_ops {
    ($($s:ty),* $(,)?) => {
        $(
            scalar_binary_op!($s: Add::add => Add, Sub::sub => Sub, Mul::mul => Mul, Div::div => Div);
        )*
    };
}

scalar_ops!(i32, i64, f32, f64);

#[cfg(feature = "complex")]
scalar_ops!(Complex<f32>, Complex<f64>);

// `sized / scalar`.
impl<E, S, const N: usize> ops::Div<S> for Xpr<E, N>
where
    E: Expr,
    S: Scalar,
    functor::Div: BinaryFunctor<E::Elem, S>,
{
    type Output = Xpr<Binary<functor::Div, E, Literal<S>>, N>;

    #[inline]
    fn div(self, rhs: S) -> Self::Output {
        binary(functor::Div, self, rhs)
    }
}

impl<'a, T, S, const N: usize> ops::Div<S> for &'a Vector<T, N>
where
    T: Copy,
    S: Scalar,
    functor::Div: BinaryFunctor<T, S>,
{
    type Output = Xpr<Binary<functor::Div, VectorRef<'a, T, N>, Literal<S>>, N>;

    #[inline]
    fn div(self, rhs: S) -> Self::Output {
        binary(functor::Div, self, rhs)
    }
}

// ============================================================================
// Unary
// ============================================================================

macro_rules! sized_unary_op {
    ($($op:ident::$method:ident => $functor:ident;)*) => {
        $(
            impl<E, const N: usize> ops::$op for Xpr<E, N>
            where
                E: Expr,
                functor::$functor: UnaryFunctor<E::Elem>,
            {
                type Output = Xpr<Unary<functor::$functor, E>, N>;

                #[inline]
                fn $method(self) -> Self::Output {
                    unary(functor::$functor, self)
                }
            }

            impl<'a, T, const N: usize> ops::$op for &'a Vector<T, N>
            where
                T: Copy,
                functor::$functor: UnaryFunctor<T>,
            {
                type Output = Xpr<Unary<functor::$functor, VectorRef<'a, T, N>>, N>;

                #[inline]
                fn $method(self) -> Self::Output {
                    unary(functor::$functor, self)
                }
            }
        )*
    };
}

sized_unary_op! {
    Neg::neg => Neg;
    Not::not => Not;
}

// ============================================================================
// Compound Assignment
// ============================================================================

macro_rules! compound_assign {
    ($($op:ident::$method:ident => $functor:ident;)*) => {
        $(
            impl<T, R, const N: usize> ops::$op<R> for Vector<T, N>
            where
                T: Copy,
                R: Operand<N>,
                functor::$functor: BinaryFunctor<T, ElemOf<R, N>>,
                <functor::$functor as BinaryFunctor<T, ElemOf<R, N>>>::Output: Into<T>,
            {
                #[inline]
                fn $method(&mut self, rhs: R) {
                    let rhs: Xpr<R::Node, N> = Xpr::new(rhs.into_node());
                    self.update_with(rhs, |slot, value| {
                        *slot = functor::$functor.apply(*slot, value).into();
                    });
                }
            }
        )*
    };
}

compound_assign! {
    AddAssign::add_assign => Add;
    SubAssign::sub_assign => Sub;
    MulAssign::mul_assign => Mul;
}

impl<T, S, const N: usize> ops::DivAssign<S> for Vector<T, N>
where
    T: Copy,
    S: Scalar,
    functor::Div: BinaryFunctor<T, S>,
    <functor::Div as BinaryFunctor<T, S>>::Output: Into<T>,
{
    #[inline]
    fn div_assign(&mut self, rhs: S) {
        for slot in self.iter_mut() {
            *slot = functor::Div.apply(*slot, rhs).into();
        }
    }
}
