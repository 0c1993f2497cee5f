//! Reductions over expressions.
//!
//! ## Purpose
//!
//! This module folds a sized operand down to a single value. A reduction is
//! a consumer like assignment: it evaluates every index of its operand
//! exactly once, in index order, with no intermediate vector.
//!
//! ## Design notes
//!
//! * **Any sized operand**: each reduction accepts `&Vector` or `Xpr`, so
//!   `sum(&a * &b + 1.0)` reduces a fused tree directly.
//! * **Promotion applies**: `dot` multiplies with the same promotion rules as
//!   `*`; `norm2` accumulates in the operand's real type.
//! * **Empty vectors**: `sum` of nothing is zero, `product` is one,
//!   `all_elements` is true and `any_elements` is false.
//!
//! ## Key concepts
//!
//! * **sum / product**: additive and multiplicative folds.
//! * **dot**: sum of element-wise products of two operands.
//! * **norm1 / norm2**: sum of absolute values and Euclidean length.
//! * **all_elements / any_elements**: truthiness folds with short-circuit.
//! * **cross**: three-dimensional vector product.
//!
//! ## Non-goals
//!
//! * Compensated summation. Accumulation is left to right in the element type.

// External dependencies
use core::ops::{Mul, Sub};
use num_traits::{Float, One, Zero};

// Internal dependencies
use crate::adapters::operand::{binary, ElemOf, VectorOperand};
use crate::engine::expr::Expr;
use crate::math::functor::{self, BinaryFunctor, UnaryFunctor};
use crate::math::transcendental::Abs;
use crate::primitives::scalar::{ToReal, Truth};
use crate::storage::vector::Vector;

// ============================================================================
// Folds
// ============================================================================

/// Sum of all elements.
///
/// ```
/// use xprvec::prelude::*;
///
/// let a = Vector::new([1, 2, 3]);
/// assert_eq!(sum(&a * 2), 12);
/// ```
pub fn sum<O, const N: usize>(operand: O) -> ElemOf<O, N>
where
    O: VectorOperand<N>,
    ElemOf<O, N>: Zero,
{
    let node = operand.into_node();
    (0..N).fold(Zero::zero(), |acc, index| acc + node.eval(index))
}

/// Product of all elements.
pub fn product<O, const N: usize>(operand: O) -> ElemOf<O, N>
where
    O: VectorOperand<N>,
    ElemOf<O, N>: One,
{
    let node = operand.into_node();
    (0..N).fold(One::one(), |acc, index| acc * node.eval(index))
}

/// Sum of the element-wise products of `lhs` and `rhs`.
pub fn dot<L, R, const N: usize>(
    lhs: L,
    rhs: R,
) -> <functor::Mul as BinaryFunctor<ElemOf<L, N>, ElemOf<R, N>>>::Output
where
    L: VectorOperand<N>,
    R: VectorOperand<N>,
    functor::Mul: BinaryFunctor<ElemOf<L, N>, ElemOf<R, N>>,
    <functor::Mul as BinaryFunctor<ElemOf<L, N>, ElemOf<R, N>>>::Output: Zero,
{
    sum::<_, N>(binary(functor::Mul, lhs, rhs))
}

/// Sum of absolute values (moduli for complex elements).
pub fn norm1<O, const N: usize>(operand: O) -> <Abs as UnaryFunctor<ElemOf<O, N>>>::Output
where
    O: VectorOperand<N>,
    Abs: UnaryFunctor<ElemOf<O, N>>,
    <Abs as UnaryFunctor<ElemOf<O, N>>>::Output: Zero,
{
    let node = operand.into_node();
    (0..N).fold(Zero::zero(), |acc, index| acc + Abs.apply(node.eval(index)))
}

/// Euclidean length, accumulated in the element's real type.
///
/// ```
/// use xprvec::prelude::*;
///
/// let a = Vector::new([3, 4]);
/// assert_eq!(norm2(&a), 5.0);
/// ```
pub fn norm2<O, const N: usize>(operand: O) -> <ElemOf<O, N> as ToReal>::Output
where
    O: VectorOperand<N>,
    ElemOf<O, N>: ToReal,
{
    let node = operand.into_node();
    let squares = (0..N).fold(
        <<ElemOf<O, N> as ToReal>::Output as Zero>::zero(),
        |acc, index| {
            let value = node.eval(index).to_real();
            acc + value * value
        },
    );
    Float::sqrt(squares)
}

/// Whether every element is true.
pub fn all_elements<O, const N: usize>(operand: O) -> bool
where
    O: VectorOperand<N>,
    ElemOf<O, N>: Truth,
{
    let node = operand.into_node();
    (0..N).all(|index| node.eval(index).truth())
}

/// Whether any element is true.
pub fn any_elements<O, const N: usize>(operand: O) -> bool
where
    O: VectorOperand<N>,
    ElemOf<O, N>: Truth,
{
    let node = operand.into_node();
    (0..N).any(|index| node.eval(index).truth())
}

// ============================================================================
// Cross Product
// ============================================================================

/// Vector product of two three-dimensional operands.
///
/// Unlike the element-wise compositions, each output element reads two other
/// indices of both operands, so the result is computed eagerly.
pub fn cross<L, R, T>(lhs: L, rhs: R) -> Vector<T, 3>
where
    L: VectorOperand<3>,
    R: VectorOperand<3>,
    L::Node: Expr<Elem = T>,
    R::Node: Expr<Elem = T>,
    T: Copy + Mul<Output = T> + Sub<Output = T>,
{
    let (l, r) = (lhs.into_node(), rhs.into_node());
    let (a, b) = ([l.eval(0), l.eval(1), l.eval(2)], [r.eval(0), r.eval(1), r.eval(2)]);
    Vector::new([
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ])
}
