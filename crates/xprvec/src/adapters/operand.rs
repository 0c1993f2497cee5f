//! Operand shape resolution.
//!
//! ## Purpose
//!
//! Every entry point of the dispatch layer accepts "something that can be an
//! operand of dimension `N`". This module decides what each kind of value
//! turns into inside a node.
//!
//! ## Design notes
//!
//! * **Concrete vector** (`&Vector<T, N>`): becomes a [`VectorRef`] borrowing
//!   its storage. Two vectors combined both become references.
//! * **Expression** (`Xpr<E, N>`): contributes its node `E` directly; no
//!   wrapper is added around sub-expressions.
//! * **Scalar** (`i32`, `i64`, `f32`, `f64`, `bool`, complex with the
//!   feature): becomes a [`Literal`] broadcast to dimension `N`.
//!
//! ## Key concepts
//!
//! * **Operand<N>**: any of the above. The dimension is a trait parameter, so
//!   a `&Vector<T, 3>` is an `Operand<3>` and nothing else, while a scalar is
//!   an operand of every dimension.
//! * **VectorOperand<N>**: the sized subset. Entry points require at least one
//!   sized operand, which keeps literal-with-literal compositions out of the
//!   type system.
//! * **SizedPair<N>**: two operands of which at least one is sized, either
//!   one. Named binary functions are bounded by it.
//!
//! ## Invariants
//!
//! * Resolution never copies vector storage.

// Internal dependencies
use crate::engine::expr::{Binary, Expr, Unary};
use crate::engine::literal::Literal;
use crate::engine::reference::VectorRef;
use crate::math::functor::{BinaryFunctor, UnaryFunctor};
use crate::primitives::scalar::Scalar;
use crate::storage::vector::Vector;
use crate::storage::xpr::Xpr;

#[cfg(feature = "complex")]
use num_complex::Complex;

// ============================================================================
// Traits
// ============================================================================

/// A value usable as an operand of a composition of dimension `N`.
pub trait Operand<const N: usize> {
    /// Node the operand becomes.
    type Node: Expr;

    /// Convert into the node.
    fn into_node(self) -> Self::Node;
}

/// An operand with its own dimension `N` (a vector or an expression).
pub trait VectorOperand<const N: usize>: Operand<N> {}

/// Two operands `(L, R)` of which at least one is sized.
///
/// Either side may be the scalar:
///
/// ```
/// use xprvec::prelude::*;
///
/// let v = Vector::new([1, 2, 3]);
/// assert_eq!(less(&v, 2).to_array(), [true, false, false]);
/// assert_eq!(less(2, &v).to_array(), [false, false, true]);
/// ```
///
/// Two scalars are not a pair:
///
/// ```compile_fail
/// use xprvec::prelude::*;
///
/// let _ = less(1, 2);
/// ```
pub trait SizedPair<const N: usize> {}

/// Node type an operand resolves to.
pub type NodeOf<O, const N: usize> = <O as Operand<N>>::Node;

/// Element type an operand evaluates to.
pub type ElemOf<O, const N: usize> = <<O as Operand<N>>::Node as Expr>::Elem;

// ============================================================================
// Sized Operands
// ============================================================================

impl<'a, T: Copy, const N: usize> Operand<N> for &'a Vector<T, N> {
    type Node = VectorRef<'a, T, N>;

    #[inline]
    fn into_node(self) -> Self::Node {
        VectorRef::new(self.as_array())
    }
}

impl<T: Copy, const N: usize> VectorOperand<N> for &Vector<T, N> {}

impl<E: Expr, const N: usize> Operand<N> for Xpr<E, N> {
    type Node = E;

    #[inline]
    fn into_node(self) -> E {
        Xpr::into_node(self)
    }
}

impl<E: Expr, const N: usize> VectorOperand<N> for Xpr<E, N> {}

// ============================================================================
// Scalar Operands
// ============================================================================

impl<T: Copy, const N: usize> Operand<N> for Literal<T> {
    type Node = Self;

    #[inline]
    fn into_node(self) -> Self {
        self
    }
}

impl<T: Scalar, const N: usize> Operand<N> for T {
    type Node = Literal<T>;

    #[inline]
    fn into_node(self) -> Literal<T> {
        Literal::new(self)
    }
}

// ============================================================================
// Pairs
// ============================================================================

impl<L: VectorOperand<N>, R: Operand<N>, const N: usize> SizedPair<N> for (L, R) {}

macro_rules! scalar_left_pair {
    ($($s:ty),* $(,)?) => {
        $(
            impl<R: VectorOperand<N>, const N: usize> SizedPair<N> for ($s, R) {}
        )*
    };
}

scalar_left_pair!(bool, i32, i64, f32, f64);

#[cfg(feature = "complex")]
scalar_left_pair!(Complex<f32>, Complex<f64>);

// ============================================================================
// Composition
// ============================================================================

/// Resolve both operands and build a sized binary node.
#[inline]
pub(crate) fn binary<F, L, R, const N: usize>(
    op: F,
    lhs: L,
    rhs: R,
) -> Xpr<Binary<F, L::Node, R::Node>, N>
where
    L: Operand<N>,
    R: Operand<N>,
    F: BinaryFunctor<ElemOf<L, N>, ElemOf<R, N>>,
{
    Xpr::new(Binary::new(op, lhs.into_node(), rhs.into_node()))
}

/// Resolve the operand and build a sized unary node.
#[inline]
pub(crate) fn unary<F, O, const N: usize>(op: F, operand: O) -> Xpr<Unary<F, O::Node>, N>
where
    O: Operand<N>,
    F: UnaryFunctor<ElemOf<O, N>>,
{
    Xpr::new(Unary::new(op, operand.into_node()))
}
