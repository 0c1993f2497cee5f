//! Expression nodes.
//!
//! ## Purpose
//!
//! An expression node describes "apply this functor to these operands at an
//! index" and computes nothing until asked for an index. Nodes nest: an
//! operand is any other node, a literal, or a reference to vector storage.
//!
//! ## Design notes
//!
//! * **Storage-free**: A node holds its functor (zero-sized) and its operands,
//!   nothing else. A tree over vectors is a handful of references.
//! * **Checked at construction**: `new` requires the functor to accept the
//!   operands' element types, so an ill-typed node cannot exist.
//! * **Recursive evaluation**: `eval(i)` evaluates each operand at `i` once and
//!   applies the functor. Depth of recursion equals depth of nesting.
//!
//! ## Key concepts
//!
//! * **Expr**: anything that yields an element per index.
//! * **SizedExpr<N>**: a node valid for every index below `N`. Only such
//!   nodes may be wrapped in an `Xpr<_, N>` from outside the crate.
//! * **Unary / Binary**: one or two operands plus a functor.
//! * **Select**: element-wise conditional over three operands.
//!
//! ## Invariants
//!
//! * `eval` takes `&self`: evaluation cannot change a node, so repeated calls
//!   at the same index agree and calls at different indices are independent.
//!
//! ## Non-goals
//!
//! * Nodes do not know their dimension; it lives in the `Xpr` wrapper type.
//! * Nodes do not check indices; sized wrappers and storage do.

// Internal dependencies
use crate::math::functor::{BinaryFunctor, UnaryFunctor};
use crate::primitives::scalar::Truth;

// ============================================================================
// Expr Trait
// ============================================================================

/// A value that can be evaluated element by element.
///
/// Implementing this trait for a custom type lets it take part in
/// compositions once wrapped in [`Xpr`](crate::Xpr).
pub trait Expr {
    /// Element type produced at each index.
    type Elem;

    /// Compute the element at `index`.
    fn eval(&self, index: usize) -> Self::Elem;
}

impl<E: Expr + ?Sized> Expr for &E {
    type Elem = E::Elem;

    #[inline]
    fn eval(&self, index: usize) -> Self::Elem {
        (**self).eval(index)
    }
}

/// A node that can be evaluated at every index below `N`.
///
/// Vector references hold exactly `N` elements, literals hold for every `N`,
/// and composite nodes are sized when all their operands are. Implement it
/// for a custom node to wrap the node with [`Xpr::from_node`](crate::Xpr::from_node).
pub trait SizedExpr<const N: usize>: Expr {}

impl<E: SizedExpr<N> + ?Sized, const N: usize> SizedExpr<N> for &E {}

// ============================================================================
// Unary Node
// ============================================================================

/// Node applying a unary functor to one operand.
#[derive(Debug, Clone, Copy)]
pub struct Unary<F, E> {
    op: F,
    operand: E,
}

impl<F, E> Unary<F, E>
where
    E: Expr,
    F: UnaryFunctor<E::Elem>,
{
    /// Build the node.
    #[inline]
    pub fn new(op: F, operand: E) -> Self {
        Self { op, operand }
    }

    /// The wrapped operand.
    #[inline]
    pub fn operand(&self) -> &E {
        &self.operand
    }
}

impl<F, E> Expr for Unary<F, E>
where
    E: Expr,
    F: UnaryFunctor<E::Elem>,
{
    type Elem = F::Output;

    #[inline]
    fn eval(&self, index: usize) -> Self::Elem {
        self.op.apply(self.operand.eval(index))
    }
}

impl<F, E, const N: usize> SizedExpr<N> for Unary<F, E>
where
    E: SizedExpr<N>,
    F: UnaryFunctor<E::Elem>,
{
}

// ============================================================================
// Binary Node
// ============================================================================

/// Node applying a binary functor to two operands.
#[derive(Debug, Clone, Copy)]
pub struct Binary<F, L, R> {
    op: F,
    lhs: L,
    rhs: R,
}

impl<F, L, R> Binary<F, L, R>
where
    L: Expr,
    R: Expr,
    F: BinaryFunctor<L::Elem, R::Elem>,
{
    /// Build the node.
    #[inline]
    pub fn new(op: F, lhs: L, rhs: R) -> Self {
        Self { op, lhs, rhs }
    }

    /// Left operand.
    #[inline]
    pub fn lhs(&self) -> &L {
        &self.lhs
    }

    /// Right operand.
    #[inline]
    pub fn rhs(&self) -> &R {
        &self.rhs
    }
}

impl<F, L, R> Expr for Binary<F, L, R>
where
    L: Expr,
    R: Expr,
    F: BinaryFunctor<L::Elem, R::Elem>,
{
    type Elem = F::Output;

    #[inline]
    fn eval(&self, index: usize) -> Self::Elem {
        self.op.apply(self.lhs.eval(index), self.rhs.eval(index))
    }
}

impl<F, L, R, const N: usize> SizedExpr<N> for Binary<F, L, R>
where
    L: SizedExpr<N>,
    R: SizedExpr<N>,
    F: BinaryFunctor<L::Elem, R::Elem>,
{
}

// ============================================================================
// Select Node
// ============================================================================

/// Element-wise conditional: `then` where `cond` is true, `otherwise` elsewhere.
///
/// Only the chosen branch is evaluated at each index.
#[derive(Debug, Clone, Copy)]
pub struct Select<C, T, F> {
    cond: C,
    then: T,
    otherwise: F,
}

impl<C, T, F> Select<C, T, F>
where
    C: Expr,
    C::Elem: Truth,
    T: Expr,
    F: Expr<Elem = T::Elem>,
{
    /// Build the node.
    #[inline]
    pub fn new(cond: C, then: T, otherwise: F) -> Self {
        Self {
            cond,
            then,
            otherwise,
        }
    }
}

impl<C, T, F> Expr for Select<C, T, F>
where
    C: Expr,
    C::Elem: Truth,
    T: Expr,
    F: Expr<Elem = T::Elem>,
{
    type Elem = T::Elem;

    #[inline]
    fn eval(&self, index: usize) -> Self::Elem {
        if self.cond.eval(index).truth() {
            self.then.eval(index)
        } else {
            self.otherwise.eval(index)
        }
    }
}

impl<C, T, F, const N: usize> SizedExpr<N> for Select<C, T, F>
where
    C: SizedExpr<N>,
    C::Elem: Truth,
    T: SizedExpr<N>,
    F: SizedExpr<N> + Expr<Elem = T::Elem>,
{
}
