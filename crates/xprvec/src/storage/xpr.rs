//! Sized expressions.
//!
//! ## Purpose
//!
//! `Xpr<E, N>` is an expression tree `E` paired with its dimension `N`. The
//! dimension lives in the type, so two sized operands can only be combined
//! when the compiler can see that they agree. This is also the type operators
//! are implemented on and the type users hold between building an expression
//! and consuming it.
//!
//! ## Design notes
//!
//! * **Transparent**: The wrapper adds no data; it is exactly as large as `E`.
//! * **Consumers terminate laziness**: `eval`, `get`, `iter`, `materialize`,
//!   `write_to` and vector assignment are the only places elements get
//!   computed.
//!
//! ## Invariants
//!
//! * Every index below `N` is valid for `eval`.
//!
//! ## Non-goals
//!
//! * Caching. Evaluating the same index twice computes it twice.

// External dependencies
use core::array;
use core::iter::FusedIterator;

// Internal dependencies
use super::vector::Vector;
use crate::engine::expr::{Expr, SizedExpr};
use crate::engine::reference::VectorRef;
use crate::engine::validator::Validator;
use crate::primitives::errors::XprError;

// ============================================================================
// Xpr
// ============================================================================

/// An expression of compile-time dimension `N`.
#[derive(Debug, Clone, Copy)]
pub struct Xpr<E, const N: usize>(E);

impl<E: Expr, const N: usize> Xpr<E, N> {
    // Callers have already matched every operand's dimension against `N`.
    #[inline]
    pub(crate) const fn new(node: E) -> Self {
        Self(node)
    }

    /// Give a node the dimension `N`.
    ///
    /// The node must be valid for every index below `N`, which
    /// [`SizedExpr`] states at the type level:
    ///
    /// ```
    /// use xprvec::prelude::*;
    ///
    /// #[derive(Clone, Copy)]
    /// struct Ramp;
    ///
    /// impl Expr for Ramp {
    ///     type Elem = i64;
    ///     fn eval(&self, index: usize) -> i64 {
    ///         index as i64
    ///     }
    /// }
    ///
    /// impl<const N: usize> SizedExpr<N> for Ramp {}
    ///
    /// let ramp = Xpr::<_, 4>::from_node(Ramp);
    /// assert_eq!(ramp.to_array(), [0, 1, 2, 3]);
    /// ```
    ///
    /// A node over storage of another length is rejected:
    ///
    /// ```compile_fail
    /// use xprvec::prelude::*;
    ///
    /// let v = Vector::new([1_i32, 2, 3]);
    /// let _ = Xpr::<_, 5>::from_node(v.as_expr().into_node());
    /// ```
    #[inline]
    pub fn from_node(node: E) -> Self
    where
        E: SizedExpr<N>,
    {
        Self(node)
    }

    /// Dimension of the expression.
    #[inline]
    pub const fn size(&self) -> usize {
        N
    }

    /// The underlying node.
    #[inline]
    pub fn node(&self) -> &E {
        &self.0
    }

    /// Unwrap the underlying node.
    #[inline]
    pub fn into_node(self) -> E {
        self.0
    }

    /// Compute the element at `index`, which must be below `N`.
    #[inline]
    pub fn eval(&self, index: usize) -> E::Elem {
        debug_assert!(index < N, "eval: index {index} out of range for size {N}");
        self.0.eval(index)
    }

    /// Compute the element at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<E::Elem> {
        (index < N).then(|| self.0.eval(index))
    }

    /// Compute the element at `index`, reporting an out-of-range index.
    pub fn try_eval(&self, index: usize) -> Result<E::Elem, XprError> {
        Validator::validate_index(index, N)?;
        Ok(self.0.eval(index))
    }

    /// Lazily evaluate the elements in index order.
    #[inline]
    pub fn iter(&self) -> XprIter<&E, N> {
        XprIter::new(&self.0)
    }

    /// Evaluate every index into an array.
    #[inline]
    pub fn to_array(&self) -> [E::Elem; N] {
        array::from_fn(|index| self.0.eval(index))
    }

    /// Evaluate every index into a new vector.
    #[inline]
    pub fn materialize(&self) -> Vector<E::Elem, N> {
        Vector::new(self.to_array())
    }

    /// Evaluate into runtime-sized storage, which must hold exactly `N` elements.
    ///
    /// Nothing is written when the length is wrong.
    pub fn write_to<T>(&self, out: &mut [T]) -> Result<(), XprError>
    where
        E::Elem: Into<T>,
    {
        Validator::validate_dimension(N, out.len())?;
        log::trace!("writing {N}-element expression into slice");
        for (index, slot) in out.iter_mut().enumerate() {
            *slot = self.0.eval(index).into();
        }
        Ok(())
    }
}

impl<'a, T: Copy, const N: usize> Xpr<VectorRef<'a, T, N>, N> {
    /// Expression over runtime-sized storage, which must hold exactly `N` elements.
    pub fn from_slice(data: &'a [T]) -> Result<Self, XprError> {
        VectorRef::from_slice(data).map(Self::new)
    }
}

impl<E: Expr, const N: usize> Expr for Xpr<E, N> {
    type Elem = E::Elem;

    #[inline]
    fn eval(&self, index: usize) -> E::Elem {
        self.0.eval(index)
    }
}

impl<E: Expr, const N: usize> SizedExpr<N> for Xpr<E, N> {}

impl<E: Expr, const N: usize> IntoIterator for Xpr<E, N> {
    type Item = E::Elem;
    type IntoIter = XprIter<E, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        XprIter::new(self.0)
    }
}

// ============================================================================
// Iterator
// ============================================================================

/// Iterator evaluating an expression one index at a time.
#[derive(Debug, Clone)]
pub struct XprIter<E, const N: usize> {
    node: E,
    front: usize,
    back: usize,
}

impl<E: Expr, const N: usize> XprIter<E, N> {
    #[inline]
    fn new(node: E) -> Self {
        Self {
            node,
            front: 0,
            back: N,
        }
    }
}

impl<E: Expr, const N: usize> Iterator for XprIter<E, N> {
    type Item = E::Elem;

    #[inline]
    fn next(&mut self) -> Option<E::Elem> {
        if self.front >= self.back {
            return None;
        }
        let value = self.node.eval(self.front);
        self.front += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<E: Expr, const N: usize> DoubleEndedIterator for XprIter<E, N> {
    #[inline]
    fn next_back(&mut self) -> Option<E::Elem> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.node.eval(self.back))
    }
}

impl<E: Expr, const N: usize> ExactSizeIterator for XprIter<E, N> {}

impl<E: Expr, const N: usize> FusedIterator for XprIter<E, N> {}
