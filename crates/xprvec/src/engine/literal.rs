//! Literal operands.
//!
//! A literal lets a bare scalar sit next to sized operands. It has no
//! dimension of its own: placed in an `Xpr<_, N>` it behaves as `N` copies
//! of the same value.

// Internal dependencies
use super::expr::{Expr, SizedExpr};

/// A scalar broadcast to every index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Literal<T>(T);

impl<T: Copy> Literal<T> {
    /// Wrap a scalar.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// The wrapped scalar.
    #[inline]
    pub fn value(&self) -> T {
        self.0
    }
}

impl<T: Copy> Expr for Literal<T> {
    type Elem = T;

    // The index is irrelevant: every position holds the same value.
    #[inline]
    fn eval(&self, _index: usize) -> T {
        self.0
    }
}

impl<T: Copy, const N: usize> SizedExpr<N> for Literal<T> {}
