//! Operand reference nodes.
//!
//! ## Purpose
//!
//! A `VectorRef` exposes vector storage as an expression operand without
//! copying it. It is what a concrete vector turns into when it appears in a
//! composition.
//!
//! ## Design notes
//!
//! * **Borrowed**: Holds `&'a [T; N]`. The lifetime ties every expression built
//!   on top of it to the storage, so an expression cannot outlive its vectors.
//! * **Read-only**: A shared borrow; while an expression over a vector exists
//!   that vector cannot be assigned to.
//!
//! ## Invariants
//!
//! * `eval(i)` returns exactly the stored element `i`.

// Internal dependencies
use super::expr::{Expr, SizedExpr};
use super::validator::Validator;
use crate::primitives::errors::XprError;

/// Non-owning view of `N` elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorRef<'a, T, const N: usize> {
    data: &'a [T; N],
}

impl<'a, T, const N: usize> VectorRef<'a, T, N> {
    /// View fixed-size storage.
    #[inline]
    pub const fn new(data: &'a [T; N]) -> Self {
        Self { data }
    }

    /// View runtime-sized storage, which must hold exactly `N` elements.
    pub fn from_slice(data: &'a [T]) -> Result<Self, XprError> {
        Validator::validate_array(data).map(Self::new)
    }

    /// The viewed elements.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }
}

impl<T: Copy, const N: usize> Expr for VectorRef<'_, T, N> {
    type Elem = T;

    #[inline]
    fn eval(&self, index: usize) -> T {
        self.data[index]
    }
}

impl<T: Copy, const N: usize> SizedExpr<N> for VectorRef<'_, T, N> {}
