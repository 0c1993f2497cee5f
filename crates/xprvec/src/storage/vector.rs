//! Concrete fixed-size vectors.
//!
//! ## Purpose
//!
//! `Vector<T, N>` is the only type in the crate with real storage. It is the
//! source of operands (through [`Vector::as_expr`] or by reference in
//! operators) and the sink where expressions are finally evaluated.
//!
//! ## Design notes
//!
//! * **Inline storage**: `[T; N]`, no heap.
//! * **Value semantics**: copied, compared and dropped like the array it wraps.
//! * **Assignment terminates laziness**: [`Vector::assign`] evaluates each index
//!   of an expression once and stores it.
//!
//! ## Invariants
//!
//! * The length is always `N`.
//! * While an expression borrows a vector, the vector cannot be assigned to,
//!   so an assignment never reads elements it has already overwritten.
//!
//! ## Non-goals
//!
//! * Resizing, heap storage, printing.

// External dependencies
use core::array;
use core::ops::{Index, IndexMut};
use core::slice;
use num_traits::Zero;

// Internal dependencies
use super::xpr::Xpr;
use crate::engine::expr::Expr;
use crate::engine::reference::VectorRef;
use crate::engine::validator::Validator;
use crate::primitives::errors::XprError;

// ============================================================================
// Vector
// ============================================================================

/// A dense vector of `N` elements of type `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize> {
    data: [T; N],
}

impl<T, const N: usize> Vector<T, N> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Wrap an array.
    #[inline]
    pub const fn new(data: [T; N]) -> Self {
        Self { data }
    }

    /// Build each element from its index.
    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self {
            data: array::from_fn(f),
        }
    }

    /// Every element set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self
    where
        T: Copy,
    {
        Self { data: [value; N] }
    }

    /// Every element zero.
    #[inline]
    pub fn zeros() -> Self
    where
        T: Zero + Copy,
    {
        Self::splat(T::zero())
    }

    /// Copy runtime-sized storage, which must hold exactly `N` elements.
    pub fn from_slice(data: &[T]) -> Result<Self, XprError>
    where
        T: Copy,
    {
        Validator::validate_array(data).map(|data: &[T; N]| Self::new(*data))
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Dimension of the vector.
    #[inline]
    pub const fn size(&self) -> usize {
        N
    }

    /// Number of elements; always `N`.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether the vector has no elements (`N == 0`).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Element at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Element at `index`, reporting an out-of-range index.
    pub fn at(&self, index: usize) -> Result<T, XprError>
    where
        T: Copy,
    {
        Validator::validate_index(index, N)?;
        Ok(self.data[index])
    }

    /// The elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// The elements as an array.
    #[inline]
    pub fn as_array(&self) -> &[T; N] {
        &self.data
    }

    /// Unwrap into the array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.data
    }

    /// Iterate over the elements.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    /// Borrow the vector as an expression operand.
    #[inline]
    pub fn as_expr(&self) -> Xpr<VectorRef<'_, T, N>, N>
    where
        T: Copy,
    {
        Xpr::new(VectorRef::new(&self.data))
    }

    /// Evaluate `xpr` at every index and store the results.
    ///
    /// This is where a composed expression is finally computed: each index
    /// is evaluated exactly once, with no temporary storage.
    pub fn assign<E>(&mut self, xpr: Xpr<E, N>)
    where
        E: Expr,
        E::Elem: Into<T>,
    {
        log::trace!("assigning {N}-element expression");
        for (index, slot) in self.data.iter_mut().enumerate() {
            *slot = xpr.eval(index).into();
        }
    }

    /// Apply `f` to the stored element and the expression's element at every index.
    pub(crate) fn update_with<E, F>(&mut self, xpr: Xpr<E, N>, mut f: F)
    where
        E: Expr,
        F: FnMut(&mut T, E::Elem),
    {
        for (index, slot) in self.data.iter_mut().enumerate() {
            f(slot, xpr.eval(index));
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<T: Default, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self::new(data)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(vector: Vector<T, N>) -> Self {
        vector.data
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = XprError;

    #[inline]
    fn try_from(data: &[T]) -> Result<Self, XprError> {
        Self::from_slice(data)
    }
}

impl<E: Expr, const N: usize> From<Xpr<E, N>> for Vector<E::Elem, N> {
    #[inline]
    fn from(xpr: Xpr<E, N>) -> Self {
        xpr.materialize()
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
