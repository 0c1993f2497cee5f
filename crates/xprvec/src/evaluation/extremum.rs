//! Largest and smallest elements.
//!
//! ## Purpose
//!
//! Locates the extreme element of a sized operand together with its index.
//!
//! ## Design notes
//!
//! * **Partial order**: elements only need `PartialOrd`. An element that
//!   compares neither greater nor smaller (a NaN) never replaces the current
//!   best, and the first element is kept as a starting point.
//! * **Ties**: the lowest index wins.
//!
//! ## Invariants
//!
//! * `None` is returned only when `N == 0`.

// Internal dependencies
use crate::adapters::operand::{ElemOf, VectorOperand};
use crate::engine::expr::Expr;

// ============================================================================
// Extremum
// ============================================================================

/// An element together with its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Extremum<T> {
    /// The element.
    pub value: T,

    /// Index the element was found at.
    pub index: usize,
}

fn locate<O, const N: usize>(
    operand: O,
    better: impl Fn(&ElemOf<O, N>, &ElemOf<O, N>) -> bool,
) -> Option<Extremum<ElemOf<O, N>>>
where
    O: VectorOperand<N>,
{
    let node = operand.into_node();
    (0..N).fold(None, |best: Option<Extremum<ElemOf<O, N>>>, index| {
        let value = node.eval(index);
        match best {
            Some(current) if !better(&value, &current.value) => Some(current),
            _ => Some(Extremum { value, index }),
        }
    })
}

// ============================================================================
// Entry Points
// ============================================================================

/// Largest element and its index.
///
/// ```
/// use xprvec::prelude::*;
///
/// let a = Vector::new([3, 9, 1, 9]);
/// let found = maximum(&a).unwrap();
/// assert_eq!((found.value, found.index), (9, 1));
/// ```
pub fn maximum<O, const N: usize>(operand: O) -> Option<Extremum<ElemOf<O, N>>>
where
    O: VectorOperand<N>,
    ElemOf<O, N>: PartialOrd,
{
    locate(operand, |candidate, best| candidate > best)
}

/// Smallest element and its index.
pub fn minimum<O, const N: usize>(operand: O) -> Option<Extremum<ElemOf<O, N>>>
where
    O: VectorOperand<N>,
    ElemOf<O, N>: PartialOrd,
{
    locate(operand, |candidate, best| candidate < best)
}

/// Largest element.
#[inline]
pub fn max<O, const N: usize>(operand: O) -> Option<ElemOf<O, N>>
where
    O: VectorOperand<N>,
    ElemOf<O, N>: PartialOrd,
{
    maximum(operand).map(|found| found.value)
}

/// Smallest element.
#[inline]
pub fn min<O, const N: usize>(operand: O) -> Option<ElemOf<O, N>>
where
    O: VectorOperand<N>,
    ElemOf<O, N>: PartialOrd,
{
    minimum(operand).map(|found| found.value)
}
