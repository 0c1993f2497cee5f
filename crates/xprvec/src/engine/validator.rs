//! Runtime validation at the boundary between runtime-sized storage and
//! compile-time dimensions.
//!
//! ## Purpose
//!
//! Sized operands agree on their dimension by construction. Slices do not:
//! this module checks them before they become operands or assignment targets.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Each check returns the first violation.
//! * **Logged**: Rejections are reported at `debug` level through `log`.
//!
//! ## Non-goals
//!
//! * Bounds checks inside evaluation; a built expression is valid for every
//!   index below its dimension.

// Internal dependencies
use crate::primitives::errors::XprError;

/// Validation helpers for dimensions and indices.
pub struct Validator;

impl Validator {
    /// Check that `found` elements satisfy a composition of dimension `expected`.
    pub fn validate_dimension(expected: usize, found: usize) -> Result<(), XprError> {
        if expected != found {
            log::debug!("rejecting storage of length {found} for dimension {expected}");
            return Err(XprError::DimensionMismatch { expected, found });
        }
        Ok(())
    }

    /// View `data` as an array of exactly `N` elements.
    pub fn validate_array<T, const N: usize>(data: &[T]) -> Result<&[T; N], XprError> {
        <&[T; N]>::try_from(data).map_err(|_| {
            log::debug!("rejecting storage of length {} for dimension {N}", data.len());
            XprError::DimensionMismatch {
                expected: N,
                found: data.len(),
            }
        })
    }

    /// Check that `index` addresses an element of an operand of dimension `size`.
    pub fn validate_index(index: usize, size: usize) -> Result<(), XprError> {
        if index >= size {
            log::debug!("rejecting index {index} for dimension {size}");
            return Err(XprError::IndexOutOfRange { index, size });
        }
        Ok(())
    }
}
