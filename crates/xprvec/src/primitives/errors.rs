//! Error types for expression composition.
//!
//! ## Purpose
//!
//! This module defines the runtime error conditions of the engine. Almost every
//! misuse of the engine is a type error (mismatched compile-time dimensions,
//! operations without a functor for the element types, two literals composed
//! with each other). What remains are the places where runtime-sized storage
//! meets the compile-time dimension, plus checked element access.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry both sides of the disagreement.
//! * **Eager**: Errors are raised before a node is built or an element written.
//! * **No-std**: Contains no heap data; works without `alloc`.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Invariants
//!
//! * A successfully constructed expression never produces one of these errors
//!   while it is evaluated.
//!
//! ## Non-goals
//!
//! * This module does not perform the checks itself (see the engine validator).
//! * There is no variant for unsupported operations; those do not compile.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for expression composition and container access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XprError {
    /// Runtime-sized storage disagrees with the compile-time dimension.
    DimensionMismatch {
        /// Dimension required by the composition.
        expected: usize,
        /// Length of the storage that was offered.
        found: usize,
    },

    /// Checked access past the end of a sized operand.
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Dimension of the operand.
        size: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for XprError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::DimensionMismatch { expected, found } => {
                write!(
                    f,
                    "Dimension mismatch: expected {expected} elements, found {found}"
                )
            }
            Self::IndexOutOfRange { index, size } => {
                write!(f, "Index out of range: {index} (size is {size})")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for XprError {}
