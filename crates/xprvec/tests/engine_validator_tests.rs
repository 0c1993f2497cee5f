#![cfg(feature = "dev")]
//! Tests for runtime validation.
//!
//! These tests verify the checks applied where runtime-sized storage meets
//! compile-time dimensions:
//! - Dimension agreement of slices
//! - Fixed-size views of slices
//! - Index bounds of checked accessors
//!
//! ## Test Organization
//!
//! 1. **Dimension Validation** - validate_dimension
//! 2. **Array Validation** - validate_array
//! 3. **Index Validation** - validate_index

use xprvec::internals::engine::validator::Validator;
use xprvec::internals::primitives::errors::XprError;

// ============================================================================
// Dimension Validation Tests
// ============================================================================

/// Test that matching dimensions pass.
#[test]
fn test_validate_dimension_accepts() {
    assert!(Validator::validate_dimension(4, 4).is_ok());
    assert!(Validator::validate_dimension(0, 0).is_ok());
}

/// Test that mismatched dimensions report both sizes.
#[test]
fn test_validate_dimension_rejects() {
    assert_eq!(
        Validator::validate_dimension(3, 5),
        Err(XprError::DimensionMismatch {
            expected: 3,
            found: 5
        })
    );
}

// ============================================================================
// Array Validation Tests
// ============================================================================

/// Test that a slice of the right length is viewed as an array.
#[test]
fn test_validate_array_accepts() {
    let data = [1.0, 2.0, 3.0];
    let array: &[f64; 3] = Validator::validate_array(&data[..]).unwrap();

    assert_eq!(array, &[1.0, 2.0, 3.0]);
    assert!(Validator::validate_array::<u8, 0>(&[]).is_ok());
}

/// Test that a slice of the wrong length reports both sizes.
#[test]
fn test_validate_array_rejects() {
    let data = [1, 2, 3];

    assert_eq!(
        Validator::validate_array::<i32, 2>(&data),
        Err(XprError::DimensionMismatch {
            expected: 2,
            found: 3
        })
    );
    assert_eq!(
        Validator::validate_array::<i32, 4>(&data[..1]).unwrap_err(),
        XprError::DimensionMismatch {
            expected: 4,
            found: 1
        }
    );
}

// ============================================================================
// Index Validation Tests
// ============================================================================

/// Test the boundary of the valid index range.
#[test]
fn test_validate_index() {
    assert!(Validator::validate_index(0, 1).is_ok());
    assert!(Validator::validate_index(3, 4).is_ok());
    assert_eq!(
        Validator::validate_index(4, 4),
        Err(XprError::IndexOutOfRange { index: 4, size: 4 })
    );
    assert!(Validator::validate_index(0, 0).is_err());
}
