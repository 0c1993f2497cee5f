//! Tests for vectors and sized expressions.
//!
//! These tests verify the container boundary of the engine:
//! - Vector construction, access and conversion
//! - Assignment as the point where laziness ends
//! - Consumers of sized expressions (eval, get, iter, materialize, write_to)
//! - Runtime dimension checks for slice-backed storage
//!
//! ## Test Organization
//!
//! 1. **Construction** - new, splat, from_fn, zeros, conversions
//! 2. **Access** - size, indexing, checked access
//! 3. **Assignment** - assign, compound assignment, element conversion
//! 4. **Expression Consumers** - eval, get, try_eval, iter, write_to
//! 5. **Runtime Dimensions** - slices entering compositions

use xprvec::{Vector, VectorRef, Xpr, XprError};

// ============================================================================
// Construction Tests
// ============================================================================

/// Test the basic constructors.
#[test]
fn test_vector_constructors() {
    let v = Vector::new([1, 2, 3]);
    assert_eq!(v.as_slice(), &[1, 2, 3]);

    let s = Vector::<f32, 4>::splat(0.5);
    assert!(s.iter().all(|&x| x == 0.5));

    let f = Vector::<usize, 5>::from_fn(|i| i * i);
    assert_eq!(f.into_array(), [0, 1, 4, 9, 16]);

    let z = Vector::<i64, 2>::zeros();
    assert_eq!(z, Vector::new([0, 0]));

    let d = Vector::<f64, 3>::default();
    assert_eq!(d, Vector::zeros());
}

/// Test conversions to and from arrays and slices.
#[test]
fn test_vector_conversions() {
    let v: Vector<i32, 3> = [4, 5, 6].into();
    let back: [i32; 3] = v.into();
    assert_eq!(back, [4, 5, 6]);

    let slice: &[i32] = &[7, 8, 9];
    let from_slice = Vector::<i32, 3>::try_from(slice).unwrap();
    assert_eq!(from_slice.into_array(), [7, 8, 9]);

    let err = Vector::<i32, 2>::try_from(slice).unwrap_err();
    assert_eq!(
        err,
        XprError::DimensionMismatch {
            expected: 2,
            found: 3
        }
    );
}

/// Test materializing an expression through `From`.
#[test]
fn test_vector_from_expression() {
    let a = Vector::new([1.0, 2.0]);
    let doubled: Vector<f64, 2> = Vector::from(&a * 2.0);

    assert_eq!(doubled.into_array(), [2.0, 4.0]);
}

// ============================================================================
// Access Tests
// ============================================================================

/// Test size queries.
#[test]
fn test_vector_size() {
    let v = Vector::new([0u8; 7]);
    assert_eq!(v.size(), 7);
    assert_eq!(v.len(), 7);
    assert!(!v.is_empty());

    let empty = Vector::<i32, 0>::new([]);
    assert!(empty.is_empty());
}

/// Test indexing and checked access.
#[test]
fn test_vector_access() {
    let mut v = Vector::new([10, 20, 30]);

    assert_eq!(v[1], 20);
    v[1] = 25;
    assert_eq!(v.get(1), Some(&25));
    assert_eq!(v.get(3), None);

    assert_eq!(v.at(2), Ok(30));
    assert_eq!(
        v.at(3),
        Err(XprError::IndexOutOfRange { index: 3, size: 3 })
    );
}

/// Test mutable iteration and slices.
#[test]
fn test_vector_mutation() {
    let mut v = Vector::new([1, 2, 3]);
    for x in v.iter_mut() {
        *x *= 10;
    }
    v.as_mut_slice()[0] = 5;

    assert_eq!(v.into_iter().collect::<Vec<_>>(), vec![5, 20, 30]);
}

/// Test that a vector over an out-of-range index panics.
#[test]
#[should_panic]
fn test_vector_index_out_of_range_panics() {
    let v = Vector::new([1, 2, 3]);
    let _ = v[3];
}

// ============================================================================
// Assignment Tests
// ============================================================================

/// Test that assignment stores every element of the expression.
#[test]
fn test_assign_expression() {
    let a = Vector::new([1.0, 2.0, 3.0]);
    let b = Vector::new([4.0, 5.0, 6.0]);
    let mut out = Vector::<f64, 3>::zeros();

    out.assign((&a + &b) * 2.0);

    assert_eq!(out.into_array(), [10.0, 14.0, 18.0]);
}

/// Test that assignment converts elements into the target type.
#[test]
fn test_assign_converts_elements() {
    let ints = Vector::new([1, 2, 3]);
    let mut out = Vector::<f64, 3>::zeros();

    out.assign(&ints * 2);

    assert_eq!(out.into_array(), [2.0, 4.0, 6.0]);
}

/// Test that a vector's own expression form can be assigned into another.
#[test]
fn test_assign_from_as_expr() {
    let a = Vector::new([3, 1, 4]);
    let mut copy = Vector::<i64, 3>::zeros();

    copy.assign(a.as_expr());

    assert_eq!(copy.into_array(), [3, 1, 4]);
}

/// Test compound assignment from vectors, expressions and scalars.
#[test]
fn test_compound_assignment() {
    let b = Vector::new([1.0, 2.0, 3.0]);
    let mut v = Vector::new([10.0, 20.0, 30.0]);

    v += &b;
    assert_eq!(v.into_array(), [11.0, 22.0, 33.0]);

    v -= &b * 2.0;
    assert_eq!(v.into_array(), [9.0, 18.0, 27.0]);

    v *= 2.0;
    assert_eq!(v.into_array(), [18.0, 36.0, 54.0]);

    v /= 9.0;
    assert_eq!(v.into_array(), [2.0, 4.0, 6.0]);

    v += 1;
    assert_eq!(v.into_array(), [3.0, 5.0, 7.0]);
}

/// Test integer compound assignment keeps integer semantics.
#[test]
fn test_compound_assignment_integers() {
    let mut v = Vector::new([7, 8, 9]);
    v /= 2;
    assert_eq!(v.into_array(), [3, 4, 4]);

    v *= Vector::new([1, 2, 3]).as_expr();
    assert_eq!(v.into_array(), [3, 8, 12]);
}

// ============================================================================
// Expression Consumer Tests
// ============================================================================

/// Test direct evaluation and checked access on expressions.
#[test]
fn test_xpr_eval_and_get() {
    let a = Vector::new([1, 2, 3]);
    let expr = &a * 10;

    assert_eq!(expr.size(), 3);
    assert_eq!(expr.eval(1), 20);
    assert_eq!(expr.get(2), Some(30));
    assert_eq!(expr.get(3), None);
    assert_eq!(expr.try_eval(0), Ok(10));
    assert_eq!(
        expr.try_eval(5),
        Err(XprError::IndexOutOfRange { index: 5, size: 3 })
    );
}

/// Test iteration in both directions.
#[test]
fn test_xpr_iteration() {
    let a = Vector::new([1, 2, 3, 4]);
    let expr = &a + 1;

    assert_eq!(expr.iter().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
    assert_eq!(expr.iter().rev().collect::<Vec<_>>(), vec![5, 4, 3, 2]);
    assert_eq!(expr.iter().len(), 4);

    let mut owned = expr.into_iter();
    assert_eq!(owned.next(), Some(2));
    assert_eq!(owned.next_back(), Some(5));
    assert_eq!(owned.next(), Some(3));
    assert_eq!(owned.next(), Some(4));
    assert_eq!(owned.next(), None);
    assert_eq!(owned.next_back(), None);
}

/// Test writing into runtime-sized storage.
#[test]
fn test_xpr_write_to() {
    let a = Vector::new([1, 2, 3]);

    let mut out = vec![0.0_f64; 3];
    (&a * 2).write_to(out.as_mut_slice()).unwrap();
    assert_eq!(out, vec![2.0, 4.0, 6.0]);

    let mut short = vec![-1.0_f64; 2];
    let err = (&a * 2).write_to(short.as_mut_slice()).unwrap_err();
    assert_eq!(
        err,
        XprError::DimensionMismatch {
            expected: 3,
            found: 2
        }
    );
    // Nothing written on failure
    assert_eq!(short, vec![-1.0, -1.0]);
}

/// Test conversion of an expression into an array.
#[test]
fn test_xpr_to_array() {
    let a = Vector::new([2, 4]);

    assert_eq!((-&a).to_array(), [-2, -4]);
}

// ============================================================================
// Runtime Dimension Tests
// ============================================================================

/// Test that slice-backed operands are checked before composition.
#[test]
fn test_slice_view_dimension_check() {
    let data = vec![1.0, 2.0, 3.0];

    let view = Xpr::<VectorRef<'_, f64, 3>, 3>::from_slice(&data).unwrap();
    let sum = (view + 1.0).materialize();
    assert_eq!(sum.into_array(), [2.0, 3.0, 4.0]);

    let err = VectorRef::<'_, f64, 4>::from_slice(&data).unwrap_err();
    assert_eq!(
        err,
        XprError::DimensionMismatch {
            expected: 4,
            found: 3
        }
    );
}

/// Test that slice views accept exactly `N` elements and reject the rest.
#[test]
fn test_slice_view_exact_length() {
    let data = [1_i32, 2, 3, 4];

    let view = VectorRef::<'_, i32, 4>::from_slice(&data).unwrap();
    assert_eq!(view.as_slice(), &data);

    assert_eq!(
        VectorRef::<'_, i32, 3>::from_slice(&data),
        Err(XprError::DimensionMismatch {
            expected: 3,
            found: 4
        })
    );
    assert_eq!(
        VectorRef::<'_, i32, 5>::from_slice(&data),
        Err(XprError::DimensionMismatch {
            expected: 5,
            found: 4
        })
    );
    assert_eq!(
        Vector::<i32, 5>::from_slice(&data),
        Err(XprError::DimensionMismatch {
            expected: 5,
            found: 4
        })
    );
}

/// Test that a slice view combines with a fixed vector of equal dimension.
#[test]
fn test_slice_view_with_vector() {
    let data = [0.5_f64, 1.5];
    let fixed = Vector::new([2.0, 2.0]);

    let view = Xpr::<VectorRef<'_, f64, 2>, 2>::from_slice(&data).unwrap();

    assert_eq!((view * &fixed).to_array(), [1.0, 3.0]);
}

/// Test that error messages carry the offending values.
#[test]
fn test_error_display() {
    let mismatch = XprError::DimensionMismatch {
        expected: 3,
        found: 5,
    };
    assert_eq!(
        mismatch.to_string(),
        "Dimension mismatch: expected 3 elements, found 5"
    );

    let range = XprError::IndexOutOfRange { index: 9, size: 4 };
    assert_eq!(range.to_string(), "Index out of range: 9 (size is 4)");

    let boxed: Box<dyn std::error::Error> = Box::new(range);
    assert!(boxed.to_string().contains("size is 4"));
}
