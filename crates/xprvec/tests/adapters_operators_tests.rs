//! Tests for operator compositions.
//!
//! These tests verify the arithmetic surface of the engine:
//! - Operand shapes (vector, expression, scalar) in every placement
//! - Result-type promotion between element types
//! - Referential transparency under nesting
//! - The element-wise qualifier for division, remainders and bit operations
//!
//! ## Test Organization
//!
//! 1. **Operand Shapes** - vector/vector, vector/expression, scalars
//! 2. **Promotion** - integer, floating and mixed element types
//! 3. **Nesting** - sub-expressions behave like their values
//! 4. **Unary Operators** - negation and `!`
//! 5. **Element-wise Qualifier** - `/ % & | ^ << >>`

use approx::assert_relative_eq;

use xprvec::element_wise;
use xprvec::{Vector, Xpr};

// ============================================================================
// Operand Shape Tests
// ============================================================================

/// Test vector with vector.
#[test]
fn test_vector_vector() {
    let a = Vector::new([1, 2, 3]);
    let b = Vector::new([10, 20, 30]);

    assert_eq!((&a + &b).to_array(), [11, 22, 33]);
    assert_eq!((&b - &a).to_array(), [9, 18, 27]);
    assert_eq!((&a * &b).to_array(), [10, 40, 90]);
}

/// Test vector with expression in both placements.
#[test]
fn test_vector_expression() {
    let a = Vector::new([1.0, 2.0]);
    let b = Vector::new([3.0, 4.0]);

    assert_eq!((&a + (&b * 2.0)).to_array(), [7.0, 10.0]);
    assert_eq!(((&b * 2.0) + &a).to_array(), [7.0, 10.0]);
    assert_eq!(((&a + &b) * (&a - &b)).to_array(), [-8.0, -12.0]);
}

/// Test scalar with sized operand on both sides.
#[test]
fn test_scalar_placements() {
    let a = Vector::new([1.0_f64, 2.0, 4.0]);

    assert_eq!((&a + 1.0).to_array(), [2.0, 3.0, 5.0]);
    assert_eq!((1.0 + &a).to_array(), [2.0, 3.0, 5.0]);
    assert_eq!((10.0 - &a).to_array(), [9.0, 8.0, 6.0]);
    assert_eq!((&a - 10.0).to_array(), [-9.0, -8.0, -6.0]);
    assert_eq!((8.0 / &a).to_array(), [8.0, 4.0, 2.0]);
    assert_eq!((&a / 2.0).to_array(), [0.5, 1.0, 2.0]);

    let expr = &a * 3.0_f64;
    assert_eq!((2.0 * expr).to_array(), [6.0, 12.0, 24.0]);
    assert_eq!((expr / 3.0).to_array(), [1.0, 2.0, 4.0]);
    assert_eq!((12.0 / expr).to_array(), [4.0, 2.0, 1.0]);
}

/// Test that an unsuffixed literal on the left takes the element type.
#[test]
fn test_left_literal_takes_element_type() {
    let ints = Vector::new([1_i32, 2, 3]);
    let longs = Vector::new([1_i64, 2, 3]);
    let singles = Vector::new([1.0_f32, 2.0, 4.0]);

    let from_ints: [i32; 3] = (10 - &ints).to_array();
    assert_eq!(from_ints, [9, 8, 7]);

    let from_longs: [i64; 3] = (10 - &longs).to_array();
    assert_eq!(from_longs, [9, 8, 7]);

    let from_singles: [f32; 3] = (8.0 / &singles).to_array();
    assert_eq!(from_singles, [8.0, 4.0, 2.0]);

    // Expressions on the right resolve the same way.
    assert_eq!((10 - (&longs + &longs)).to_array(), [8_i64, 6, 4]);
    assert_eq!((1 + (&ints * &ints)).to_array(), [2, 5, 10]);
}

/// Test the cross-type left scalars: floats against integers, integers against floats.
#[test]
fn test_left_literal_mixed_types() {
    let ints = Vector::new([1_i32, 2, 3]);
    let longs = Vector::new([2_i64, 4, 8]);
    let singles = Vector::new([0.5_f32, 1.5, 2.5]);

    let halves: [f64; 3] = (0.5 * &ints).to_array();
    assert_eq!(halves, [0.5, 1.0, 1.5]);

    let quarters: [f64; 3] = (1.0 / &longs).to_array();
    assert_eq!(quarters, [0.5, 0.25, 0.125]);

    let doubled: [f32; 3] = (2 * &singles).to_array();
    assert_eq!(doubled, [1.0, 3.0, 5.0]);

    // A typed scalar outside the table goes on the right.
    let widened: [i64; 3] = (&ints + 10_i64).to_array();
    assert_eq!(widened, [11, 12, 13]);
}

/// Test that a scalar broadcast equals a vector of copies of it.
#[test]
fn test_scalar_equals_splat() {
    let a = Vector::new([5_i32, 6, 7]);
    let twos = Vector::<i32, 3>::splat(2);

    assert_eq!((&a * 2).to_array(), (&a * &twos).to_array());
    assert_eq!((2 * &a).to_array(), (&twos * &a).to_array());
}

/// Test that building an expression leaves its operands untouched.
#[test]
fn test_operands_unchanged() {
    let a = Vector::new([1, 2]);
    let b = Vector::new([3, 4]);

    let expr = &a + &b;
    let _ = expr.materialize();

    assert_eq!(a.into_array(), [1, 2]);
    assert_eq!(b.into_array(), [3, 4]);
}

/// Test that a vector can appear more than once in the same tree.
#[test]
fn test_vector_reused() {
    let a = Vector::new([1, 2, 3]);

    assert_eq!((&a * &a + &a).to_array(), [2, 6, 12]);
}

// ============================================================================
// Promotion Tests
// ============================================================================

/// Test integer promotion from `i32` to `i64`.
#[test]
fn test_promotion_integers() {
    let small = Vector::new([1_i32, 2]);
    let large = Vector::new([i64::from(i32::MAX), 1]);

    let sum: Vector<i64, 2> = (&small + &large).materialize();

    assert_eq!(sum.into_array(), [i64::from(i32::MAX) + 1, 3]);
}

/// Test integer with floating promotes to floating.
#[test]
fn test_promotion_int_float() {
    let ints = Vector::new([1_i32, 2, 3]);
    let floats = Vector::new([0.5_f64, 0.25, 0.125]);

    let out: Vector<f64, 3> = (&ints + &floats).materialize();
    assert_eq!(out.into_array(), [1.5, 2.25, 3.125]);

    let scaled: Vector<f32, 3> = (&ints * 0.5_f32).materialize();
    assert_eq!(scaled.into_array(), [0.5, 1.0, 1.5]);
}

/// Test single with double precision promotes to double.
#[test]
fn test_promotion_float_precision() {
    let single = Vector::new([0.1_f32, 0.2]);
    let double = Vector::new([1.0_f64, 2.0]);

    let out: Vector<f64, 2> = (&single + &double).materialize();

    assert_relative_eq!(out[0], 1.0 + f64::from(0.1_f32));
    assert_relative_eq!(out[1], 2.0 + f64::from(0.2_f32));
}

/// Test that integer division stays integral while mixed division does not.
#[test]
fn test_promotion_division() {
    let ints = Vector::new([7_i32, 9]);

    assert_eq!((&ints / 2).to_array(), [3, 4]);
    assert_eq!((&ints / 2.0).to_array(), [3.5, 4.5]);

    let wide: [i64; 2] = (&ints / 2_i64).to_array();
    assert_eq!(wide, [3, 4]);
}

/// Test `/=` with scalars of the element type and of a narrower type.
#[test]
fn test_scalar_div_assign() {
    let mut floats = Vector::new([3.0_f64, 9.0]);
    floats /= 3.0;
    assert_eq!(floats.into_array(), [1.0, 3.0]);

    let mut ints = Vector::new([7_i64, 9]);
    ints /= 2;
    assert_eq!(ints.into_array(), [3, 4]);
}

// ============================================================================
// Nesting Tests
// ============================================================================

/// Test the canonical nested example `(a + b) * 2`.
#[test]
fn test_nested_canonical() {
    let a = Vector::new([1.0, 2.0, 3.0]);
    let b = Vector::new([4.0, 5.0, 6.0]);
    let expr = (&a + &b) * 2.0;

    assert_eq!(expr.eval(0), 10.0);
    assert_eq!(expr.eval(1), 14.0);
    assert_eq!(expr.eval(2), 18.0);
}

/// Test that a nested expression equals the same computation through a temporary.
#[test]
fn test_nesting_matches_temporary() {
    let a = Vector::new([1.5, -2.0, 3.25, 0.0]);
    let b = Vector::new([2.0, 0.5, -1.0, 4.0]);

    let fused = ((&a - &b) * (&a + &b) + 1.0).materialize();

    let diff = (&a - &b).materialize();
    let total = (&a + &b).materialize();
    let staged = (&(&diff * &total).materialize() + 1.0).materialize();

    assert_eq!(fused, staged);
}

/// Test that sized expressions can be named and reused.
#[test]
fn test_named_subexpression() {
    let a = Vector::new([1_i32, 2, 3]);
    let doubled: Xpr<_, 3> = &a * 2;

    let out = (doubled + doubled * doubled).materialize();

    assert_eq!(out.into_array(), [6, 20, 42]);
}

// ============================================================================
// Unary Operator Tests
// ============================================================================

/// Test negation of vectors and expressions.
#[test]
fn test_negation() {
    let a = Vector::new([1.0, -2.0]);

    assert_eq!((-&a).to_array(), [-1.0, 2.0]);
    assert_eq!((-(&a * 2.0)).to_array(), [-2.0, 4.0]);
    assert_eq!((-(-&a)).to_array(), a.into_array());
}

/// Test `!` as logical not on booleans and complement on integers.
#[test]
fn test_not_operator() {
    let flags = Vector::new([true, false]);
    let bits = Vector::new([0_i32, -1]);

    assert_eq!((!&flags).to_array(), [false, true]);
    assert_eq!((!&bits).to_array(), [-1, 0]);
}

// ============================================================================
// Element-wise Qualifier Tests
// ============================================================================

/// Test element-wise division between vectors.
#[test]
fn test_element_wise_division() {
    let a = Vector::new([1.0, 9.0, 10.0]);
    let b = Vector::new([2.0, 3.0, 4.0]);

    assert_eq!((a.element_wise() / &b).to_array(), [0.5, 3.0, 2.5]);
    assert_eq!(element_wise::div(&a, &b).to_array(), [0.5, 3.0, 2.5]);
    assert_eq!(
        ((&a + 1.0).element_wise() / b.element_wise()).to_array(),
        [1.0, 10.0 / 3.0, 2.75]
    );
}

/// Test integer remainder.
#[test]
fn test_element_wise_remainder() {
    let a = Vector::new([7_i32, -7, 9]);
    let b = Vector::new([3_i32, 3, 4]);

    assert_eq!((a.element_wise() % &b).to_array(), [1, -1, 1]);
    assert_eq!(element_wise::rem(&a, 2).to_array(), [1, -1, 1]);
    assert_eq!((20 % b.element_wise()).to_array(), [2, 2, 0]);
}

/// Test bitwise operators.
#[test]
fn test_element_wise_bitwise() {
    let a = Vector::new([0b1100_i32, 0b1010]);
    let b = Vector::new([0b1010_i32, 0b0110]);

    assert_eq!((a.element_wise() & &b).to_array(), [0b1000, 0b0010]);
    assert_eq!((a.element_wise() | &b).to_array(), [0b1110, 0b1110]);
    assert_eq!((a.element_wise() ^ &b).to_array(), [0b0110, 0b1100]);
    assert_eq!(element_wise::bitxor(&a, &b).to_array(), [0b0110, 0b1100]);
    assert_eq!((0b1111 & b.element_wise()).to_array(), [0b1010, 0b0110]);
}

/// Test shifts.
#[test]
fn test_element_wise_shifts() {
    let a = Vector::new([1_i64, 2, 3]);
    let by = Vector::new([1_i64, 2, 3]);

    assert_eq!((a.element_wise() << &by).to_array(), [2, 8, 24]);
    assert_eq!(element_wise::shl(&a, 4).to_array(), [16_i64, 32, 48]);
    assert_eq!((element_wise::shl(&a, 4).element_wise() >> 2).to_array(), [4_i64, 8, 12]);
    assert_eq!(element_wise::shr(&by, 1).to_array(), [0_i64, 1, 1]);
}

/// Test that the qualifier can be removed again.
#[test]
fn test_element_wise_into_inner() {
    let a = Vector::new([1_i32, 2]);
    let qualified = a.element_wise();

    assert_eq!((qualified.into_inner() + 1).to_array(), [2, 3]);
}

/// Test that integer division by zero panics at evaluation, not construction.
#[test]
#[should_panic]
fn test_element_wise_division_by_zero_panics_on_eval() {
    let a = Vector::new([1, 2]);
    let zeros = Vector::new([1, 0]);

    let expr = a.element_wise() / &zeros;
    assert_eq!(expr.eval(0), 1);
    let _ = expr.eval(1);
}
