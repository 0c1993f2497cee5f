//! Tests for scalar traits, promotion tables and functors.
//!
//! These tests verify the element-level building blocks:
//! - Arithmetic and floating promotion between element types
//! - Truthiness of numbers
//! - The C math functions missing from `num-traits`
//! - Functors applied directly to scalars
//!
//! ## Test Organization
//!
//! 1. **Promotion** - Promote and FloatPromote tables
//! 2. **Scalar Traits** - Truth, ToReal, Real, Power
//! 3. **Functors** - arithmetic, comparison, logic, bitwise, math

use approx::assert_relative_eq;

use xprvec::functor::{
    Abs, Add, And, BinaryFunctor, BitAnd, Compl, Div, Eq, Fmod, Hypot, Less, LogicalNot, Neg,
    Not, Or, Pow, Rem, Shl, Sqrt, Sub, UnaryFunctor,
};
use xprvec::{FloatPromote, Power, Promote, Real, ToReal, Truth};

// ============================================================================
// Promotion Tests
// ============================================================================

/// Test the arithmetic promotion table.
#[test]
fn test_promote_table() {
    assert_eq!(2_i32.promote(3_i64), (2_i64, 3_i64));
    assert_eq!(2_i32.promote(0.5_f32), (2.0_f32, 0.5_f32));
    assert_eq!(0.5_f32.promote(2.0_f64), (0.5_f64, 2.0_f64));
    assert_eq!(3_i64.promote(1.5_f64), (3.0_f64, 1.5_f64));
    assert_eq!(true.promote(false), (true, false));
}

/// Test the floating promotion table.
#[test]
fn test_float_promote_table() {
    // Integers alone evaluate in double precision
    assert_eq!(2_i32.promote_float(3_i32), (2.0_f64, 3.0_f64));
    // Single precision survives only against itself and i32
    assert_eq!(2_i32.promote_float(0.5_f32), (2.0_f32, 0.5_f32));
    assert_eq!(0.5_f32.promote_float(2_i32), (0.5_f32, 2.0_f32));
    assert_eq!(0.5_f32.promote_float(2_i64), (0.5_f64, 2.0_f64));
    assert_eq!(0.5_f32.promote_float(2.0_f64), (0.5_f64, 2.0_f64));
}

// ============================================================================
// Scalar Trait Tests
// ============================================================================

/// Test truthiness.
#[test]
fn test_truth() {
    assert!(true.truth());
    assert!(!false.truth());
    assert!(3_i32.truth());
    assert!(!0_i64.truth());
    assert!((-0.5_f64).truth());
    assert!(!0.0_f32.truth());
    assert!(f64::NAN.truth());
}

/// Test conversion into the real type.
#[test]
fn test_to_real() {
    let from_int: f64 = 7_i32.to_real();
    let from_single: f32 = 1.5_f32.to_real();

    assert_eq!(from_int, 7.0);
    assert_eq!(from_single, 1.5);
}

/// Test the remainders and Bessel functions.
#[test]
fn test_real_functions() {
    assert_eq!(Real::fmod(7.5_f64, 2.0), 1.5);
    assert_eq!(Real::fmod(-7.5_f64, 2.0), -1.5);
    assert_eq!(Real::drem(7.5_f64, 2.0), -0.5);
    assert_eq!(Real::fmod(7.5_f32, 2.0), 1.5);

    assert_relative_eq!(f64::bessel_jn(0, 0.0), 1.0);
    assert_relative_eq!(f32::bessel_jn(0, 0.0), 1.0);
    assert!(f64::bessel_yn(1, 0.0).is_infinite());
}

/// Test powers.
#[test]
fn test_power() {
    assert_eq!(2.0_f64.power(10.0), 1024.0);
    assert_relative_eq!(9.0_f32.power(0.5), 3.0);
}

// ============================================================================
// Functor Tests
// ============================================================================

/// Test arithmetic functors promote before applying.
#[test]
fn test_arithmetic_functors() {
    assert_eq!(Add.apply(1_i32, 2_i32), 3);
    assert_eq!(Add.apply(1_i32, 0.5_f64), 1.5);
    assert_eq!(Sub.apply(1_i64, 3_i32), -2_i64);
    assert_eq!(Div.apply(7_i32, 2_i32), 3);
    assert_eq!(Div.apply(7_i32, 2.0_f32), 3.5_f32);
    assert_eq!(Rem.apply(-7_i32, 3_i64), -1_i64);
}

/// Test unary functors.
#[test]
fn test_unary_functors() {
    assert_eq!(Neg.apply(2.5_f64), -2.5);
    assert_eq!(Not.apply(true), false);
    assert_eq!(Not.apply(5_i32), -6);
    assert_eq!(Compl.apply(5_i64), -6);
    assert!(LogicalNot.apply(0.0_f64));
    assert!(!LogicalNot.apply(5_i32));
    assert_eq!(Abs.apply(-4_i32), 4);
    assert_eq!(Sqrt.apply(16_i32), 4.0_f64);
}

/// Test comparison and logic functors.
#[test]
fn test_comparison_functors() {
    assert!(Eq.apply(2_i32, 2.0_f64));
    assert!(Less.apply(1_i64, 1.5_f32));
    assert!(!Less.apply(f64::NAN, 0.0_f64));
    assert!(And.apply(1_i32, true));
    assert!(!And.apply(0.0_f64, true));
    assert!(Or.apply(0_i32, 0.1_f32));
}

/// Test bitwise functors.
#[test]
fn test_bitwise_functors() {
    assert_eq!(BitAnd.apply(0b110_i32, 0b011_i32), 0b010);
    assert_eq!(Shl.apply(1_i32, 40_i64), 1_i64 << 40);
}

/// Test math functors.
#[test]
fn test_math_functors() {
    assert_eq!(Pow.apply(2_i32, 3_i32), 8.0_f64);
    assert_eq!(Pow.apply(2.0_f32, 3_i32), 8.0_f32);
    assert_relative_eq!(Hypot.apply(3_i32, 4.0_f64), 5.0);
    assert_eq!(Fmod.apply(7_i32, 4_i32), 3.0_f64);
}
