//! # xprvec: Fused Expressions over Fixed-Size Vectors
//!
//! Dense vectors whose dimension is part of their type, and arithmetic on
//! them that builds lazy expression trees instead of temporaries. An
//! expression like `&a + &b * 2.0` computes nothing; when it is assigned,
//! each output element is produced in a single pass that reads `a[i]` and
//! `b[i]` once.
//!
//! ## Quick Start
//!
//! ```rust
//! use xprvec::prelude::*;
//!
//! let a = Vector::new([1.0, 2.0, 3.0]);
//! let b = Vector::new([4.0, 5.0, 6.0]);
//!
//! // Build a tree; nothing is evaluated yet.
//! let expr = (&a + &b) * 2.0 - 1.0;
//!
//! // Assignment evaluates each index once.
//! let mut out = Vector::<f64, 3>::zeros();
//! out.assign(expr);
//! assert_eq!(out.into_array(), [9.0, 13.0, 17.0]);
//! ```
//!
//! ## Operands and Promotion
//!
//! Every composition takes at least one sized operand (a `&Vector` or an
//! `Xpr`); the others may be scalars, which are broadcast. Element types
//! promote the way C arithmetic does: `i32` with `f64` gives `f64`, `f32`
//! with `f64` gives `f64`.
//!
//! ```rust
//! use xprvec::prelude::*;
//!
//! let counts: Vector<i32, 3> = Vector::new([1, 2, 3]);
//! let scaled: Vector<f64, 3> = (&counts * 0.5).materialize();
//! assert_eq!(scaled.into_array(), [0.5, 1.0, 1.5]);
//!
//! // Scalars on either side; a literal on the left takes the element type.
//! assert_eq!((10 - &counts).to_array(), [9, 8, 7]);
//! assert_eq!(less(1, &counts).to_array(), [false, true, true]);
//! ```
//!
//! ## Named Functions
//!
//! Comparisons, logic and the math library are functions because Rust's
//! comparison operators must return `bool`:
//!
//! ```rust
//! use xprvec::prelude::*;
//!
//! let v = Vector::new([-2.0, 0.5, 4.0]);
//! let positive = greater(&v, 0.0);
//! assert!(any_elements(positive));
//!
//! let clamped = select(less(&v, 0.0), 0.0, sqrt(&v)).materialize();
//! assert_eq!(clamped.into_array(), [0.0, 0.5f64.sqrt(), 2.0]);
//! ```
//!
//! ## Element-wise Qualifier
//!
//! Division between two vectors, remainders, bitwise operations and shifts
//! are spelled out with `.element_wise()`:
//!
//! ```rust
//! use xprvec::prelude::*;
//!
//! let a = Vector::new([12, 10, 7]);
//! let b = Vector::new([4, 3, 2]);
//! assert_eq!((a.element_wise() / &b).to_array(), [3, 3, 3]);
//! assert_eq!((a.element_wise() & 6).to_array(), [4, 2, 6]);
//! ```
//!
//! ## Result and Error Handling
//!
//! Mismatched dimensions between vectors are type errors. Storage whose
//! length is only known at run time is checked when it enters a
//! composition, and reported as [`XprError`]:
//!
//! ```rust
//! use xprvec::prelude::*;
//!
//! let runtime = vec![1.0, 2.0];
//! let err = Xpr::<VectorRef<'_, f64, 3>, 3>::from_slice(&runtime).unwrap_err();
//! assert_eq!(err, XprError::DimensionMismatch { expected: 3, found: 2 });
//! ```
//!
//! Vectors of different dimension cannot be combined:
//!
//! ```compile_fail
//! use xprvec::prelude::*;
//!
//! let a = Vector::new([1.0, 2.0, 3.0]);
//! let b = Vector::new([1.0, 2.0]);
//! let _ = &a + &b;
//! ```
//!
//! Operations without a definition for the element type do not resolve:
//!
//! ```compile_fail
//! use xprvec::prelude::*;
//!
//! let a = Vector::new([1.5, 2.5]);
//! let _ = a.element_wise() & 1.0;
//! ```
//!
//! Two scalars never form an expression:
//!
//! ```compile_fail
//! use xprvec::prelude::*;
//!
//! let _ = sqrt(2.0);
//! ```
//!
//! An expression cannot outlive the vectors it reads:
//!
//! ```compile_fail
//! use xprvec::prelude::*;
//!
//! let expr = {
//!     let a = Vector::new([1, 2, 3]);
//!     &a + 1
//! };
//! let _ = expr.materialize();
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate allocates nothing. Disable default features to drop the
//! standard library; math then runs on `libm`:
//!
//! ```toml
//! [dependencies]
//! xprvec = { version = "0.1", default-features = false }
//! ```
//!
//! ## Features
//!
//! - `std` (default): links `std` and implements `std::error::Error`.
//! - `complex`: complex element types from `num-complex` and the complex
//!   function set (`polar`, `real`, `imag`, `conj`, `arg`, `norm`).
//! - `dev`: exposes the internal layers under `internals` for testing.

#![cfg_attr(not(feature = "std"), no_std)]

// Layer 1: Primitives - errors, scalar traits and promotion tables.
mod primitives;

// Layer 2: Math - element-level functors.
mod math;

// Layer 3: Engine - expression nodes.
mod engine;

// Layer 4: Storage - vectors and sized expressions.
mod storage;

// Layer 5: Adapters - operands, operators and named functions.
mod adapters;

// Layer 6: Evaluation - reductions.
mod evaluation;

// Public API surface.
mod api;

pub use api::*;

// Standard xprvec prelude.
pub mod prelude {
    pub use crate::api::{
        abs, acos, all_elements, and, any_elements, asin, atan, atan2, cbrt, ceil, compl, cos,
        cosh, cross, dot, drem, element_wise, eq, exp, floor, fmod, greater, greater_eq, hypot,
        jn, less, less_eq, ln, log10, max, maximum, min, minimum, norm1, norm2, not, not_eq, or,
        pow, product, round, select, sin, sinh, sqrt, sum, tan, tanh, yn, ElementWise, Expr,
        Extremum, LeftScalar, Operand, SizedExpr, SizedPair, Vector, VectorOperand, VectorRef,
        Xpr, XprError,
    };
    #[cfg(feature = "complex")]
    pub use crate::api::{arg, conj, imag, norm, polar, real};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod storage {
        pub use crate::storage::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
}
