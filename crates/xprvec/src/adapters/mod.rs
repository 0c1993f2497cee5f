//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer is the user-facing surface for building expressions. It
//! resolves each operand to a node (vector reference, sub-expression or
//! literal), then exposes the compositions as operators, as named functions
//! and behind the `element_wise` qualifier.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: Evaluation
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Storage
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Operand shape resolution.
pub mod operand;

/// `core::ops` implementations.
pub mod operators;

/// Comparison, logic, math and selection functions.
pub mod functions;

/// The element-wise qualifier and its operators.
pub mod element_wise;
