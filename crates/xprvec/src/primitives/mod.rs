//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the error type, the scalar capability traits and the
//! promotion tables used throughout the crate. It has zero internal
//! dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: Evaluation
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Storage
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Scalar capability traits.
pub mod scalar;

/// Result-type promotion tables.
pub mod promote;
