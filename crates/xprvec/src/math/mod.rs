//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer is the functor library: one zero-sized type per element-level
//! operation, each implementing [`functor::BinaryFunctor`] or
//! [`functor::UnaryFunctor`] for exactly the element types it supports.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Functor traits, arithmetic and unary operator functors.
pub mod functor;

/// Comparison and logical functors.
pub mod compare;

/// Bitwise functors.
pub mod bitwise;

/// Transcendental and elementary math functors.
pub mod transcendental;

/// Complex-number functors.
#[cfg(feature = "complex")]
pub mod complex;
