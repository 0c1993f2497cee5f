//! Layer 4: Storage
//!
//! # Purpose
//!
//! This layer provides the two sized types: `Vector`, which owns elements, and
//! `Xpr`, which gives an expression tree its dimension. Both carry `N` in
//! their type, which is how dimension agreement is enforced.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: Evaluation
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Storage ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Concrete fixed-size vectors.
pub mod vector;

/// Sized expressions and their iterator.
pub mod xpr;
