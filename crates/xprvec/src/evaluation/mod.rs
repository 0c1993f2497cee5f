//! Layer 6: Evaluation
//!
//! # Purpose
//!
//! This layer consumes expressions into single values: sums, products, dot
//! products, norms, truthiness folds, extremum search and the cross product.
//! Like assignment, each reduction evaluates every index of its operand once.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: Evaluation ← You are here
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Storage
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Folds over sized operands.
pub mod reductions;

/// Extremum search with indices.
pub mod extremum;
