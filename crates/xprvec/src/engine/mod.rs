//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer holds the expression nodes: the unary, binary and select nodes
//! that apply functors, the literal node that broadcasts scalars and the
//! reference node that exposes vector storage. Together they form trees that
//! are evaluated one index at a time.
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
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Expression trait and functor nodes.
pub mod expr;

/// Literal (broadcast scalar) nodes.
pub mod literal;

/// Non-owning references to vector storage.
pub mod reference;

/// Dimension and index validation.
pub mod validator;
