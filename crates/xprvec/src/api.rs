//! Public API surface.
//!
//! ## Purpose
//!
//! This module gathers the user-facing items of every layer in one place:
//! the sized types, the expression nodes, the operand traits, the named
//! functions and the reductions. The crate root and the prelude re-export
//! from here.
//!
//! ## Key concepts
//!
//! * **Types**: [`Vector`] owns elements, [`Xpr`] is a sized lazy expression.
//! * **Functions**: comparisons, logic, math and `select` build expressions;
//!   reductions consume them.
//! * **Namespaces**: [`element_wise`] holds the qualified function forms,
//!   [`functor`] the operation types for hand-built nodes.

// Publicly re-exported types
pub use crate::adapters::element_wise::ElementWise;
pub use crate::adapters::operand::{ElemOf, NodeOf, Operand, SizedPair, VectorOperand};
pub use crate::engine::expr::{Binary, Expr, Select, SizedExpr, Unary};
pub use crate::engine::literal::Literal;
pub use crate::engine::reference::VectorRef;
pub use crate::evaluation::extremum::Extremum;
pub use crate::primitives::errors::XprError;
pub use crate::primitives::promote::{FloatPromote, LeftScalar, Promote};
pub use crate::primitives::scalar::{Power, Real, Scalar, ToReal, Truth};
pub use crate::storage::vector::Vector;
pub use crate::storage::xpr::{Xpr, XprIter};

// Publicly re-exported functions
pub use crate::adapters::functions::{
    abs, acos, and, asin, atan, atan2, cbrt, ceil, compl, cos, cosh, drem, eq, exp, floor, fmod,
    greater, greater_eq, hypot, jn, less, less_eq, ln, log10, not, not_eq, or, pow, round, select,
    sin, sinh, sqrt, tan, tanh, yn,
};
#[cfg(feature = "complex")]
pub use crate::adapters::functions::{arg, conj, imag, norm, polar, real};
pub use crate::evaluation::extremum::{max, maximum, min, minimum};
pub use crate::evaluation::reductions::{
    all_elements, any_elements, cross, dot, norm1, norm2, product, sum,
};

/// Element-wise operations between sized operands, in function form.
///
/// ```
/// use xprvec::prelude::*;
///
/// let a = Vector::new([7, 8, 9]);
/// let b = Vector::new([2, 3, 4]);
/// assert_eq!(element_wise::rem(&a, &b).to_array(), [1, 2, 1]);
/// assert_eq!((a.element_wise() % &b).to_array(), [1, 2, 1]);
/// ```
pub mod element_wise {
    pub use crate::adapters::element_wise::{bitand, bitor, bitxor, div, rem, shl, shr};
}

/// Operation types applied by expression nodes.
///
/// Every functor is a zero-sized unit struct. They are needed only to build
/// nodes by hand or to name expression types.
pub mod functor {
    pub use crate::math::bitwise::{BitAnd, BitOr, BitXor, Shl, Shr};
    pub use crate::math::compare::{And, Eq, Greater, GreaterEq, Less, LessEq, NotEq, Or};
    #[cfg(feature = "complex")]
    pub use crate::math::complex::{Arg, Conj, Im, Norm, Polar, Re};
    pub use crate::math::functor::{
        Add, BinaryFunctor, Compl, Div, LogicalNot, Mul, Neg, Not, Rem, Sub, UnaryFunctor,
    };
    pub use crate::math::transcendental::{
        Abs, Acos, Asin, Atan, Atan2, Cbrt, Ceil, Cos, Cosh, Drem, Exp, Floor, Fmod, Hypot, Jn,
        Ln, Log10, Pow, Round, Sin, Sinh, Sqrt, Tan, Tanh, Yn,
    };
}
