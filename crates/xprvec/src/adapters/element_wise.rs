//! Qualified element-wise operators.
//!
//! ## Purpose
//!
//! Division between two vectors, remainders, bitwise operations and shifts
//! are deliberately not available as plain operators on vectors. They are
//! reached through an explicit qualifier so code states that it means the
//! element-by-element operation.
//!
//! ## Design notes
//!
//! * **Method form**: `a.element_wise() / &b`, `x.element_wise() % 3`. The
//!   qualifier wraps a sized operand; the right-hand side is any operand,
//!   including another qualified one.
//! * **Function form**: `element_wise::rem(&a, &b)` and friends, for call
//!   sites that prefer prefix notation.
//!
//! ## Invariants
//!
//! * Integer division or remainder by zero and out-of-range shifts panic when
//!   the offending element is evaluated, as they do on the scalar types.

// External dependencies
use core::ops;

// Internal dependencies
use super::operand::{binary, ElemOf, Operand, VectorOperand};
use crate::engine::expr::{Binary, Expr};
use crate::engine::literal::Literal;
use crate::math::bitwise;
use crate::math::functor::{self, BinaryFunctor};
use crate::primitives::promote::LeftScalar;
use crate::storage::vector::Vector;
use crate::storage::xpr::Xpr;

#[cfg(feature = "complex")]
use num_complex::Complex;

// ============================================================================
// Qualifier
// ============================================================================

/// A sized operand marked for element-wise operators.
///
/// Produced by [`Vector::element_wise`] and [`Xpr::element_wise`].
#[derive(Debug, Clone, Copy)]
pub struct ElementWise<O, const N: usize>(O);

impl<O: VectorOperand<N>, const N: usize> ElementWise<O, N> {
    /// Wrap a sized operand.
    #[inline]
    pub fn new(operand: O) -> Self {
        Self(operand)
    }

    /// Remove the qualifier.
    #[inline]
    pub fn into_inner(self) -> O {
        self.0
    }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Qualify the vector for element-wise `/ % & | ^ << >>`.
    #[inline]
    pub fn element_wise(&self) -> ElementWise<&Self, N> {
        ElementWise(self)
    }
}

impl<E: Expr, const N: usize> Xpr<E, N> {
    /// Qualify the expression for element-wise `/ % & | ^ << >>`.
    #[inline]
    pub fn element_wise(self) -> ElementWise<Self, N> {
        ElementWise(self)
    }
}

impl<O: VectorOperand<N>, const N: usize> Operand<N> for ElementWise<O, N> {
    type Node = O::Node;

    #[inline]
    fn into_node(self) -> O::Node {
        self.0.into_node()
    }
}

impl<O: VectorOperand<N>, const N: usize> VectorOperand<N> for ElementWise<O, N> {}

// ============================================================================
// Operators
// ============================================================================

macro_rules! qualified_op {
    ($($op:ident::$method:ident => $functor:path;)*) => {
        $(
            impl<O, R, const N: usize> ops::$op<R> for ElementWise<O, N>
            where
                O: VectorOperand<N>,
                R: Operand<N>,
                $functor: BinaryFunctor<ElemOf<O, N>, ElemOf<R, N>>,
            {
                type Output = Xpr<Binary<$functor, O::Node, R::Node>, N>;

                #[inline]
                fn $method(self, rhs: R) -> Self::Output {
                    binary($functor, self.0, rhs)
                }
            }
        )*
    };
}

qualified_op! {
    Div::div => functor::Div;
    Rem::rem => functor::Rem;
    BitAnd::bitand => bitwise::BitAnd;
    BitOr::bitor => bitwise::BitOr;
    BitXor::bitxor => bitwise::BitXor;
    Shl::shl => bitwise::Shl;
    Shr::shr => bitwise::Shr;
}

// `$s op qualified`, restricted to the left scalars of the element type.
macro_rules! scalar_qualified_op {
    ($s:ty: $($op:ident::$method:ident => $functor:path),*) => {
        $(
            impl<O, const N: usize> ops::$op<ElementWise<O, N>> for $s
            where
                O: VectorOperand<N>,
                $s: LeftScalar<ElemOf<O, N>>,
                $functor: BinaryFunctor<$s, ElemOf<O, N>>,
            {
                type Output = Xpr<Binary<$functor, Literal<$s>, O::Node>, N>;

                #[inline]
                fn $method(self, rhs: ElementWise<O, N>) -> Self::Output {
                    binary($functor, self, rhs.0)
                }
            }
        )*
    };
}

macro_rules! scalar_qualified_ops {
    ($($s:ty),* $(,)?) => {
        $(
            scalar_qualified_op!($s:
                Rem::rem => functor::Rem,
                BitAnd::bitand => bitwise::BitAnd,
                BitOr::bitor => bitwise::BitOr,
                BitXor::bitxor => bitwise::BitXor,
                Shl::shl => bitwise::Shl,
                Shr::shr => bitwise::Shr
            );
        )*
    };
}

// Remainder, bitwise operators and shifts exist for integers only.
scalar_qualified_ops!(i32, i64);

macro_rules! scalar_qualified_div {
    ($($s:ty),* $(,)?) => {
        $(
            scalar_qualified_op!($s: Div::div => functor::Div);
        )*
    };
}

scalar_qualified_div!(i32, i64, f32, f64);

#[cfg(feature = "complex")]
scalar_qualified_div!(Complex<f32>, Complex<f64>);

// ============================================================================
// Function Form
// ============================================================================

macro_rules! qualified_fn {
    ($($(#[$doc:meta])* $name:ident => $functor:path;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name<L, R, const N: usize>(lhs: L, rhs: R) -> Xpr<Binary<$functor, L::Node, R::Node>, N>
            where
                L: VectorOperand<N>,
                R: Operand<N>,
                $functor: BinaryFunctor<ElemOf<L, N>, ElemOf<R, N>>,
            {
                binary($functor, lhs, rhs)
            }
        )*
    };
}

qualified_fn! {
    /// Element-wise `lhs / rhs`.
    div => functor::Div;
    /// Element-wise integer remainder `lhs % rhs`.
    rem => functor::Rem;
    /// Element-wise `lhs & rhs`.
    bitand => bitwise::BitAnd;
    /// Element-wise `lhs | rhs`.
    bitor => bitwise::BitOr;
    /// Element-wise `lhs ^ rhs`.
    bitxor => bitwise::BitXor;
    /// Element-wise `lhs << rhs`.
    shl => bitwise::Shl;
    /// Element-wise `lhs >> rhs`.
    shr => bitwise::Shr;
}
