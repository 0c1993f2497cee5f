//! Functor traits and the arithmetic and unary operator functors.
//!
//! ## Purpose
//!
//! A functor is the per-element computation an expression node applies. This
//! module defines the two functor traits and the functors behind the plain
//! arithmetic and unary operators.
//!
//! ## Design notes
//!
//! * **Stateless**: Every functor is a zero-sized unit struct; nodes store it by
//!   value at no cost.
//! * **Type-level legality**: A functor implements `BinaryFunctor<A, B>` only
//!   for the element pairs it supports. Using it elsewhere fails to compile.
//! * **Promotion first**: Binary arithmetic converts both operands through
//!   [`Promote`] before applying the operation.
//!
//! ## Invariants
//!
//! * `apply` is pure: same inputs, same output, no side effects.
//!
//! ## Non-goals
//!
//! * This module does not know about indices, sizes or operands; see the engine.

// External dependencies
use core::ops;
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::promote::Promote;
use crate::primitives::scalar::Truth;

// ============================================================================
// Functor Traits
// ============================================================================

/// Element computation taking two operands.
pub trait BinaryFunctor<A, B> {
    /// Element type produced.
    type Output;

    /// Apply the operation to one pair of elements.
    fn apply(&self, lhs: A, rhs: B) -> Self::Output;
}

/// Element computation taking one operand.
pub trait UnaryFunctor<A> {
    /// Element type produced.
    type Output;

    /// Apply the operation to one element.
    fn apply(&self, operand: A) -> Self::Output;
}

// ============================================================================
// Arithmetic
// ============================================================================

macro_rules! promoted_arithmetic {
    ($($(#[$doc:meta])* $name:ident => $op:ident :: $method:ident;)*) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
            pub struct $name;

            impl<A, B> BinaryFunctor<A, B> for $name
            where
                A: Promote<B>,
                A::Output: ops::$op<Output = A::Output>,
            {
                type Output = A::Output;

                #[inline]
                fn apply(&self, lhs: A, rhs: B) -> Self::Output {
                    let (lhs, rhs) = lhs.promote(rhs);
                    ops::$op::$method(lhs, rhs)
                }
            }
        )*
    };
}

promoted_arithmetic! {
    /// Addition, `lhs + rhs`.
    Add => Add::add;
    /// Subtraction, `lhs - rhs`.
    Sub => Sub::sub;
    /// Multiplication, `lhs * rhs`.
    Mul => Mul::mul;
    /// Division, `lhs / rhs`.
    Div => Div::div;
}

/// Remainder of integer division, `lhs % rhs`.
///
/// Integers only; the floating remainders are [`Fmod`](super::transcendental::Fmod)
/// and [`Drem`](super::transcendental::Drem).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rem;

impl<A, B> BinaryFunctor<A, B> for Rem
where
    A: Promote<B>,
    A::Output: PrimInt,
{
    type Output = A::Output;

    #[inline]
    fn apply(&self, lhs: A, rhs: B) -> Self::Output {
        let (lhs, rhs) = lhs.promote(rhs);
        lhs % rhs
    }
}

// ============================================================================
// Unary
// ============================================================================

/// Arithmetic negation, `-x`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neg;

impl<A: ops::Neg> UnaryFunctor<A> for Neg {
    type Output = A::Output;

    #[inline]
    fn apply(&self, operand: A) -> Self::Output {
        -operand
    }
}

/// Rust's `!`: logical not on `bool`, bitwise complement on integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Not;

impl<A: ops::Not> UnaryFunctor<A> for Not {
    type Output = A::Output;

    #[inline]
    fn apply(&self, operand: A) -> Self::Output {
        !operand
    }
}

/// Logical not of the element's truth value; always yields `bool`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogicalNot;

impl<A: Truth> UnaryFunctor<A> for LogicalNot {
    type Output = bool;

    #[inline]
    fn apply(&self, operand: A) -> bool {
        !operand.truth()
    }
}

/// Bitwise complement of an integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Compl;

impl<A: PrimInt> UnaryFunctor<A> for Compl {
    type Output = A;

    #[inline]
    fn apply(&self, operand: A) -> A {
        !operand
    }
}
