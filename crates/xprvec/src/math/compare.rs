//! Comparison and logical functors.
//!
//! Comparisons promote both operands like arithmetic does, then compare; the
//! result is always `bool` whatever the operand types. Ordering comparisons
//! need `PartialOrd` on the promoted type, so complex operands only support
//! `Eq` and `NotEq`.

// Internal dependencies
use super::functor::BinaryFunctor;
use crate::primitives::promote::Promote;
use crate::primitives::scalar::Truth;

macro_rules! comparison {
    ($($(#[$doc:meta])* $name:ident => $bound:ident, $op:tt;)*) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
            pub struct $name;

            impl<A, B> BinaryFunctor<A, B> for $name
            where
                A: Promote<B>,
                A::Output: $bound,
            {
                type Output = bool;

                #[inline]
                fn apply(&self, lhs: A, rhs: B) -> bool {
                    let (lhs, rhs) = lhs.promote(rhs);
                    lhs $op rhs
                }
            }
        )*
    };
}

comparison! {
    /// `lhs == rhs`.
    Eq => PartialEq, ==;
    /// `lhs != rhs`.
    NotEq => PartialEq, !=;
    /// `lhs < rhs`.
    Less => PartialOrd, <;
    /// `lhs <= rhs`.
    LessEq => PartialOrd, <=;
    /// `lhs > rhs`.
    Greater => PartialOrd, >;
    /// `lhs >= rhs`.
    GreaterEq => PartialOrd, >=;
}

/// Logical conjunction of the operands' truth values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct And;

impl<A: Truth, B: Truth> BinaryFunctor<A, B> for And {
    type Output = bool;

    #[inline]
    fn apply(&self, lhs: A, rhs: B) -> bool {
        lhs.truth() && rhs.truth()
    }
}

/// Logical disjunction of the operands' truth values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Or;

impl<A: Truth, B: Truth> BinaryFunctor<A, B> for Or {
    type Output = bool;

    #[inline]
    fn apply(&self, lhs: A, rhs: B) -> bool {
        lhs.truth() || rhs.truth()
    }
}
