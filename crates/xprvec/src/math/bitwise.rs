//! Bitwise functors.
//!
//! Defined for integer operands only: the promoted type must be `PrimInt`,
//! which no floating or complex type is.

// External dependencies
use core::ops;
use num_traits::PrimInt;

// Internal dependencies
use super::functor::BinaryFunctor;
use crate::primitives::promote::Promote;

macro_rules! bitwise {
    ($($(#[$doc:meta])* $name:ident => $op:ident :: $method:ident;)*) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
            pub struct $name;

            impl<A, B> BinaryFunctor<A, B> for $name
            where
                A: Promote<B>,
                A::Output: PrimInt + ops::$op<Output = A::Output>,
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

bitwise! {
    /// `lhs & rhs`.
    BitAnd => BitAnd::bitand;
    /// `lhs | rhs`.
    BitOr => BitOr::bitor;
    /// `lhs ^ rhs`.
    BitXor => BitXor::bitxor;
    /// `lhs << rhs`.
    Shl => Shl::shl;
    /// `lhs >> rhs`.
    Shr => Shr::shr;
}
