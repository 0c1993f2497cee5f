//! Named element-wise functions.
//!
//! ## Purpose
//!
//! Everything Rust cannot express as an operator returning an expression:
//! comparisons, logical connectives, the math library, conditional
//! selection and the complex-number helpers.
//!
//! ## Design notes
//!
//! * **Sized argument**: a one-argument function takes a vector or an
//!   expression. A two-argument function takes a scalar on either side but
//!   not on both; the sized side fixes the dimension of the result.
//! * **Types decide availability**: each function is bounded by its functor,
//!   so `atan2` over integers promotes to `f64` while `compl` over floats
//!   does not compile.
//! * **Bessel order**: `jn` and `yn` take the `i32` order first. Either the
//!   order or the argument may vary per element.
//!
//! ## Key concepts
//!
//! * **Comparison**: `eq`, `not_eq`, `less`, `less_eq`, `greater`,
//!   `greater_eq` yield `bool` per element.
//! * **Logical**: `and`, `or`, `not` read truthiness; `compl` is the bitwise
//!   complement of integers.
//! * **Math**: `abs`, `sqrt`, ... one element at a time, integers promoted to
//!   `f64`.

// Internal dependencies
use super::operand::{binary, unary, ElemOf, Operand, SizedPair, VectorOperand};
use crate::engine::expr::{Binary, Expr, Select, Unary};
use crate::math::compare;
use crate::math::functor::{self, BinaryFunctor, UnaryFunctor};
use crate::math::transcendental;
use crate::primitives::scalar::Truth;
use crate::storage::xpr::Xpr;

#[cfg(feature = "complex")]
use crate::math::complex;

// ============================================================================
// Generators
// ============================================================================

macro_rules! binary_fn {
    ($($(#[$doc:meta])* $name:ident => $functor:path;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name<L, R, const N: usize>(lhs: L, rhs: R) -> Xpr<Binary<$functor, L::Node, R::Node>, N>
            where
                L: Operand<N>,
                R: Operand<N>,
                (L, R): SizedPair<N>,
                $functor: BinaryFunctor<ElemOf<L, N>, ElemOf<R, N>>,
            {
                binary($functor, lhs, rhs)
            }
        )*
    };
}

macro_rules! unary_fn {
    ($($(#[$doc:meta])* $name:ident => $functor:path;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name<O, const N: usize>(operand: O) -> Xpr<Unary<$functor, O::Node>, N>
            where
                O: VectorOperand<N>,
                $functor: UnaryFunctor<ElemOf<O, N>>,
            {
                unary($functor, operand)
            }
        )*
    };
}

// ============================================================================
// Comparison and Logic
// ============================================================================

binary_fn! {
    /// Element-wise `lhs == rhs` after promotion.
    ///
    /// ```
    /// use xprvec::prelude::*;
    ///
    /// let v = Vector::new([1, 2, 3]);
    /// assert_eq!(eq(&v, 2).to_array(), [false, true, false]);
    /// assert_eq!(eq(0, &v).to_array(), [false, false, false]);
    /// ```
    eq => compare::Eq;
    /// Element-wise `lhs != rhs` after promotion.
    not_eq => compare::NotEq;
    /// Element-wise `lhs < rhs` after promotion.
    less => compare::Less;
    /// Element-wise `lhs <= rhs` after promotion.
    less_eq => compare::LessEq;
    /// Element-wise `lhs > rhs` after promotion.
    greater => compare::Greater;
    /// Element-wise `lhs >= rhs` after promotion.
    greater_eq => compare::GreaterEq;
    /// Element-wise logical conjunction of truthiness.
    and => compare::And;
    /// Element-wise logical disjunction of truthiness.
    or => compare::Or;
}

unary_fn! {
    /// Element-wise logical negation: `true` where the element is zero or `false`.
    not => functor::LogicalNot;
    /// Element-wise bitwise complement of integers.
    compl => functor::Compl;
}

// ============================================================================
// Binary Math
// ============================================================================

binary_fn! {
    /// Element-wise four-quadrant arc tangent of `lhs / rhs`.
    atan2 => transcendental::Atan2;
    /// Element-wise `lhs` raised to `rhs`.
    ///
    /// Integers promote to floating point; `pow(&ints, 2)` yields `f64`.
    pow => transcendental::Pow;
    /// Element-wise `sqrt(lhs² + rhs²)`.
    hypot => transcendental::Hypot;
    /// Element-wise floating remainder truncated toward zero.
    fmod => transcendental::Fmod;
    /// Element-wise IEEE remainder rounded to nearest.
    drem => transcendental::Drem;
}

binary_fn! {
    /// Bessel function of the first kind, `J_order(x)`, element-wise.
    ///
    /// ```
    /// use xprvec::prelude::*;
    ///
    /// let orders = Vector::new([0, 1, 2]);
    /// let at_zero = jn(&orders, 0.0).to_array();
    /// assert_eq!(at_zero, [1.0, 0.0, 0.0]);
    /// ```
    jn => transcendental::Jn;
    /// Bessel function of the second kind, `Y_order(x)`, element-wise.
    yn => transcendental::Yn;
}

// ============================================================================
// Unary Math
// ============================================================================

unary_fn! {
    /// Element-wise absolute value; the modulus for complex elements.
    abs => transcendental::Abs;
    /// Element-wise square root.
    sqrt => transcendental::Sqrt;
    /// Element-wise cube root.
    cbrt => transcendental::Cbrt;
    /// Element-wise natural exponential.
    exp => transcendental::Exp;
    /// Element-wise natural logarithm.
    ln => transcendental::Ln;
    /// Element-wise base-10 logarithm.
    log10 => transcendental::Log10;
    /// Element-wise sine.
    sin => transcendental::Sin;
    /// Element-wise cosine.
    cos => transcendental::Cos;
    /// Element-wise tangent.
    tan => transcendental::Tan;
    /// Element-wise arc sine.
    asin => transcendental::Asin;
    /// Element-wise arc cosine.
    acos => transcendental::Acos;
    /// Element-wise arc tangent.
    atan => transcendental::Atan;
    /// Element-wise hyperbolic sine.
    sinh => transcendental::Sinh;
    /// Element-wise hyperbolic cosine.
    cosh => transcendental::Cosh;
    /// Element-wise hyperbolic tangent.
    tanh => transcendental::Tanh;
    /// Element-wise floor.
    floor => transcendental::Floor;
    /// Element-wise ceiling.
    ceil => transcendental::Ceil;
    /// Element-wise rounding half away from zero.
    round => transcendental::Round;
}

// ============================================================================
// Selection
// ============================================================================

/// Element-wise conditional: `then` where `cond` is true, `otherwise` elsewhere.
///
/// Both branches must have the same element type. Only the chosen branch is
/// evaluated at each index.
///
/// ```
/// use xprvec::prelude::*;
///
/// let v = Vector::new([-1.0, 2.0, -3.0]);
/// let clamped = select(less(&v, 0.0), 0.0, &v).materialize();
/// assert_eq!(clamped.into_array(), [0.0, 2.0, 0.0]);
/// ```
#[inline]
pub fn select<C, T, F, const N: usize>(
    cond: C,
    then: T,
    otherwise: F,
) -> Xpr<Select<C::Node, T::Node, F::Node>, N>
where
    C: VectorOperand<N>,
    T: Operand<N>,
    F: Operand<N>,
    ElemOf<C, N>: Truth,
    F::Node: Expr<Elem = ElemOf<T, N>>,
{
    Xpr::new(Select::new(
        cond.into_node(),
        then.into_node(),
        otherwise.into_node(),
    ))
}

// ============================================================================
// Complex
// ============================================================================

#[cfg(feature = "complex")]
binary_fn! {
    /// Element-wise complex number from modulus `lhs` and argument `rhs`.
    polar => complex::Polar;
}

#[cfg(feature = "complex")]
unary_fn! {
    /// Element-wise real part.
    real => complex::Re;
    /// Element-wise imaginary part.
    imag => complex::Im;
    /// Element-wise complex conjugate.
    conj => complex::Conj;
    /// Element-wise argument (phase angle).
    arg => complex::Arg;
    /// Element-wise squared modulus.
    norm => complex::Norm;
}
