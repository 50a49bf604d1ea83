// This file is part of Nitrogen.
//
// Nitrogen is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Nitrogen is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Nitrogen.  If not, see <http://www.gnu.org/licenses/>.
use crate::{
    supports_fallible_assign_op, supports_fallible_op, Result, TryAdd, TryDiv, TryMul, TryRem,
    TrySub, UndefinedResult,
};
use approx::AbsDiffEq;
use num_traits::{One, ToPrimitive, Zero};
use std::{fmt, ops::Neg};

/// A signed 64 bit integer that saturates to infinity instead of wrapping.
///
/// `i64::MAX` is positive infinity and `i64::MIN` is negative infinity; every
/// other value is finite. Any operation whose exact result does not fit in the
/// finite range produces the infinity with the sign of the exact result.
/// Operations with no meaningful result at all, such as adding infinities of
/// opposite sign, fail with `UndefinedResult` through the `Try*` traits and
/// panic through the operators.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SaturatingInteger(i64);

impl SaturatingInteger {
    pub const POSITIVE_INFINITY: Self = Self(i64::MAX);
    pub const NEGATIVE_INFINITY: Self = Self(i64::MIN);
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);

    pub const fn new(v: i64) -> Self {
        Self(v)
    }

    pub const fn into_inner(self) -> i64 {
        self.0
    }

    pub const fn is_infinite(self) -> bool {
        self.0 == i64::MAX || self.0 == i64::MIN
    }

    pub const fn is_finite(self) -> bool {
        !self.is_infinite()
    }

    pub const fn signum(self) -> i64 {
        self.0.signum()
    }

    /// The infinity with the given sign. Zero is treated as positive.
    pub(crate) const fn infinity(signum: i64) -> Self {
        if signum < 0 {
            Self::NEGATIVE_INFINITY
        } else {
            Self::POSITIVE_INFINITY
        }
    }

    pub fn abs(self) -> Self {
        if self.is_infinite() {
            Self::POSITIVE_INFINITY
        } else {
            Self(self.0.abs())
        }
    }

    pub fn to_f64(self) -> f64 {
        match self {
            Self::POSITIVE_INFINITY => f64::INFINITY,
            Self::NEGATIVE_INFINITY => f64::NEG_INFINITY,
            Self(v) => v as f64,
        }
    }

    fn saturate(exact: Option<i64>, signum: i64) -> Self {
        match exact {
            Some(v) => Self(v),
            None => Self::infinity(signum),
        }
    }
}

impl From<i64> for SaturatingInteger {
    fn from(v: i64) -> Self {
        Self(v)
    }
}

impl From<SaturatingInteger> for i64 {
    fn from(v: SaturatingInteger) -> Self {
        v.0
    }
}

impl fmt::Display for SaturatingInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::POSITIVE_INFINITY => write!(f, "Infinity"),
            Self::NEGATIVE_INFINITY => write!(f, "-Infinity"),
            Self(v) => write!(f, "{}", v),
        }
    }
}

impl Neg for SaturatingInteger {
    type Output = SaturatingInteger;

    fn neg(self) -> Self {
        match self {
            Self::POSITIVE_INFINITY => Self::NEGATIVE_INFINITY,
            Self::NEGATIVE_INFINITY => Self::POSITIVE_INFINITY,
            // -(i64::MIN + 1) is i64::MAX: the overflow lands on +inf naturally.
            Self(v) => Self(-v),
        }
    }
}

impl TryAdd for SaturatingInteger {
    type Output = SaturatingInteger;

    fn try_add(self, rhs: Self) -> Result<Self> {
        match (self.is_infinite(), rhs.is_infinite()) {
            (true, true) if self == rhs => Ok(self),
            (true, true) => Err(UndefinedResult::OppositeInfinities),
            (true, false) => Ok(self),
            (false, true) => Ok(rhs),
            (false, false) => Ok(Self::saturate(self.0.checked_add(rhs.0), self.signum())),
        }
    }
}

impl TrySub for SaturatingInteger {
    type Output = SaturatingInteger;

    fn try_sub(self, rhs: Self) -> Result<Self> {
        self.try_add(-rhs)
    }
}

impl TryMul for SaturatingInteger {
    type Output = SaturatingInteger;

    fn try_mul(self, rhs: Self) -> Result<Self> {
        let signum = self.signum() * rhs.signum();
        if self.is_infinite() || rhs.is_infinite() {
            return if signum == 0 {
                Err(UndefinedResult::InfiniteTimesZero)
            } else {
                Ok(Self::infinity(signum))
            };
        }
        Ok(Self::saturate(self.0.checked_mul(rhs.0), signum))
    }
}

impl TryDiv for SaturatingInteger {
    type Output = SaturatingInteger;

    fn try_div(self, rhs: Self) -> Result<Self> {
        match (self.is_infinite(), rhs.is_infinite()) {
            (true, true) => Err(UndefinedResult::InfiniteQuotient),
            // The divisor's sign does not flip an infinite dividend.
            (true, false) => Ok(self),
            (false, _) if rhs.0 == 0 => {
                if self.0 == 0 {
                    Err(UndefinedResult::ZeroByZero)
                } else {
                    Ok(Self::infinity(self.signum()))
                }
            }
            // Neither operand is i64::MIN here, so the quotient cannot overflow.
            (false, _) => Ok(Self(self.0 / rhs.0)),
        }
    }
}

impl TryRem for SaturatingInteger {
    type Output = SaturatingInteger;

    fn try_rem(self, rhs: Self) -> Result<Self> {
        match (self.is_infinite(), rhs.is_infinite()) {
            (true, true) => Err(UndefinedResult::InfiniteQuotient),
            (true, false) => Ok(self),
            (false, true) => Ok(self),
            (false, false) if rhs.0 == 0 => Err(UndefinedResult::RemainderByZero),
            (false, false) => Ok(Self(self.0 % rhs.0)),
        }
    }
}

macro_rules! supports_i64_rhs {
    ($TryOp:ident, $try_op:ident) => {
        impl $TryOp<i64> for SaturatingInteger {
            type Output = SaturatingInteger;

            fn $try_op(self, rhs: i64) -> Result<Self> {
                self.$try_op(Self(rhs))
            }
        }
    };
}
supports_i64_rhs!(TryAdd, try_add);
supports_i64_rhs!(TrySub, try_sub);
supports_i64_rhs!(TryMul, try_mul);
supports_i64_rhs!(TryDiv, try_div);
supports_i64_rhs!(TryRem, try_rem);

supports_fallible_op!(Add, add, TryAdd, try_add, SaturatingInteger, SaturatingInteger);
supports_fallible_op!(Sub, sub, TrySub, try_sub, SaturatingInteger, SaturatingInteger);
supports_fallible_op!(Mul, mul, TryMul, try_mul, SaturatingInteger, SaturatingInteger);
supports_fallible_op!(Div, div, TryDiv, try_div, SaturatingInteger, SaturatingInteger);
supports_fallible_op!(Rem, rem, TryRem, try_rem, SaturatingInteger, SaturatingInteger);
supports_fallible_op!(Add, add, TryAdd, try_add, SaturatingInteger, i64);
supports_fallible_op!(Sub, sub, TrySub, try_sub, SaturatingInteger, i64);
supports_fallible_op!(Mul, mul, TryMul, try_mul, SaturatingInteger, i64);
supports_fallible_op!(Div, div, TryDiv, try_div, SaturatingInteger, i64);
supports_fallible_op!(Rem, rem, TryRem, try_rem, SaturatingInteger, i64);
supports_fallible_assign_op!(AddAssign, add_assign, TryAdd, try_add, SaturatingInteger, SaturatingInteger);
supports_fallible_assign_op!(SubAssign, sub_assign, TrySub, try_sub, SaturatingInteger, SaturatingInteger);
supports_fallible_assign_op!(MulAssign, mul_assign, TryMul, try_mul, SaturatingInteger, SaturatingInteger);
supports_fallible_assign_op!(DivAssign, div_assign, TryDiv, try_div, SaturatingInteger, SaturatingInteger);

impl Zero for SaturatingInteger {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl One for SaturatingInteger {
    fn one() -> Self {
        Self::ONE
    }
}

impl ToPrimitive for SaturatingInteger {
    fn to_i64(&self) -> Option<i64> {
        self.is_finite().then_some(self.0)
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_i64().and_then(|v| u64::try_from(v).ok())
    }

    fn to_f64(&self) -> Option<f64> {
        Some(SaturatingInteger::to_f64(*self))
    }
}

impl AbsDiffEq for SaturatingInteger {
    type Epsilon = i64;

    fn default_epsilon() -> Self::Epsilon {
        0
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        if self.is_infinite() || other.is_infinite() {
            return self == other;
        }
        self.0.abs_diff(other.0) <= epsilon.unsigned_abs()
    }
}

#[cfg(test)]
mod test {
    use crate::{SaturatingInteger, TryAdd, TryDiv, TryMul, TryRem, UndefinedResult};
    use approx::assert_abs_diff_eq;
    use num_traits::{ToPrimitive, Zero};

    const INF: SaturatingInteger = SaturatingInteger::POSITIVE_INFINITY;
    const NEG_INF: SaturatingInteger = SaturatingInteger::NEGATIVE_INFINITY;

    fn si(v: i64) -> SaturatingInteger {
        SaturatingInteger::new(v)
    }

    #[test]
    fn test_overflowing_sum_saturates() {
        assert_eq!(si(i64::MAX - 1) + si(1), INF);
        assert_eq!(si(i64::MAX - 10) + si(100), INF);
        assert_eq!(si(i64::MIN + 1) + si(-1), NEG_INF);
        assert_eq!(si(i64::MIN + 1) - si(1), NEG_INF);
        assert_eq!(si(2) + si(3), si(5));
    }

    #[test]
    fn test_infinity_absorbs_finite_addend() {
        assert_eq!(INF + si(-5), INF);
        assert_eq!(si(-5) + INF, INF);
        assert_eq!(NEG_INF + si(i64::MAX - 1), NEG_INF);
        assert_eq!(INF + INF, INF);
        assert_eq!(NEG_INF - INF, NEG_INF);
    }

    #[test]
    fn test_opposite_infinities_are_undefined() {
        assert_eq!(
            INF.try_add(NEG_INF),
            Err(UndefinedResult::OppositeInfinities)
        );
        assert_eq!(INF.try_add(-INF), Err(UndefinedResult::OppositeInfinities));
    }

    #[test]
    #[should_panic(expected = "summing infinite values of different signs")]
    fn test_opposite_infinities_panic_through_operator() {
        let _ = INF + NEG_INF;
    }

    #[test]
    fn test_negation() {
        assert_eq!(-INF, NEG_INF);
        assert_eq!(-NEG_INF, INF);
        assert_eq!(-si(i64::MIN + 1), INF);
        assert_eq!(-si(i64::MAX - 1), si(i64::MIN + 1));
        assert_eq!(-(-si(42)), si(42));
    }

    #[test]
    fn test_multiplication() {
        assert_eq!(si(3) * si(-4), si(-12));
        assert_eq!(si(i64::MAX / 2) * si(3), INF);
        assert_eq!(si(i64::MAX / 2) * si(-3), NEG_INF);
        assert_eq!(si(-(i64::MAX / 2)) * si(-3), INF);
        assert_eq!(INF * si(-2), NEG_INF);
        assert_eq!(NEG_INF * NEG_INF, INF);
        assert_eq!(
            INF.try_mul(SaturatingInteger::ZERO),
            Err(UndefinedResult::InfiniteTimesZero)
        );
        assert_eq!(
            SaturatingInteger::ZERO.try_mul(NEG_INF),
            Err(UndefinedResult::InfiniteTimesZero)
        );
    }

    #[test]
    fn test_division() {
        assert_eq!(si(7) / si(2), si(3));
        assert_eq!(si(-7) / si(2), si(-3));
        assert_eq!(si(7) / INF, SaturatingInteger::ZERO);
        assert_eq!(si(-7) / NEG_INF, SaturatingInteger::ZERO);
        assert_eq!(INF / si(-3), INF);
        assert_eq!(NEG_INF / si(3), NEG_INF);
        assert_eq!(si(5) / SaturatingInteger::ZERO, INF);
        assert_eq!(si(-5) / SaturatingInteger::ZERO, NEG_INF);
        assert_eq!(INF.try_div(NEG_INF), Err(UndefinedResult::InfiniteQuotient));
        assert_eq!(
            SaturatingInteger::ZERO.try_div(SaturatingInteger::ZERO),
            Err(UndefinedResult::ZeroByZero)
        );
    }

    #[test]
    fn test_remainder() {
        assert_eq!(si(7) % si(3), si(1));
        assert_eq!(si(-7) % si(3), si(-1));
        assert_eq!(INF % si(3), INF);
        assert_eq!(si(7) % INF, si(7));
        assert_eq!(si(7).try_rem(0), Err(UndefinedResult::RemainderByZero));
        assert_eq!(INF.try_rem(INF), Err(UndefinedResult::InfiniteQuotient));
    }

    #[test]
    fn test_i64_operands() {
        assert_eq!(si(1_000) * 1_000, si(1_000_000));
        assert_eq!(si(1_000) / 3, si(333));
        assert_eq!(si(1_000) % 3, si(1));
        assert_eq!(si(i64::MAX - 1) + 1, INF);
    }

    #[test]
    fn test_assign_ops() {
        let mut v = si(10);
        v += si(5);
        v -= si(3);
        v *= si(4);
        v /= si(6);
        assert_eq!(v, si(8));
    }

    #[test]
    fn test_display() {
        assert_eq!(INF.to_string(), "Infinity");
        assert_eq!(NEG_INF.to_string(), "-Infinity");
        assert_eq!(si(-123).to_string(), "-123");
    }

    #[test]
    fn test_primitive_conversion() {
        assert_eq!(INF.to_i64(), None);
        assert_eq!(si(-3).to_i64(), Some(-3));
        assert_eq!(si(-3).to_u64(), None);
        assert_eq!(ToPrimitive::to_f64(&NEG_INF), Some(f64::NEG_INFINITY));
        assert!(SaturatingInteger::zero().is_zero());
        assert_eq!(INF.abs(), INF);
        assert_eq!(NEG_INF.abs(), INF);
        assert_eq!(si(-9).abs(), si(9));
    }

    #[test]
    fn test_approximate_equality() {
        assert_abs_diff_eq!(si(100), si(103), epsilon = 3);
        assert_abs_diff_eq!(si(i64::MIN + 1), si(i64::MIN + 1));
        assert!(!approx::abs_diff_eq!(si(100), si(104), epsilon = 3));
        assert!(!approx::abs_diff_eq!(INF, si(i64::MAX - 1), epsilon = 3));
    }
}
