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

#[macro_export]
macro_rules! supports_fallible_op {
    ($Op:ident, $op:ident, $TryOp:ident, $try_op:ident, $Lhs:ty, $Rhs:ty) => {
        impl std::ops::$Op<$Rhs> for $Lhs {
            type Output = <$Lhs as $crate::$TryOp<$Rhs>>::Output;

            fn $op(self, rhs: $Rhs) -> Self::Output {
                match $crate::$TryOp::$try_op(self, rhs) {
                    Ok(v) => v,
                    Err(e) => panic!("{}", e),
                }
            }
        }
    };
}

#[macro_export]
macro_rules! supports_fallible_assign_op {
    ($Op:ident, $op:ident, $TryOp:ident, $try_op:ident, $Lhs:ty, $Rhs:ty) => {
        impl std::ops::$Op<$Rhs> for $Lhs {
            fn $op(&mut self, rhs: $Rhs) {
                match $crate::$TryOp::$try_op(*self, rhs) {
                    Ok(v) => *self = v,
                    Err(e) => panic!("{}", e),
                }
            }
        }
    };
}

/// Arithmetic shared by every quantity stored as a `SaturatingInteger` in a
/// field named `v`: same-type sums, integer scaling and ratios.
#[macro_export]
macro_rules! supports_quantity_ops {
    ($TypeName:ident) => {
        impl $TypeName {
            pub const POSITIVE_INFINITY: Self =
                Self::from_raw($crate::SaturatingInteger::POSITIVE_INFINITY);
            pub const NEGATIVE_INFINITY: Self =
                Self::from_raw($crate::SaturatingInteger::NEGATIVE_INFINITY);
            pub const ZERO: Self = Self::from_raw($crate::SaturatingInteger::ZERO);

            pub(crate) const fn from_raw(v: $crate::SaturatingInteger) -> Self {
                Self { v }
            }

            pub(crate) const fn raw(self) -> $crate::SaturatingInteger {
                self.v
            }

            pub const fn is_infinite(self) -> bool {
                self.v.is_infinite()
            }

            pub const fn is_finite(self) -> bool {
                self.v.is_finite()
            }

            pub fn abs(self) -> Self {
                Self { v: self.v.abs() }
            }

            pub const fn signum(self) -> i64 {
                self.v.signum()
            }
        }

        impl $crate::TryAdd for $TypeName {
            type Output = $TypeName;

            fn try_add(self, rhs: $TypeName) -> $crate::Result<$TypeName> {
                Ok(Self {
                    v: $crate::TryAdd::try_add(self.v, rhs.v)?,
                })
            }
        }

        impl $crate::TrySub for $TypeName {
            type Output = $TypeName;

            fn try_sub(self, rhs: $TypeName) -> $crate::Result<$TypeName> {
                Ok(Self {
                    v: $crate::TrySub::try_sub(self.v, rhs.v)?,
                })
            }
        }

        impl $crate::TryMul<i64> for $TypeName {
            type Output = $TypeName;

            fn try_mul(self, rhs: i64) -> $crate::Result<$TypeName> {
                Ok(Self {
                    v: $crate::TryMul::try_mul(self.v, rhs)?,
                })
            }
        }

        impl $crate::TryMul<$TypeName> for i64 {
            type Output = $TypeName;

            fn try_mul(self, rhs: $TypeName) -> $crate::Result<$TypeName> {
                $crate::TryMul::try_mul(rhs, self)
            }
        }

        impl $crate::TryDiv<i64> for $TypeName {
            type Output = $TypeName;

            fn try_div(self, rhs: i64) -> $crate::Result<$TypeName> {
                Ok(Self {
                    v: $crate::TryDiv::try_div(self.v, rhs)?,
                })
            }
        }

        impl std::ops::Neg for $TypeName {
            type Output = $TypeName;

            fn neg(self) -> Self {
                Self { v: -self.v }
            }
        }

        /// Ratio of two like quantities, with IEEE semantics for infinities.
        impl std::ops::Div<$TypeName> for $TypeName {
            type Output = f64;

            fn div(self, rhs: $TypeName) -> f64 {
                self.v.to_f64() / rhs.v.to_f64()
            }
        }

        $crate::supports_fallible_op!(Add, add, TryAdd, try_add, $TypeName, $TypeName);
        $crate::supports_fallible_op!(Sub, sub, TrySub, try_sub, $TypeName, $TypeName);
        $crate::supports_fallible_op!(Mul, mul, TryMul, try_mul, $TypeName, i64);
        $crate::supports_fallible_op!(Mul, mul, TryMul, try_mul, i64, $TypeName);
        $crate::supports_fallible_op!(Div, div, TryDiv, try_div, $TypeName, i64);
        $crate::supports_fallible_assign_op!(AddAssign, add_assign, TryAdd, try_add, $TypeName, $TypeName);
        $crate::supports_fallible_assign_op!(SubAssign, sub_assign, TrySub, try_sub, $TypeName, $TypeName);
        $crate::supports_fallible_assign_op!(MulAssign, mul_assign, TryMul, try_mul, $TypeName, i64);
        $crate::supports_fallible_assign_op!(DivAssign, div_assign, TryDiv, try_div, $TypeName, i64);
    };
}

/// Construction from, and rendering in, any unit with an exact integer scale.
#[macro_export]
macro_rules! supports_unit_conversion {
    ($TypeName:ident, $Unit:ty, $display_units:expr) => {
        impl $TypeName {
            pub fn from_unit(value: i64, unit: $Unit) -> Self {
                Self {
                    v: $crate::SaturatingInteger::new(value) * $crate::LinearUnit::scale(unit),
                }
            }

            pub fn to_f64(self, unit: $Unit) -> f64 {
                self / Self::from_unit(1, unit)
            }

            pub fn to_string_in(self, unit: $Unit) -> String {
                $crate::unit::format_quantity(self.v, self.to_f64(unit), unit)
            }
        }

        impl std::fmt::Display for $TypeName {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                let unit = $crate::unit::largest_unit(self.v, &$display_units);
                write!(f, "{}", self.to_string_in(unit))
            }
        }
    };
}

#[macro_export]
macro_rules! supports_absdiffeq {
    ($TypeName:ty) => {
        impl $crate::approx::AbsDiffEq for $TypeName {
            type Epsilon = i64;

            fn default_epsilon() -> Self::Epsilon {
                0
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                $crate::approx::AbsDiffEq::abs_diff_eq(&self.raw(), &other.raw(), epsilon)
            }
        }
    };
}
