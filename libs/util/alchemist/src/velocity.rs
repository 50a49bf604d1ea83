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
    derived, supports_absdiffeq, supports_fallible_op, supports_quantity_ops,
    supports_unit_conversion, Acceleration, Distance, Duration, Result, SaturatingInteger, TryDiv,
    TryMul, VelocityUnit,
};

/// Stored in nanometers per second: ±9.2 million kilometers per second.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Velocity {
    v: SaturatingInteger, // in nanometers per second
}

supports_quantity_ops!(Velocity);
supports_unit_conversion!(Velocity, VelocityUnit, VelocityUnit::INTERNATIONAL);
supports_absdiffeq!(Velocity);

impl TryMul<Duration> for Velocity {
    type Output = Distance;

    fn try_mul(self, rhs: Duration) -> Result<Distance> {
        // nm/s * ns = 1e-9 nm
        Ok(Distance::from_raw(derived::product_with_duration(
            self.raw(),
            rhs,
            3,
        )))
    }
}

impl TryDiv<Duration> for Velocity {
    type Output = Acceleration;

    fn try_div(self, rhs: Duration) -> Result<Acceleration> {
        // (nm/s) / ns = 1e9 nm/s^2
        Ok(Acceleration::from_raw(derived::quotient_by_duration(
            self.raw(),
            rhs,
            3,
        )?))
    }
}

supports_fallible_op!(Mul, mul, TryMul, try_mul, Velocity, Duration);
supports_fallible_op!(Div, div, TryDiv, try_div, Velocity, Duration);
