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
    supports_unit_conversion, AccelerationUnit, Duration, Force, Mass, Result, SaturatingInteger,
    TryMul, Velocity,
};

/// Stored in nanometers per second squared.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Acceleration {
    v: SaturatingInteger, // in nanometers per second squared
}

supports_quantity_ops!(Acceleration);
supports_unit_conversion!(Acceleration, AccelerationUnit, AccelerationUnit::INTERNATIONAL);
supports_absdiffeq!(Acceleration);

impl TryMul<Duration> for Acceleration {
    type Output = Velocity;

    fn try_mul(self, rhs: Duration) -> Result<Velocity> {
        // nm/s^2 * ns = 1e-9 nm/s
        Ok(Velocity::from_raw(derived::product_with_duration(
            self.raw(),
            rhs,
            3,
        )))
    }
}

impl TryMul<Mass> for Acceleration {
    type Output = Force;

    fn try_mul(self, rhs: Mass) -> Result<Force> {
        rhs.try_mul(self)
    }
}

supports_fallible_op!(Mul, mul, TryMul, try_mul, Acceleration, Duration);
supports_fallible_op!(Mul, mul, TryMul, try_mul, Acceleration, Mass);

#[cfg(test)]
mod test {
    use crate::{
        feet_per_second2, meters_per_second, meters_per_second2, milliseconds, seconds,
        standard_gravities, Acceleration, AccelerationUnit, Velocity, VelocityUnit,
    };
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_acceleration_over_time() {
        assert_eq!(meters_per_second2!(5) * seconds!(2), meters_per_second!(10));
        assert_eq!(
            standard_gravities!(1) * milliseconds!(1_000),
            Velocity::from_unit(9_806_650_000, VelocityUnit::NanometerPerSecond)
        );
        assert_eq!(
            Acceleration::NEGATIVE_INFINITY * seconds!(-1),
            Velocity::POSITIVE_INFINITY
        );
    }

    #[test]
    fn test_units() {
        assert_abs_diff_eq!(
            standard_gravities!(1).to_f64(AccelerationUnit::FootPerSecondSquared),
            32.17404855643045,
            epsilon = 1e-12
        );
        assert_eq!(feet_per_second2!(10).to_string(), "3.048m/s²");
        assert_eq!(
            standard_gravities!(1).to_string_in(AccelerationUnit::StandardGravity),
            "1.0g"
        );
    }
}
