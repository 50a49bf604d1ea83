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
    supports_unit_conversion, Acceleration, Force, MassUnit, Result, SaturatingInteger, TryMul,
};

/// Stored in micrograms: ±9.2 million tonnes.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Mass {
    v: SaturatingInteger, // in micrograms
}

supports_quantity_ops!(Mass);
supports_unit_conversion!(Mass, MassUnit, MassUnit::INTERNATIONAL);
supports_absdiffeq!(Mass);

impl TryMul<Acceleration> for Mass {
    type Output = Force;

    fn try_mul(self, rhs: Acceleration) -> Result<Force> {
        // ug * nm/s^2 = 1e-12 uN
        Ok(Force::from_raw(derived::product(self.raw(), rhs.raw(), 4)?))
    }
}

supports_fallible_op!(Mul, mul, TryMul, try_mul, Mass, Acceleration);

#[cfg(test)]
mod test {
    use crate::{grams, kilograms, pounds, short_tons, tonnes, Mass, MassUnit};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_customary_units() {
        assert_abs_diff_eq!(pounds!(1).to_f64(MassUnit::Kilogram), 0.45359237);
        assert_eq!(short_tons!(1), pounds!(2_000));
        assert_eq!(pounds!(1).to_string(), "453.59237g");
    }

    #[test]
    fn test_display() {
        assert_eq!(kilograms!(1_500).to_string(), "1.5t");
        assert_eq!(grams!(-2).to_string(), "-2.0g");
        assert_eq!(tonnes!(1).to_string_in(MassUnit::Kilogram), "1000.0kg");
        assert_eq!(Mass::POSITIVE_INFINITY.to_string(), "Infinity");
    }

    #[test]
    fn test_range() {
        assert!(tonnes!(9_000_000).is_finite());
        assert!(tonnes!(10_000_000).is_infinite());
    }
}
