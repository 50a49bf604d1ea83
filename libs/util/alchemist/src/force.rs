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
    supports_unit_conversion, Acceleration, Distance, Energy, ForceUnit, Mass, Result,
    SaturatingInteger, TryDiv, TryMul,
};

/// Stored in micronewtons: ±9.2 teranewtons.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Force {
    v: SaturatingInteger, // in micronewtons
}

supports_quantity_ops!(Force);
supports_unit_conversion!(Force, ForceUnit, ForceUnit::INTERNATIONAL);
supports_absdiffeq!(Force);

impl TryDiv<Mass> for Force {
    type Output = Acceleration;

    fn try_div(self, rhs: Mass) -> Result<Acceleration> {
        // uN / ug = 1e12 nm/s^2
        Ok(Acceleration::from_raw(derived::quotient(
            self.raw(),
            rhs.raw(),
            4,
        )?))
    }
}

impl TryMul<Distance> for Force {
    type Output = Energy;

    fn try_mul(self, rhs: Distance) -> Result<Energy> {
        // uN * nm = 1e-12 mJ
        Ok(Energy::from_raw(derived::product(self.raw(), rhs.raw(), 4)?))
    }
}

supports_fallible_op!(Div, div, TryDiv, try_div, Force, Mass);
supports_fallible_op!(Mul, mul, TryMul, try_mul, Force, Distance);

#[cfg(test)]
mod test {
    use crate::{
        joules, kilograms, kilonewtons, meters, meters_per_second2, newtons, standard_gravities,
        tonnes, Acceleration, Force, ForceUnit, Mass, TryDiv, UndefinedResult,
    };

    #[test]
    fn test_newtons_second_law() {
        assert_eq!(kilograms!(2) * meters_per_second2!(3), newtons!(6));
        assert_eq!(meters_per_second2!(3) * kilograms!(2), newtons!(6));
        assert_eq!(newtons!(6) / kilograms!(2), meters_per_second2!(3));
        assert_eq!(
            kilograms!(1) * standard_gravities!(1),
            Force::from_unit(9_806_650, ForceUnit::Micronewton)
        );
        assert_eq!(
            tonnes!(1_000) * standard_gravities!(1),
            kilonewtons!(9_806) + newtons!(650)
        );
    }

    #[test]
    fn test_work() {
        assert_eq!(newtons!(2) * meters!(3), joules!(6));
        assert_eq!(meters!(3) * newtons!(2), joules!(6));
    }

    #[test]
    fn test_undefined() {
        assert_eq!(
            Force::POSITIVE_INFINITY.try_div(Mass::POSITIVE_INFINITY),
            Err(UndefinedResult::InfiniteQuotient)
        );
        assert_eq!(
            newtons!(-1) / Mass::ZERO,
            Acceleration::NEGATIVE_INFINITY
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(kilonewtons!(1_200).to_string(), "1.2MN");
        assert_eq!(newtons!(1).to_string_in(ForceUnit::Millinewton), "1000.0mN");
    }
}
