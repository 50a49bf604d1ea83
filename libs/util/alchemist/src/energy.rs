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
    supports_unit_conversion, unit, Distance, Duration, EnergyUnit, Force, LinearUnit, Power,
    Result, SaturatingInteger, TryDiv,
};

/// Millijoules in one microwatt-hour, the finest electricity component.
const MILLIJOULES_IN_MICROWATT_HOUR: f64 = 3.6;

/// Stored in millijoules: ±9.2 petajoules, or about 2.5 terawatt-hours.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Energy {
    v: SaturatingInteger, // in millijoules
}

supports_quantity_ops!(Energy);
supports_unit_conversion!(Energy, EnergyUnit, EnergyUnit::INTERNATIONAL);
supports_absdiffeq!(Energy);

impl Energy {
    /// Calls `action` with whole petajoules, terajoules, gigajoules, megajoules,
    /// kilojoules, joules and millijoules.
    pub fn to_international_components<T>(
        self,
        action: impl FnOnce(i64, i64, i64, i64, i64, i64, i64) -> T,
    ) -> T {
        let mut scales = EnergyUnit::INTERNATIONAL.map(LinearUnit::scale);
        scales.reverse();
        let ([pj, tj, gj, mj, kj, j, mil], _) = unit::decompose(self.v, scales);
        action(pj, tj, gj, mj, kj, j, mil)
    }

    /// Calls `action` with whole terawatt-hours down to milliwatt-hours, and
    /// the remainder in microwatt-hours.
    pub fn to_electricity_components<T>(
        self,
        action: impl FnOnce(i64, i64, i64, i64, i64, i64, f64) -> T,
    ) -> T {
        let mut scales = EnergyUnit::ELECTRICITY.map(LinearUnit::scale);
        scales.reverse();
        let ([twh, gwh, mwh, kwh, wh, milli], rest) = unit::decompose(self.v, scales);
        action(
            twh,
            gwh,
            mwh,
            kwh,
            wh,
            milli,
            rest.to_f64() / MILLIJOULES_IN_MICROWATT_HOUR,
        )
    }
}

impl TryDiv<Duration> for Energy {
    type Output = Power;

    fn try_div(self, rhs: Duration) -> Result<Power> {
        // mJ / ns = 1e12 uW
        Ok(Power::from_raw(derived::quotient_by_duration(
            self.raw(),
            rhs,
            4,
        )?))
    }
}

impl TryDiv<Distance> for Energy {
    type Output = Force;

    fn try_div(self, rhs: Distance) -> Result<Force> {
        // mJ / nm = 1e12 uN
        Ok(Force::from_raw(derived::quotient(self.raw(), rhs.raw(), 4)?))
    }
}

supports_fallible_op!(Div, div, TryDiv, try_div, Energy, Duration);
supports_fallible_op!(Div, div, TryDiv, try_div, Energy, Distance);
