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
    supports_unit_conversion, Area, Distance, Result, SaturatingInteger, TryDiv, VolumeUnit,
};

/// Stored in cubic millimeters: ±9.2 cubic kilometers.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Volume {
    v: SaturatingInteger, // in cubic millimeters
}

supports_quantity_ops!(Volume);
supports_unit_conversion!(Volume, VolumeUnit, VolumeUnit::INTERNATIONAL);
supports_absdiffeq!(Volume);

impl TryDiv<Distance> for Volume {
    type Output = Area;

    fn try_div(self, rhs: Distance) -> Result<Area> {
        // mm^3 / nm = 1e6 mm^2
        Ok(Area::from_raw(derived::quotient(self.raw(), rhs.raw(), 2)?))
    }
}

impl TryDiv<Area> for Volume {
    type Output = Distance;

    fn try_div(self, rhs: Area) -> Result<Distance> {
        // mm^3 / mm^2 = 1e6 nm
        Ok(Distance::from_raw(derived::quotient(self.raw(), rhs.raw(), 2)?))
    }
}

supports_fallible_op!(Div, div, TryDiv, try_div, Volume, Distance);
supports_fallible_op!(Div, div, TryDiv, try_div, Volume, Area);
