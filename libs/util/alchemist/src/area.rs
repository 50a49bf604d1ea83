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
    supports_unit_conversion, AreaUnit, Distance, Result, SaturatingInteger, TryDiv, TryMul,
    Volume,
};

/// Stored in square millimeters: ±9.2 million square kilometers.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Area {
    v: SaturatingInteger, // in square millimeters
}

supports_quantity_ops!(Area);
supports_unit_conversion!(Area, AreaUnit, AreaUnit::INTERNATIONAL);
supports_absdiffeq!(Area);

impl TryMul<Distance> for Area {
    type Output = Volume;

    fn try_mul(self, rhs: Distance) -> Result<Volume> {
        // mm^2 * nm = 1e-6 mm^3
        Ok(Volume::from_raw(derived::product(self.raw(), rhs.raw(), 2)?))
    }
}

impl TryDiv<Distance> for Area {
    type Output = Distance;

    fn try_div(self, rhs: Distance) -> Result<Distance> {
        // mm^2 / nm = 1e12 nm
        Ok(Distance::from_raw(derived::quotient(self.raw(), rhs.raw(), 4)?))
    }
}

supports_fallible_op!(Mul, mul, TryMul, try_mul, Area, Distance);
supports_fallible_op!(Div, div, TryDiv, try_div, Area, Distance);
