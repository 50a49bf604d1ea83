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
    supports_absdiffeq, supports_quantity_ops, unit, SaturatingInteger, TemperatureUnit, Unit,
};
use std::fmt;

/// An absolute temperature, stored in nanokelvin.
///
/// Sums, differences and scaling operate on the absolute (kelvin) value, so
/// they only have physical meaning in origin-based scales like kelvin and
/// rankine.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Temperature {
    v: SaturatingInteger, // in nanokelvin
}

supports_quantity_ops!(Temperature);
supports_absdiffeq!(Temperature);

impl Temperature {
    pub fn from_unit(value: i64, unit: TemperatureUnit) -> Self {
        Self {
            v: unit.convert_to_nanokelvin(SaturatingInteger::new(value)),
        }
    }

    pub fn to_f64(self, unit: TemperatureUnit) -> f64 {
        unit.convert_from_nanokelvin(self.v)
    }

    /// Infinite temperatures keep the unit symbol, e.g. "-Infinity°C".
    pub fn to_string_in(self, unit: TemperatureUnit) -> String {
        if self.v.is_infinite() {
            return format!("{}{}", self.v, unit.symbol());
        }
        unit::format_quantity(self.v, self.to_f64(unit), unit)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let magnitude = self.abs();
        let unit = TemperatureUnit::KELVIN
            .iter()
            .rev()
            .copied()
            .find(|&unit| magnitude.to_f64(unit) >= 1.0)
            .unwrap_or(TemperatureUnit::Nanokelvin);
        write!(f, "{}", self.to_string_in(unit))
    }
}
