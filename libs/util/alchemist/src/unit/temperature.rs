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
use crate::{SaturatingInteger, Unit};

const NANOKELVIN_IN_KELVIN: i64 = 1_000_000_000;
const CELSIUS_OFFSET: i64 = 273_150_000_000;
const FAHRENHEIT_OFFSET: i64 = 459_670_000_000;

// 5/9 of a kelvin and 0 °F, rounded to whole nanokelvin. Used where the exact
// form would overflow.
const NANOKELVIN_IN_FAHRENHEIT_DEGREE: i64 = 555_555_556;
const FAHRENHEIT_ZERO: i64 = 255_372_222_222;

/// Temperature scales. The kelvin-prefixed units are pure multiples of the
/// nanokelvin; the rest are offset and/or skewed and convert by formula.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TemperatureUnit {
    Nanokelvin,
    Microkelvin,
    Millikelvin,
    Kelvin,
    Kilokelvin,
    Megakelvin,
    Gigakelvin,
    Celsius,
    Fahrenheit,
    Rankine,
}

impl Unit for TemperatureUnit {
    fn unit_name(self) -> &'static str {
        match self {
            Self::Nanokelvin => "nanokelvins",
            Self::Microkelvin => "microkelvins",
            Self::Millikelvin => "millikelvins",
            Self::Kelvin => "kelvins",
            Self::Kilokelvin => "kilokelvins",
            Self::Megakelvin => "megakelvins",
            Self::Gigakelvin => "gigakelvins",
            Self::Celsius => "degrees Celsius",
            Self::Fahrenheit => "degrees Fahrenheit",
            Self::Rankine => "degrees Rankine",
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::Nanokelvin => "\u{a0}nK",
            Self::Microkelvin => "\u{a0}μK",
            Self::Millikelvin => "\u{a0}mK",
            Self::Kelvin => "\u{a0}K",
            Self::Kilokelvin => "\u{a0}kK",
            Self::Megakelvin => "\u{a0}MK",
            Self::Gigakelvin => "\u{a0}GK",
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
            Self::Rankine => "°R",
        }
    }
}

impl TemperatureUnit {
    /// Kelvin-prefixed units, finest first.
    pub const KELVIN: [TemperatureUnit; 7] = [
        TemperatureUnit::Nanokelvin,
        TemperatureUnit::Microkelvin,
        TemperatureUnit::Millikelvin,
        TemperatureUnit::Kelvin,
        TemperatureUnit::Kilokelvin,
        TemperatureUnit::Megakelvin,
        TemperatureUnit::Gigakelvin,
    ];

    /// Nanokelvin in one of a kelvin-prefixed unit.
    fn kelvin_scale(self) -> i64 {
        match self {
            Self::Microkelvin => 1_000,
            Self::Millikelvin => 1_000_000,
            Self::Kelvin => 1_000_000_000,
            Self::Kilokelvin => 1_000_000_000_000,
            Self::Megakelvin => 1_000_000_000_000_000,
            Self::Gigakelvin => 1_000_000_000_000_000_000,
            _ => 1,
        }
    }

    pub(crate) fn convert_to_nanokelvin(self, degrees: SaturatingInteger) -> SaturatingInteger {
        match self {
            Self::Celsius => degrees * NANOKELVIN_IN_KELVIN + CELSIUS_OFFSET,
            Self::Fahrenheit => {
                let exact = (degrees * NANOKELVIN_IN_KELVIN + FAHRENHEIT_OFFSET) * 5 / 9;
                if exact.is_finite() {
                    exact
                } else {
                    degrees * NANOKELVIN_IN_FAHRENHEIT_DEGREE + FAHRENHEIT_ZERO
                }
            }
            Self::Rankine => {
                let exact = degrees * NANOKELVIN_IN_KELVIN * 5 / 9;
                if exact.is_finite() {
                    exact
                } else {
                    degrees * NANOKELVIN_IN_FAHRENHEIT_DEGREE
                }
            }
            Self::Nanokelvin
            | Self::Microkelvin
            | Self::Millikelvin
            | Self::Kelvin
            | Self::Kilokelvin
            | Self::Megakelvin
            | Self::Gigakelvin => degrees * self.kelvin_scale(),
        }
    }

    pub(crate) fn convert_from_nanokelvin(self, nanokelvin: SaturatingInteger) -> f64 {
        match self {
            Self::Celsius => {
                (nanokelvin.to_f64() - CELSIUS_OFFSET as f64) / NANOKELVIN_IN_KELVIN as f64
            }
            Self::Fahrenheit => {
                (nanokelvin - FAHRENHEIT_ZERO).to_f64() / NANOKELVIN_IN_FAHRENHEIT_DEGREE as f64
            }
            Self::Rankine => nanokelvin.to_f64() * 9.0 / 5.0 / NANOKELVIN_IN_KELVIN as f64,
            Self::Nanokelvin
            | Self::Microkelvin
            | Self::Millikelvin
            | Self::Kelvin
            | Self::Kilokelvin
            | Self::Megakelvin
            | Self::Gigakelvin => nanokelvin.to_f64() / self.kelvin_scale() as f64,
        }
    }
}

#[macro_export]
macro_rules! nanokelvins {
    ($num:expr) => {
        $crate::Temperature::from_unit($num, $crate::TemperatureUnit::Nanokelvin)
    };
}

#[macro_export]
macro_rules! microkelvins {
    ($num:expr) => {
        $crate::Temperature::from_unit($num, $crate::TemperatureUnit::Microkelvin)
    };
}

#[macro_export]
macro_rules! millikelvins {
    ($num:expr) => {
        $crate::Temperature::from_unit($num, $crate::TemperatureUnit::Millikelvin)
    };
}

#[macro_export]
macro_rules! kelvins {
    ($num:expr) => {
        $crate::Temperature::from_unit($num, $crate::TemperatureUnit::Kelvin)
    };
}

#[macro_export]
macro_rules! kilokelvins {
    ($num:expr) => {
        $crate::Temperature::from_unit($num, $crate::TemperatureUnit::Kilokelvin)
    };
}

#[macro_export]
macro_rules! megakelvins {
    ($num:expr) => {
        $crate::Temperature::from_unit($num, $crate::TemperatureUnit::Megakelvin)
    };
}

#[macro_export]
macro_rules! gigakelvins {
    ($num:expr) => {
        $crate::Temperature::from_unit($num, $crate::TemperatureUnit::Gigakelvin)
    };
}

#[macro_export]
macro_rules! celsius {
    ($num:expr) => {
        $crate::Temperature::from_unit($num, $crate::TemperatureUnit::Celsius)
    };
}

#[macro_export]
macro_rules! fahrenheit {
    ($num:expr) => {
        $crate::Temperature::from_unit($num, $crate::TemperatureUnit::Fahrenheit)
    };
}

#[macro_export]
macro_rules! rankine {
    ($num:expr) => {
        $crate::Temperature::from_unit($num, $crate::TemperatureUnit::Rankine)
    };
}
