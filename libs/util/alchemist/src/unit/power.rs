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

linear_unit_enum!(PowerUnit {
    Microwatt => ("microwatts", "μW", 1),
    Milliwatt => ("milliwatts", "mW", 1_000),
    Watt => ("watts", "W", 1_000_000),
    Kilowatt => ("kilowatts", "kW", 1_000_000_000),
    Megawatt => ("megawatts", "MW", 1_000_000_000_000),
    Gigawatt => ("gigawatts", "GW", 1_000_000_000_000_000),
    Terawatt => ("terawatts", "TW", 1_000_000_000_000_000_000),
});

impl PowerUnit {
    /// SI units, finest first.
    pub const INTERNATIONAL: [PowerUnit; 7] = [
        PowerUnit::Microwatt,
        PowerUnit::Milliwatt,
        PowerUnit::Watt,
        PowerUnit::Kilowatt,
        PowerUnit::Megawatt,
        PowerUnit::Gigawatt,
        PowerUnit::Terawatt,
    ];
}

#[macro_export]
macro_rules! microwatts {
    ($num:expr) => {
        $crate::Power::from_unit($num, $crate::PowerUnit::Microwatt)
    };
}

#[macro_export]
macro_rules! milliwatts {
    ($num:expr) => {
        $crate::Power::from_unit($num, $crate::PowerUnit::Milliwatt)
    };
}

#[macro_export]
macro_rules! watts {
    ($num:expr) => {
        $crate::Power::from_unit($num, $crate::PowerUnit::Watt)
    };
}

#[macro_export]
macro_rules! kilowatts {
    ($num:expr) => {
        $crate::Power::from_unit($num, $crate::PowerUnit::Kilowatt)
    };
}

#[macro_export]
macro_rules! megawatts {
    ($num:expr) => {
        $crate::Power::from_unit($num, $crate::PowerUnit::Megawatt)
    };
}

#[macro_export]
macro_rules! gigawatts {
    ($num:expr) => {
        $crate::Power::from_unit($num, $crate::PowerUnit::Gigawatt)
    };
}

#[macro_export]
macro_rules! terawatts {
    ($num:expr) => {
        $crate::Power::from_unit($num, $crate::PowerUnit::Terawatt)
    };
}
