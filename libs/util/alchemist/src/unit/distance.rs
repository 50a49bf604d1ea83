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

linear_unit_enum!(DistanceUnit {
    Nanometer => ("nanometers", "nm", 1),
    Micrometer => ("micrometers", "μm", 1_000),
    Millimeter => ("millimeters", "mm", 1_000_000),
    Centimeter => ("centimeters", "cm", 10_000_000),
    Meter => ("meters", "m", 1_000_000_000),
    Kilometer => ("kilometers", "km", 1_000_000_000_000),
    Megameter => ("megameters", "Mm", 1_000_000_000_000_000),
    Gigameter => ("gigameters", "Gm", 1_000_000_000_000_000_000),
    Inch => ("inches", "in", 25_400_000),
    Foot => ("feet", "ft", 304_800_000),
    Yard => ("yards", "yd", 914_400_000),
    Mile => ("miles", "mi", 1_609_344_000_000),
});

impl DistanceUnit {
    /// SI units, finest first.
    pub const INTERNATIONAL: [DistanceUnit; 8] = [
        DistanceUnit::Nanometer,
        DistanceUnit::Micrometer,
        DistanceUnit::Millimeter,
        DistanceUnit::Centimeter,
        DistanceUnit::Meter,
        DistanceUnit::Kilometer,
        DistanceUnit::Megameter,
        DistanceUnit::Gigameter,
    ];

    pub const UNITED_STATES_CUSTOMARY: [DistanceUnit; 4] = [
        DistanceUnit::Inch,
        DistanceUnit::Foot,
        DistanceUnit::Yard,
        DistanceUnit::Mile,
    ];
}

#[macro_export]
macro_rules! nanometers {
    ($num:expr) => {
        $crate::Distance::from_unit($num, $crate::DistanceUnit::Nanometer)
    };
}

#[macro_export]
macro_rules! micrometers {
    ($num:expr) => {
        $crate::Distance::from_unit($num, $crate::DistanceUnit::Micrometer)
    };
}

#[macro_export]
macro_rules! millimeters {
    ($num:expr) => {
        $crate::Distance::from_unit($num, $crate::DistanceUnit::Millimeter)
    };
}

#[macro_export]
macro_rules! centimeters {
    ($num:expr) => {
        $crate::Distance::from_unit($num, $crate::DistanceUnit::Centimeter)
    };
}

#[macro_export]
macro_rules! meters {
    ($num:expr) => {
        $crate::Distance::from_unit($num, $crate::DistanceUnit::Meter)
    };
}

#[macro_export]
macro_rules! kilometers {
    ($num:expr) => {
        $crate::Distance::from_unit($num, $crate::DistanceUnit::Kilometer)
    };
}

#[macro_export]
macro_rules! megameters {
    ($num:expr) => {
        $crate::Distance::from_unit($num, $crate::DistanceUnit::Megameter)
    };
}

#[macro_export]
macro_rules! gigameters {
    ($num:expr) => {
        $crate::Distance::from_unit($num, $crate::DistanceUnit::Gigameter)
    };
}

#[macro_export]
macro_rules! inches {
    ($num:expr) => {
        $crate::Distance::from_unit($num, $crate::DistanceUnit::Inch)
    };
}

#[macro_export]
macro_rules! feet {
    ($num:expr) => {
        $crate::Distance::from_unit($num, $crate::DistanceUnit::Foot)
    };
}

#[macro_export]
macro_rules! yards {
    ($num:expr) => {
        $crate::Distance::from_unit($num, $crate::DistanceUnit::Yard)
    };
}

#[macro_export]
macro_rules! miles {
    ($num:expr) => {
        $crate::Distance::from_unit($num, $crate::DistanceUnit::Mile)
    };
}
