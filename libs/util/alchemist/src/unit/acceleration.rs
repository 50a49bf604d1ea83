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

linear_unit_enum!(AccelerationUnit {
    NanometerPerSecondSquared => ("nanometers per second squared", "nm/s²", 1),
    MicrometerPerSecondSquared => ("micrometers per second squared", "μm/s²", 1_000),
    MillimeterPerSecondSquared => ("millimeters per second squared", "mm/s²", 1_000_000),
    MeterPerSecondSquared => ("meters per second squared", "m/s²", 1_000_000_000),
    KilometerPerSecondSquared => ("kilometers per second squared", "km/s²", 1_000_000_000_000),
    FootPerSecondSquared => ("feet per second squared", "ft/s²", 304_800_000),
    StandardGravity => ("standard gravities", "g", 9_806_650_000),
});

impl AccelerationUnit {
    /// SI units, finest first.
    pub const INTERNATIONAL: [AccelerationUnit; 5] = [
        AccelerationUnit::NanometerPerSecondSquared,
        AccelerationUnit::MicrometerPerSecondSquared,
        AccelerationUnit::MillimeterPerSecondSquared,
        AccelerationUnit::MeterPerSecondSquared,
        AccelerationUnit::KilometerPerSecondSquared,
    ];
}

#[macro_export]
macro_rules! nanometers_per_second2 {
    ($num:expr) => {
        $crate::Acceleration::from_unit($num, $crate::AccelerationUnit::NanometerPerSecondSquared)
    };
}

#[macro_export]
macro_rules! micrometers_per_second2 {
    ($num:expr) => {
        $crate::Acceleration::from_unit($num, $crate::AccelerationUnit::MicrometerPerSecondSquared)
    };
}

#[macro_export]
macro_rules! millimeters_per_second2 {
    ($num:expr) => {
        $crate::Acceleration::from_unit($num, $crate::AccelerationUnit::MillimeterPerSecondSquared)
    };
}

#[macro_export]
macro_rules! meters_per_second2 {
    ($num:expr) => {
        $crate::Acceleration::from_unit($num, $crate::AccelerationUnit::MeterPerSecondSquared)
    };
}

#[macro_export]
macro_rules! kilometers_per_second2 {
    ($num:expr) => {
        $crate::Acceleration::from_unit($num, $crate::AccelerationUnit::KilometerPerSecondSquared)
    };
}

#[macro_export]
macro_rules! feet_per_second2 {
    ($num:expr) => {
        $crate::Acceleration::from_unit($num, $crate::AccelerationUnit::FootPerSecondSquared)
    };
}

#[macro_export]
macro_rules! standard_gravities {
    ($num:expr) => {
        $crate::Acceleration::from_unit($num, $crate::AccelerationUnit::StandardGravity)
    };
}
