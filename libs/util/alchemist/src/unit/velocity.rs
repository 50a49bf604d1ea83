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

linear_unit_enum!(VelocityUnit {
    NanometerPerSecond => ("nanometers per second", "nm/s", 1),
    MicrometerPerSecond => ("micrometers per second", "μm/s", 1_000),
    MillimeterPerSecond => ("millimeters per second", "mm/s", 1_000_000),
    MeterPerSecond => ("meters per second", "m/s", 1_000_000_000),
    KilometerPerSecond => ("kilometers per second", "km/s", 1_000_000_000_000),
    FootPerSecond => ("feet per second", "ft/s", 304_800_000),
    MilePerHour => ("miles per hour", "mph", 447_040_000),
});

impl VelocityUnit {
    /// SI units, finest first.
    pub const INTERNATIONAL: [VelocityUnit; 5] = [
        VelocityUnit::NanometerPerSecond,
        VelocityUnit::MicrometerPerSecond,
        VelocityUnit::MillimeterPerSecond,
        VelocityUnit::MeterPerSecond,
        VelocityUnit::KilometerPerSecond,
    ];
}

#[macro_export]
macro_rules! nanometers_per_second {
    ($num:expr) => {
        $crate::Velocity::from_unit($num, $crate::VelocityUnit::NanometerPerSecond)
    };
}

#[macro_export]
macro_rules! micrometers_per_second {
    ($num:expr) => {
        $crate::Velocity::from_unit($num, $crate::VelocityUnit::MicrometerPerSecond)
    };
}

#[macro_export]
macro_rules! millimeters_per_second {
    ($num:expr) => {
        $crate::Velocity::from_unit($num, $crate::VelocityUnit::MillimeterPerSecond)
    };
}

#[macro_export]
macro_rules! meters_per_second {
    ($num:expr) => {
        $crate::Velocity::from_unit($num, $crate::VelocityUnit::MeterPerSecond)
    };
}

#[macro_export]
macro_rules! kilometers_per_second {
    ($num:expr) => {
        $crate::Velocity::from_unit($num, $crate::VelocityUnit::KilometerPerSecond)
    };
}

#[macro_export]
macro_rules! feet_per_second {
    ($num:expr) => {
        $crate::Velocity::from_unit($num, $crate::VelocityUnit::FootPerSecond)
    };
}

#[macro_export]
macro_rules! miles_per_hour {
    ($num:expr) => {
        $crate::Velocity::from_unit($num, $crate::VelocityUnit::MilePerHour)
    };
}
