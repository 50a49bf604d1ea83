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

linear_unit_enum!(VolumeUnit {
    CubicMillimeter => ("cubic millimeters", "mm³", 1),
    Milliliter => ("milliliters", "mL", 1_000),
    Liter => ("liters", "L", 1_000_000),
    CubicMeter => ("cubic meters", "m³", 1_000_000_000),
});

impl VolumeUnit {
    /// SI units, finest first.
    pub const INTERNATIONAL: [VolumeUnit; 4] = [
        VolumeUnit::CubicMillimeter,
        VolumeUnit::Milliliter,
        VolumeUnit::Liter,
        VolumeUnit::CubicMeter,
    ];
}

#[macro_export]
macro_rules! cubic_millimeters {
    ($num:expr) => {
        $crate::Volume::from_unit($num, $crate::VolumeUnit::CubicMillimeter)
    };
}

#[macro_export]
macro_rules! milliliters {
    ($num:expr) => {
        $crate::Volume::from_unit($num, $crate::VolumeUnit::Milliliter)
    };
}

#[macro_export]
macro_rules! liters {
    ($num:expr) => {
        $crate::Volume::from_unit($num, $crate::VolumeUnit::Liter)
    };
}

#[macro_export]
macro_rules! cubic_meters {
    ($num:expr) => {
        $crate::Volume::from_unit($num, $crate::VolumeUnit::CubicMeter)
    };
}
