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

linear_unit_enum!(AreaUnit {
    SquareMillimeter => ("square millimeters", "mm²", 1),
    SquareCentimeter => ("square centimeters", "cm²", 100),
    SquareMeter => ("square meters", "m²", 1_000_000),
    Hectare => ("hectares", "ha", 10_000_000_000),
    SquareKilometer => ("square kilometers", "km²", 1_000_000_000_000),
});

impl AreaUnit {
    /// SI units, finest first.
    pub const INTERNATIONAL: [AreaUnit; 5] = [
        AreaUnit::SquareMillimeter,
        AreaUnit::SquareCentimeter,
        AreaUnit::SquareMeter,
        AreaUnit::Hectare,
        AreaUnit::SquareKilometer,
    ];
}

#[macro_export]
macro_rules! square_millimeters {
    ($num:expr) => {
        $crate::Area::from_unit($num, $crate::AreaUnit::SquareMillimeter)
    };
}

#[macro_export]
macro_rules! square_centimeters {
    ($num:expr) => {
        $crate::Area::from_unit($num, $crate::AreaUnit::SquareCentimeter)
    };
}

#[macro_export]
macro_rules! square_meters {
    ($num:expr) => {
        $crate::Area::from_unit($num, $crate::AreaUnit::SquareMeter)
    };
}

#[macro_export]
macro_rules! hectares {
    ($num:expr) => {
        $crate::Area::from_unit($num, $crate::AreaUnit::Hectare)
    };
}

#[macro_export]
macro_rules! square_kilometers {
    ($num:expr) => {
        $crate::Area::from_unit($num, $crate::AreaUnit::SquareKilometer)
    };
}
