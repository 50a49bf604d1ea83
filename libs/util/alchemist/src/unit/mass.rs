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

linear_unit_enum!(MassUnit {
    Microgram => ("micrograms", "μg", 1),
    Milligram => ("milligrams", "mg", 1_000),
    Gram => ("grams", "g", 1_000_000),
    Kilogram => ("kilograms", "kg", 1_000_000_000),
    Tonne => ("tonnes", "t", 1_000_000_000_000),
    Pound => ("pounds", "lb", 453_592_370),
    ShortTon => ("short tons", "tn", 907_184_740_000),
});

impl MassUnit {
    /// SI units, finest first.
    pub const INTERNATIONAL: [MassUnit; 5] = [
        MassUnit::Microgram,
        MassUnit::Milligram,
        MassUnit::Gram,
        MassUnit::Kilogram,
        MassUnit::Tonne,
    ];

    pub const UNITED_STATES_CUSTOMARY: [MassUnit; 2] = [
        MassUnit::Pound,
        MassUnit::ShortTon,
    ];
}

#[macro_export]
macro_rules! micrograms {
    ($num:expr) => {
        $crate::Mass::from_unit($num, $crate::MassUnit::Microgram)
    };
}

#[macro_export]
macro_rules! milligrams {
    ($num:expr) => {
        $crate::Mass::from_unit($num, $crate::MassUnit::Milligram)
    };
}

#[macro_export]
macro_rules! grams {
    ($num:expr) => {
        $crate::Mass::from_unit($num, $crate::MassUnit::Gram)
    };
}

#[macro_export]
macro_rules! kilograms {
    ($num:expr) => {
        $crate::Mass::from_unit($num, $crate::MassUnit::Kilogram)
    };
}

#[macro_export]
macro_rules! tonnes {
    ($num:expr) => {
        $crate::Mass::from_unit($num, $crate::MassUnit::Tonne)
    };
}

#[macro_export]
macro_rules! pounds {
    ($num:expr) => {
        $crate::Mass::from_unit($num, $crate::MassUnit::Pound)
    };
}

#[macro_export]
macro_rules! short_tons {
    ($num:expr) => {
        $crate::Mass::from_unit($num, $crate::MassUnit::ShortTon)
    };
}
