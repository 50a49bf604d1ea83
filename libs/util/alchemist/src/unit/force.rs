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

linear_unit_enum!(ForceUnit {
    Micronewton => ("micronewtons", "μN", 1),
    Millinewton => ("millinewtons", "mN", 1_000),
    Newton => ("newtons", "N", 1_000_000),
    Kilonewton => ("kilonewtons", "kN", 1_000_000_000),
    Meganewton => ("meganewtons", "MN", 1_000_000_000_000),
});

impl ForceUnit {
    /// SI units, finest first.
    pub const INTERNATIONAL: [ForceUnit; 5] = [
        ForceUnit::Micronewton,
        ForceUnit::Millinewton,
        ForceUnit::Newton,
        ForceUnit::Kilonewton,
        ForceUnit::Meganewton,
    ];
}

#[macro_export]
macro_rules! micronewtons {
    ($num:expr) => {
        $crate::Force::from_unit($num, $crate::ForceUnit::Micronewton)
    };
}

#[macro_export]
macro_rules! millinewtons {
    ($num:expr) => {
        $crate::Force::from_unit($num, $crate::ForceUnit::Millinewton)
    };
}

#[macro_export]
macro_rules! newtons {
    ($num:expr) => {
        $crate::Force::from_unit($num, $crate::ForceUnit::Newton)
    };
}

#[macro_export]
macro_rules! kilonewtons {
    ($num:expr) => {
        $crate::Force::from_unit($num, $crate::ForceUnit::Kilonewton)
    };
}

#[macro_export]
macro_rules! meganewtons {
    ($num:expr) => {
        $crate::Force::from_unit($num, $crate::ForceUnit::Meganewton)
    };
}
