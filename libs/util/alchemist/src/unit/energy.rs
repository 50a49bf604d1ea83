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

linear_unit_enum!(EnergyUnit {
    Millijoule => ("millijoules", "mJ", 1),
    Joule => ("joules", "J", 1_000),
    Kilojoule => ("kilojoules", "kJ", 1_000_000),
    Megajoule => ("megajoules", "MJ", 1_000_000_000),
    Gigajoule => ("gigajoules", "GJ", 1_000_000_000_000),
    Terajoule => ("terajoules", "TJ", 1_000_000_000_000_000),
    Petajoule => ("petajoules", "PJ", 1_000_000_000_000_000_000),
    MilliwattHour => ("milliwatt-hours", "mWh", 3_600),
    WattHour => ("watt-hours", "Wh", 3_600_000),
    KilowattHour => ("kilowatt-hours", "kWh", 3_600_000_000),
    MegawattHour => ("megawatt-hours", "MWh", 3_600_000_000_000),
    GigawattHour => ("gigawatt-hours", "GWh", 3_600_000_000_000_000),
    TerawattHour => ("terawatt-hours", "TWh", 3_600_000_000_000_000_000),
});

impl EnergyUnit {
    /// SI units, finest first.
    pub const INTERNATIONAL: [EnergyUnit; 7] = [
        EnergyUnit::Millijoule,
        EnergyUnit::Joule,
        EnergyUnit::Kilojoule,
        EnergyUnit::Megajoule,
        EnergyUnit::Gigajoule,
        EnergyUnit::Terajoule,
        EnergyUnit::Petajoule,
    ];

    /// Metered electricity units, finest first.
    pub const ELECTRICITY: [EnergyUnit; 6] = [
        EnergyUnit::MilliwattHour,
        EnergyUnit::WattHour,
        EnergyUnit::KilowattHour,
        EnergyUnit::MegawattHour,
        EnergyUnit::GigawattHour,
        EnergyUnit::TerawattHour,
    ];
}

#[macro_export]
macro_rules! millijoules {
    ($num:expr) => {
        $crate::Energy::from_unit($num, $crate::EnergyUnit::Millijoule)
    };
}

#[macro_export]
macro_rules! joules {
    ($num:expr) => {
        $crate::Energy::from_unit($num, $crate::EnergyUnit::Joule)
    };
}

#[macro_export]
macro_rules! kilojoules {
    ($num:expr) => {
        $crate::Energy::from_unit($num, $crate::EnergyUnit::Kilojoule)
    };
}

#[macro_export]
macro_rules! megajoules {
    ($num:expr) => {
        $crate::Energy::from_unit($num, $crate::EnergyUnit::Megajoule)
    };
}

#[macro_export]
macro_rules! gigajoules {
    ($num:expr) => {
        $crate::Energy::from_unit($num, $crate::EnergyUnit::Gigajoule)
    };
}

#[macro_export]
macro_rules! terajoules {
    ($num:expr) => {
        $crate::Energy::from_unit($num, $crate::EnergyUnit::Terajoule)
    };
}

#[macro_export]
macro_rules! petajoules {
    ($num:expr) => {
        $crate::Energy::from_unit($num, $crate::EnergyUnit::Petajoule)
    };
}

#[macro_export]
macro_rules! milliwatt_hours {
    ($num:expr) => {
        $crate::Energy::from_unit($num, $crate::EnergyUnit::MilliwattHour)
    };
}

#[macro_export]
macro_rules! watt_hours {
    ($num:expr) => {
        $crate::Energy::from_unit($num, $crate::EnergyUnit::WattHour)
    };
}

#[macro_export]
macro_rules! kilowatt_hours {
    ($num:expr) => {
        $crate::Energy::from_unit($num, $crate::EnergyUnit::KilowattHour)
    };
}

#[macro_export]
macro_rules! megawatt_hours {
    ($num:expr) => {
        $crate::Energy::from_unit($num, $crate::EnergyUnit::MegawattHour)
    };
}

#[macro_export]
macro_rules! gigawatt_hours {
    ($num:expr) => {
        $crate::Energy::from_unit($num, $crate::EnergyUnit::GigawattHour)
    };
}

#[macro_export]
macro_rules! terawatt_hours {
    ($num:expr) => {
        $crate::Energy::from_unit($num, $crate::EnergyUnit::TerawattHour)
    };
}
