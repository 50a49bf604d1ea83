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

linear_unit_enum!(TimeUnit {
    Nanosecond => ("nanoseconds", "ns", 1),
    Microsecond => ("microseconds", "μs", 1_000),
    Millisecond => ("milliseconds", "ms", 1_000_000),
    Second => ("seconds", "s", 1_000_000_000),
    Minute => ("minutes", "m", 60_000_000_000),
    Hour => ("hours", "h", 3_600_000_000_000),
    Day => ("days", "d", 86_400_000_000_000),
});

impl TimeUnit {
    /// All units, finest first.
    pub const ALL: [TimeUnit; 7] = [
        TimeUnit::Nanosecond,
        TimeUnit::Microsecond,
        TimeUnit::Millisecond,
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
    ];
}

#[macro_export]
macro_rules! nanoseconds {
    ($num:expr) => {
        $crate::Duration::from_unit($num, $crate::TimeUnit::Nanosecond)
    };
}

#[macro_export]
macro_rules! microseconds {
    ($num:expr) => {
        $crate::Duration::from_unit($num, $crate::TimeUnit::Microsecond)
    };
}

#[macro_export]
macro_rules! milliseconds {
    ($num:expr) => {
        $crate::Duration::from_unit($num, $crate::TimeUnit::Millisecond)
    };
}

#[macro_export]
macro_rules! seconds {
    ($num:expr) => {
        $crate::Duration::from_unit($num, $crate::TimeUnit::Second)
    };
}

#[macro_export]
macro_rules! minutes {
    ($num:expr) => {
        $crate::Duration::from_unit($num, $crate::TimeUnit::Minute)
    };
}

#[macro_export]
macro_rules! hours {
    ($num:expr) => {
        $crate::Duration::from_unit($num, $crate::TimeUnit::Hour)
    };
}

#[macro_export]
macro_rules! days {
    ($num:expr) => {
        $crate::Duration::from_unit($num, $crate::TimeUnit::Day)
    };
}
