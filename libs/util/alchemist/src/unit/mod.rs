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
use crate::SaturatingInteger;
use std::fmt::Debug;

macro_rules! linear_unit_enum {
    ($Unit:ident { $($Variant:ident => ($name:literal, $symbol:literal, $scale:expr)),* $(,)? }) => {
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        pub enum $Unit {
            $($Variant),*
        }

        impl $crate::Unit for $Unit {
            fn unit_name(self) -> &'static str {
                match self {
                    $(Self::$Variant => $name),*
                }
            }

            fn symbol(self) -> &'static str {
                match self {
                    $(Self::$Variant => $symbol),*
                }
            }
        }

        impl $crate::LinearUnit for $Unit {
            fn scale(self) -> i64 {
                match self {
                    $(Self::$Variant => $scale),*
                }
            }
        }
    };
}

pub(crate) mod acceleration;
pub(crate) mod area;
pub(crate) mod distance;
pub(crate) mod energy;
pub(crate) mod force;
pub(crate) mod mass;
pub(crate) mod power;
pub(crate) mod temperature;
pub(crate) mod time;
pub(crate) mod velocity;
pub(crate) mod volume;

pub trait Unit: Copy + Debug + Eq + PartialEq + 'static {
    fn unit_name(self) -> &'static str;
    fn symbol(self) -> &'static str;
}

/// A unit that is an exact whole multiple of its quantity's base unit.
pub trait LinearUnit: Unit {
    /// Base units in one of this unit.
    fn scale(self) -> i64;
}

/// The coarsest unit in which `v` has a magnitude of at least one. `units`
/// must be ordered finest first.
pub(crate) fn largest_unit<U: LinearUnit>(v: SaturatingInteger, units: &[U]) -> U {
    let magnitude = v.abs();
    units
        .iter()
        .rev()
        .copied()
        .find(|unit| magnitude >= SaturatingInteger::new(unit.scale()))
        .unwrap_or(units[0])
}

pub(crate) fn format_quantity<U: Unit>(v: SaturatingInteger, value: f64, unit: U) -> String {
    if v.is_infinite() {
        v.to_string()
    } else {
        // Debug keeps the shortest round-trip digits and always a decimal point.
        format!("{:?}{}", value, unit.symbol())
    }
}

/// Split `v` into whole counts of each scale, coarsest first, returning the
/// counts and whatever is left below the last scale. Infinite input yields
/// the infinity in every slot.
pub(crate) fn decompose<const N: usize>(
    v: SaturatingInteger,
    scales: [i64; N],
) -> ([i64; N], SaturatingInteger) {
    let mut remainder = v;
    let mut counts = [0; N];
    for (count, scale) in counts.iter_mut().zip(scales) {
        *count = (remainder / scale).into_inner();
        remainder = remainder % scale;
    }
    (counts, remainder)
}

#[cfg(test)]
mod test {
    use super::{decompose, largest_unit};
    use crate::{DistanceUnit, SaturatingInteger};

    #[test]
    fn test_largest_unit_falls_back_to_finest() {
        let units = DistanceUnit::INTERNATIONAL;
        assert_eq!(
            largest_unit(SaturatingInteger::ZERO, &units),
            DistanceUnit::Nanometer
        );
        assert_eq!(
            largest_unit(SaturatingInteger::new(-1_000_000_000), &units),
            DistanceUnit::Meter
        );
        assert_eq!(
            largest_unit(SaturatingInteger::new(999_999_999), &units),
            DistanceUnit::Millimeter
        );
    }

    #[test]
    fn test_decompose() {
        let (counts, rest) = decompose(SaturatingInteger::new(-3_723), [1_000, 100, 10]);
        assert_eq!(counts, [-3, -7, -2]);
        assert_eq!(rest, SaturatingInteger::new(-3));

        let (counts, rest) = decompose(SaturatingInteger::POSITIVE_INFINITY, [1_000, 1]);
        assert_eq!(counts, [i64::MAX, i64::MAX]);
        assert!(rest.is_infinite());
    }
}
