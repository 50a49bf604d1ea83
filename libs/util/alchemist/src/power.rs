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
use crate::{
    derived, supports_absdiffeq, supports_fallible_op, supports_quantity_ops,
    supports_unit_conversion, unit, Duration, Energy, LinearUnit, PowerUnit, Result,
    SaturatingInteger, TryMul,
};

/// Stored in microwatts: ±9.2 terawatts.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Power {
    v: SaturatingInteger, // in microwatts
}

supports_quantity_ops!(Power);
supports_unit_conversion!(Power, PowerUnit, PowerUnit::INTERNATIONAL);
supports_absdiffeq!(Power);

impl Power {
    /// Calls `action` with whole terawatts, gigawatts, megawatts, kilowatts,
    /// watts, milliwatts and microwatts.
    pub fn to_international_components<T>(
        self,
        action: impl FnOnce(i64, i64, i64, i64, i64, i64, i64) -> T,
    ) -> T {
        let mut scales = PowerUnit::INTERNATIONAL.map(LinearUnit::scale);
        scales.reverse();
        let ([tw, gw, mw, kw, w, milli, micro], _) = unit::decompose(self.v, scales);
        action(tw, gw, mw, kw, w, milli, micro)
    }
}

impl TryMul<Duration> for Power {
    type Output = Energy;

    fn try_mul(self, rhs: Duration) -> Result<Energy> {
        // uW * ns = 1e-12 mJ
        Ok(Energy::from_raw(derived::product_with_duration(
            self.raw(),
            rhs,
            4,
        )))
    }
}

supports_fallible_op!(Mul, mul, TryMul, try_mul, Power, Duration);

#[cfg(test)]
mod test {
    use crate::{
        gigawatts, hours, kilowatt_hours, kilowatts, megawatts, microseconds, microwatts,
        milliseconds, millijoules, milliwatts, nanoseconds, seconds, terawatts, watts, Duration,
        Energy, Power, PowerUnit,
    };

    #[test]
    fn test_energy_from_power() {
        assert_eq!(microwatts!(1_234) * seconds!(1_000), millijoules!(1_234));
        assert_eq!(kilowatts!(1) * hours!(1), kilowatt_hours!(1));
        assert_eq!(watts!(-2) * seconds!(3), -millijoules!(6_000));
    }

    #[test]
    fn test_energy_keeps_precision_across_denominations() {
        let p = microwatts!(124_999_998_860);
        assert_eq!(p * nanoseconds!(987_654_321), millijoules!(123_456_788));
        assert_eq!(
            p * microseconds!(987_654_321),
            millijoules!(123_456_788_999)
        );
        assert_eq!(
            p * milliseconds!(987_654_321),
            millijoules!(123_456_788_999_074)
        );
        assert_eq!(
            p * seconds!(987_654_321),
            millijoules!(123_456_788_999_074_074)
        );
    }

    #[test]
    fn test_energy_from_infinite_power() {
        assert_eq!(Power::POSITIVE_INFINITY * seconds!(1), Energy::POSITIVE_INFINITY);
        assert_eq!(Power::POSITIVE_INFINITY * seconds!(-1), Energy::NEGATIVE_INFINITY);
        assert_eq!(
            Power::NEGATIVE_INFINITY * Duration::INFINITE,
            Energy::NEGATIVE_INFINITY
        );
        assert_eq!(watts!(1) * -Duration::INFINITE, Energy::NEGATIVE_INFINITY);
        assert_eq!(Power::POSITIVE_INFINITY * Duration::ZERO, Energy::ZERO);
        assert_eq!(terawatts!(9) * hours!(1), Energy::POSITIVE_INFINITY);
    }

    #[test]
    fn test_components() {
        let p = terawatts!(1)
            + gigawatts!(2)
            + megawatts!(3)
            + kilowatts!(4)
            + watts!(5)
            + milliwatts!(6)
            + microwatts!(7);
        let parts =
            p.to_international_components(|tw, gw, mw, kw, w, milli, micro| {
                [tw, gw, mw, kw, w, milli, micro]
            });
        assert_eq!(parts, [1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_display() {
        assert_eq!(watts!(1_500).to_string(), "1.5kW");
        assert_eq!(milliwatts!(1).to_string_in(PowerUnit::Watt), "0.001W");
        assert_eq!(Power::ZERO.to_string(), "0.0μW");
    }
}
