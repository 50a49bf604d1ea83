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
    supports_unit_conversion, unit, Area, DistanceUnit, Duration, Energy, Force, LinearUnit,
    Result, SaturatingInteger, TryDiv, TryMul, Velocity, Volume,
};

/// A length, stored in nanometers: ±9.2 million kilometers.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Distance {
    v: SaturatingInteger, // in nanometers
}

supports_quantity_ops!(Distance);
supports_unit_conversion!(Distance, DistanceUnit, DistanceUnit::INTERNATIONAL);
supports_absdiffeq!(Distance);

impl Distance {
    /// Calls `action` with whole gigameters, megameters, kilometers, meters,
    /// centimeters, millimeters, micrometers and nanometers.
    #[allow(clippy::type_complexity)]
    pub fn to_international_components<T>(
        self,
        action: impl FnOnce(i64, i64, i64, i64, i64, i64, i64, i64) -> T,
    ) -> T {
        let mut scales = DistanceUnit::INTERNATIONAL.map(LinearUnit::scale);
        scales.reverse();
        let ([gm, mega, km, m, cm, mm, um, nm], _) = unit::decompose(self.v, scales);
        action(gm, mega, km, m, cm, mm, um, nm)
    }

    /// Calls `action` with whole miles, yards and feet, and the remaining inches.
    pub fn to_united_states_customary_components<T>(
        self,
        action: impl FnOnce(i64, i64, i64, f64) -> T,
    ) -> T {
        let ([mi, yd, ft], rest) = unit::decompose(
            self.v,
            [
                DistanceUnit::Mile.scale(),
                DistanceUnit::Yard.scale(),
                DistanceUnit::Foot.scale(),
            ],
        );
        action(mi, yd, ft, Distance::from_raw(rest).to_f64(DistanceUnit::Inch))
    }

    /// Renders the non-zero customary components, e.g. "1mi 1yd 1ft 1.0in".
    pub fn to_united_states_customary_string(self) -> String {
        if self.is_infinite() {
            return self.v.to_string();
        }
        self.to_united_states_customary_components(|mi, yd, ft, inches| {
            let mut parts = [(mi, "mi"), (yd, "yd"), (ft, "ft")]
                .iter()
                .filter(|(count, _)| *count != 0)
                .map(|(count, symbol)| format!("{}{}", count, symbol))
                .collect::<Vec<_>>();
            if inches != 0.0 || parts.is_empty() {
                parts.push(format!("{:?}in", inches));
            }
            parts.join(" ")
        })
    }
}

impl TryMul<Distance> for Distance {
    type Output = Area;

    fn try_mul(self, rhs: Distance) -> Result<Area> {
        // nm * nm = 1e-12 mm^2
        Ok(Area::from_raw(derived::product(self.raw(), rhs.raw(), 4)?))
    }
}

impl TryMul<Area> for Distance {
    type Output = Volume;

    fn try_mul(self, rhs: Area) -> Result<Volume> {
        rhs.try_mul(self)
    }
}

impl TryMul<Force> for Distance {
    type Output = Energy;

    fn try_mul(self, rhs: Force) -> Result<Energy> {
        rhs.try_mul(self)
    }
}

impl TryDiv<Duration> for Distance {
    type Output = Velocity;

    fn try_div(self, rhs: Duration) -> Result<Velocity> {
        // nm / ns = 1e9 nm/s
        Ok(Velocity::from_raw(derived::quotient_by_duration(
            self.raw(),
            rhs,
            3,
        )?))
    }
}

supports_fallible_op!(Mul, mul, TryMul, try_mul, Distance, Distance);
supports_fallible_op!(Mul, mul, TryMul, try_mul, Distance, Area);
supports_fallible_op!(Mul, mul, TryMul, try_mul, Distance, Force);
supports_fallible_op!(Div, div, TryDiv, try_div, Distance, Duration);

#[cfg(test)]
mod test {
    use crate::{
        centimeters, feet, gigameters, inches, kilometers, megameters, meters, micrometers, miles,
        millimeters, nanometers, yards, Distance, DistanceUnit,
    };
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_international_components() {
        let d = gigameters!(1)
            + megameters!(1)
            + kilometers!(1)
            + meters!(1)
            + centimeters!(1)
            + millimeters!(1)
            + micrometers!(1)
            + nanometers!(1);
        let parts = d.to_international_components(|gm, mega, km, m, cm, mm, um, nm| {
            [gm, mega, km, m, cm, mm, um, nm]
        });
        assert_eq!(parts, [1; 8]);
    }

    #[test]
    fn test_infinite_components() {
        let all = |d: Distance| {
            d.to_international_components(|gm, mega, km, m, cm, mm, um, nm| {
                [gm, mega, km, m, cm, mm, um, nm]
            })
        };
        assert_eq!(all(Distance::POSITIVE_INFINITY), [i64::MAX; 8]);
        assert_eq!(all(Distance::NEGATIVE_INFINITY), [i64::MIN; 8]);

        let customary = |d: Distance| {
            d.to_united_states_customary_components(|mi, yd, ft, inches| (mi, yd, ft, inches))
        };
        assert_eq!(
            customary(Distance::POSITIVE_INFINITY),
            (i64::MAX, i64::MAX, i64::MAX, f64::INFINITY)
        );
        assert_eq!(
            customary(Distance::NEGATIVE_INFINITY),
            (i64::MIN, i64::MIN, i64::MIN, f64::NEG_INFINITY)
        );
    }

    #[test]
    fn test_unit_round_trips_to_its_own_slot() {
        let km = kilometers!(42)
            .to_international_components(|_, _, km, m, _, _, _, nm| (km, m, nm));
        assert_eq!(km, (42, 0, 0));
        let mi = miles!(7).to_united_states_customary_components(|mi, yd, ft, inches| {
            (mi, yd, ft, inches)
        });
        assert_eq!(mi, (7, 0, 0, 0.0));
    }

    #[test]
    fn test_customary_string() {
        let d = miles!(1) + yards!(1) + feet!(1) + inches!(1);
        assert_eq!(d.to_united_states_customary_string(), "1mi 1yd 1ft 1.0in");
        assert_eq!(feet!(3).to_united_states_customary_string(), "1yd");
        assert_eq!(Distance::ZERO.to_united_states_customary_string(), "0.0in");
        assert_eq!(
            Distance::NEGATIVE_INFINITY.to_united_states_customary_string(),
            "-Infinity"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(meters!(10_000).to_string(), "10.0km");
        assert_eq!(millimeters!(-1_500).to_string(), "-1.5m");
        assert_eq!(Distance::ZERO.to_string(), "0.0nm");
        assert_eq!(Distance::POSITIVE_INFINITY.to_string(), "Infinity");
        let one = meters!(1);
        assert_eq!(
            one.to_string_in(DistanceUnit::Foot),
            format!("{:?}ft", one.to_f64(DistanceUnit::Foot))
        );
    }

    #[test]
    fn test_conversion() {
        assert_abs_diff_eq!(feet!(1).to_f64(DistanceUnit::Meter), 0.3048);
        assert_abs_diff_eq!(miles!(1).to_f64(DistanceUnit::Kilometer), 1.609344);
        assert_abs_diff_eq!(meters!(1), millimeters!(1_000));
        assert_abs_diff_eq!(meters!(1), meters!(1) + nanometers!(3), epsilon = 3);
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(meters!(3) * 2, meters!(6));
        assert_eq!(2 * meters!(3), meters!(6));
        assert_eq!(meters!(7) / 2, millimeters!(3_500));
        assert_eq!(kilometers!(1) / meters!(250), 4.0);
        assert!(Distance::POSITIVE_INFINITY / Distance::POSITIVE_INFINITY != 1.0);
        let mut d = meters!(1);
        d += centimeters!(50);
        d -= millimeters!(250);
        assert_eq!(d, centimeters!(125));
        assert!(meters!(1) > feet!(3));
    }

    #[test]
    fn test_saturation() {
        assert_eq!(gigameters!(10), Distance::POSITIVE_INFINITY);
        assert_eq!(gigameters!(5) + gigameters!(5), Distance::POSITIVE_INFINITY);
        assert_eq!(-Distance::POSITIVE_INFINITY, Distance::NEGATIVE_INFINITY);
        assert!(Distance::NEGATIVE_INFINITY.is_infinite());
    }
}
