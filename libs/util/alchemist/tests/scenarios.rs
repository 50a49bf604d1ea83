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
use alchemist::{
    celsius, centimeters, fahrenheit, gigameters, hours, joules, kilometers, megajoules,
    megameters, meters, micrometers, microseconds, microwatts, millijoules, millimeters,
    milliseconds, nanokelvins, nanometers, nanoseconds, seconds, watts, Duration, Energy, Power,
    TryDiv, UndefinedResult,
};

#[test]
fn distance_decomposes_into_every_unit() {
    let d = gigameters!(1)
        + megameters!(1)
        + kilometers!(1)
        + meters!(1)
        + centimeters!(1)
        + millimeters!(1)
        + micrometers!(1)
        + nanometers!(1);
    d.to_international_components(|gm, mega, km, m, cm, mm, um, nm| {
        assert_eq!([gm, mega, km, m, cm, mm, um, nm], [1; 8]);
    });
    assert_eq!(meters!(10_000).to_string(), "10.0km");
}

#[test]
fn energy_over_time() {
    assert_eq!(joules!(1) / seconds!(1), watts!(1));
    assert_eq!(
        megajoules!(123_456_789) / seconds!(987_654_321),
        microwatts!(124_999_998_860)
    );
    assert_eq!(
        Energy::POSITIVE_INFINITY / hours!(10),
        Power::POSITIVE_INFINITY
    );
    assert_eq!(
        Energy::POSITIVE_INFINITY.try_div(Duration::INFINITE),
        Err(UndefinedResult::InfiniteQuotient)
    );
}

#[test]
fn power_over_time() {
    let p = microwatts!(124_999_998_860);
    assert_eq!(p * nanoseconds!(987_654_321), millijoules!(123_456_788));
    assert_eq!(p * microseconds!(987_654_321), millijoules!(123_456_788_999));
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
fn temperature_scales_agree() {
    assert_eq!(celsius!(0), nanokelvins!(273_150_000_000));
    assert_eq!(fahrenheit!(32), celsius!(0));
}

#[test]
fn undefined_results_panic_through_operators() {
    let result = std::panic::catch_unwind(|| Energy::POSITIVE_INFINITY + Energy::NEGATIVE_INFINITY);
    assert!(result.is_err());
}
