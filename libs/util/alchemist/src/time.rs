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
    supports_fallible_assign_op, supports_fallible_op, unit, LinearUnit, Result, SaturatingInteger,
    TimeUnit, TryAdd, TrySub,
};
use std::{fmt, ops::Neg};

const NANOS_IN_SECOND: i64 = 1_000_000_000;

/// A signed span of time with nanosecond precision and infinite extremes.
///
/// Stored as whole seconds plus a nanosecond part of the same sign, so any
/// span of up to ±292 billion years is exact. `Duration::INFINITE` and its
/// negation absorb all arithmetic.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Duration {
    seconds: SaturatingInteger,
    nanos: i32, // same sign as seconds, |nanos| < 1e9
}

impl Duration {
    pub const INFINITE: Self = Self::infinite(1);
    pub const ZERO: Self = Self {
        seconds: SaturatingInteger::ZERO,
        nanos: 0,
    };

    const fn infinite(signum: i64) -> Self {
        Self {
            seconds: SaturatingInteger::infinity(signum),
            nanos: 0,
        }
    }

    fn normalized(seconds: SaturatingInteger, nanos: i64) -> Self {
        if seconds.is_infinite() {
            return Self {
                seconds,
                nanos: 0,
            };
        }
        let mut seconds = seconds + nanos / NANOS_IN_SECOND;
        let mut nanos = nanos % NANOS_IN_SECOND;
        if seconds.is_infinite() {
            return Self {
                seconds,
                nanos: 0,
            };
        }
        if seconds.signum() > 0 && nanos < 0 {
            seconds = seconds - 1;
            nanos += NANOS_IN_SECOND;
        } else if seconds.signum() < 0 && nanos > 0 {
            seconds = seconds + 1;
            nanos -= NANOS_IN_SECOND;
        }
        Self {
            seconds,
            nanos: nanos as i32,
        }
    }

    pub fn from_unit(value: i64, unit: TimeUnit) -> Self {
        let value = SaturatingInteger::new(value);
        let scale = unit.scale();
        if value.is_infinite() {
            return Self::normalized(value, 0);
        }
        if scale >= NANOS_IN_SECOND {
            return Self::normalized(value * (scale / NANOS_IN_SECOND), 0);
        }
        let per_second = NANOS_IN_SECOND / scale;
        Self::normalized(value / per_second, (value % per_second).into_inner() * scale)
    }

    pub const fn is_infinite(self) -> bool {
        self.seconds.is_infinite()
    }

    pub const fn is_finite(self) -> bool {
        self.seconds.is_finite()
    }

    pub const fn is_negative(self) -> bool {
        self.seconds.signum() < 0 || self.nanos < 0
    }

    pub const fn signum(self) -> i64 {
        if self.seconds.signum() != 0 {
            self.seconds.signum()
        } else {
            self.nanos.signum() as i64
        }
    }

    pub fn abs(self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self
        }
    }

    pub fn in_whole_nanoseconds(self) -> SaturatingInteger {
        self.whole_units(NANOS_IN_SECOND)
    }

    pub fn in_whole_microseconds(self) -> SaturatingInteger {
        self.whole_units(1_000_000)
    }

    pub fn in_whole_milliseconds(self) -> SaturatingInteger {
        self.whole_units(1_000)
    }

    pub fn in_whole_seconds(self) -> SaturatingInteger {
        self.seconds
    }

    fn whole_units(self, per_second: i64) -> SaturatingInteger {
        let sub_second = i64::from(self.nanos) / (NANOS_IN_SECOND / per_second);
        self.seconds * per_second + sub_second
    }

    /// Whole nanoseconds, microseconds, milliseconds, seconds and kiloseconds.
    pub(crate) fn whole_counts(self) -> [SaturatingInteger; 5] {
        [
            self.in_whole_nanoseconds(),
            self.in_whole_microseconds(),
            self.in_whole_milliseconds(),
            self.seconds,
            self.seconds / 1_000,
        ]
    }

    /// Nanoseconds as base-1000 digits, finest first.
    pub(crate) fn thousands_digits(self) -> [SaturatingInteger; 5] {
        let nanos = i64::from(self.nanos);
        [
            SaturatingInteger::new(nanos % 1_000),
            SaturatingInteger::new(nanos / 1_000 % 1_000),
            SaturatingInteger::new(nanos / 1_000_000),
            self.seconds % 1_000,
            self.seconds / 1_000,
        ]
    }

    pub fn to_f64(self, unit: TimeUnit) -> f64 {
        if self.is_infinite() {
            return self.seconds.to_f64();
        }
        let nanos = self.seconds.to_f64() * NANOS_IN_SECOND as f64 + f64::from(self.nanos);
        nanos / unit.scale() as f64
    }

    pub fn to_string_in(self, unit: TimeUnit) -> String {
        unit::format_quantity(self.seconds, self.to_f64(unit), unit)
    }

    /// Split into days, hours, minutes, seconds and nanoseconds.
    pub fn to_components<T>(self, action: impl FnOnce(i64, i64, i64, i64, i64) -> T) -> T {
        let ([days, hours, minutes, seconds], _) =
            unit::decompose(self.seconds, [86_400, 3_600, 60, 1]);
        let nanos = if self.is_infinite() {
            self.seconds.into_inner()
        } else {
            i64::from(self.nanos)
        };
        action(days, hours, minutes, seconds, nanos)
    }
}

impl From<std::time::Duration> for Duration {
    fn from(v: std::time::Duration) -> Self {
        match i64::try_from(v.as_secs()) {
            Ok(seconds) => Self::normalized(seconds.into(), i64::from(v.subsec_nanos())),
            Err(_) => Self::INFINITE,
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let magnitude = self.abs();
        let unit = TimeUnit::ALL
            .iter()
            .rev()
            .copied()
            .find(|&unit| magnitude >= Self::from_unit(1, unit))
            .unwrap_or(TimeUnit::Nanosecond);
        write!(f, "{}", self.to_string_in(unit))
    }
}

impl Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Self {
        Self::normalized(-self.seconds, -i64::from(self.nanos))
    }
}

impl TryAdd for Duration {
    type Output = Duration;

    fn try_add(self, rhs: Self) -> Result<Self> {
        let seconds = self.seconds.try_add(rhs.seconds)?;
        Ok(Self::normalized(
            seconds,
            i64::from(self.nanos) + i64::from(rhs.nanos),
        ))
    }
}

impl TrySub for Duration {
    type Output = Duration;

    fn try_sub(self, rhs: Self) -> Result<Self> {
        self.try_add(-rhs)
    }
}

supports_fallible_op!(Add, add, TryAdd, try_add, Duration, Duration);
supports_fallible_op!(Sub, sub, TrySub, try_sub, Duration, Duration);
supports_fallible_assign_op!(AddAssign, add_assign, TryAdd, try_add, Duration, Duration);
supports_fallible_assign_op!(SubAssign, sub_assign, TrySub, try_sub, Duration, Duration);
