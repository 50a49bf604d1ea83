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

//! Multiplication and division across quantities of different granularity.
//!
//! A derived quantity is usually stored in a much finer or coarser base unit
//! than the exact product or quotient of its operands' base units. Computing
//! the exact intermediate would overflow 64 bits long before the result
//! does, so instead we search a ladder of denominations, each 1000x coarser
//! than the last, for the finest one at which the intermediate still fits.
//! Precision below the chosen denomination is truncated toward zero.
use crate::{Duration, Result, SaturatingInteger, TryMul, UndefinedResult};
use log::trace;
use num_traits::Zero;

const MAX_DIGITS: usize = 7;

const fn thousands(exponent: usize) -> SaturatingInteger {
    SaturatingInteger::new(1_000_i64.pow(exponent as u32))
}

/// Base-1000 digits of a finite value, finest first, with the last digit
/// holding everything above.
fn thousands_digits(v: SaturatingInteger) -> [SaturatingInteger; MAX_DIGITS] {
    let mut digits = [SaturatingInteger::ZERO; MAX_DIGITS];
    let mut rest = v;
    for digit in digits.iter_mut().take(MAX_DIGITS - 1) {
        *digit = rest % 1_000;
        rest = rest / 1_000;
    }
    digits[MAX_DIGITS - 1] = rest;
    digits
}

/// `lhs * digits / 1000^k` over the digits below position `k`, truncated.
///
/// Each step folds one more digit into a carry counted in the next coarser
/// denomination, so only the final fraction below `1000^k` is dropped. Digits
/// below `k` must be less than 1000 in magnitude and share the sign of the
/// carry.
fn carried_product(
    lhs: SaturatingInteger,
    digits: &[SaturatingInteger],
    k: usize,
) -> SaturatingInteger {
    let (lhs_high, lhs_low) = (lhs / 1_000, lhs % 1_000);
    digits
        .iter()
        .take(k)
        .fold(SaturatingInteger::ZERO, |carry, &digit| {
            lhs_high * digit + carry / 1_000 + (carry % 1_000 + lhs_low * digit) / 1_000
        })
}

/// `lhs * rhs / 1000^exponent`, where `rhs` is given as base-1000 digits.
///
/// All operands must be finite and all digits must share a sign.
fn denominated_product(
    lhs: SaturatingInteger,
    digits: &[SaturatingInteger],
    exponent: usize,
) -> SaturatingInteger {
    let mut k = 0;
    loop {
        let sum = digits
            .iter()
            .enumerate()
            .skip(k)
            .fold(carried_product(lhs, digits, k), |sum, (position, &digit)| {
                sum + lhs * digit * thousands(position - k)
            });
        if sum.is_finite() || k == exponent {
            trace!("product of {} settled at 1000^{} base units", lhs, k);
            return sum / thousands(exponent - k);
        }
        k += 1;
    }
}

/// `dividend * 1000^exponent / rhs`, where `divisors[j]` is the whole number of
/// `1000^j` units in `rhs` and `exponent` is the index of the last divisor.
///
/// The dividend must be finite and at least one divisor must be non-zero.
fn denominated_quotient(
    dividend: SaturatingInteger,
    divisors: &[SaturatingInteger],
) -> SaturatingInteger {
    let exponent = divisors.len() - 1;
    let Some(base) = divisors.iter().position(|d| d.is_finite()) else {
        return SaturatingInteger::ZERO;
    };
    for k in base..=exponent {
        let scaled = dividend * thousands(exponent - k);
        if scaled.is_infinite() && k < exponent {
            continue;
        }
        let mut quotient = SaturatingInteger::ZERO;
        for j in base..=k {
            let divisor = divisors[j];
            if divisor.is_zero() {
                break;
            }
            let remainder = if j == base {
                scaled
            } else {
                scaled % divisors[j - 1]
            };
            quotient = quotient + remainder / divisor * thousands(k - j);
        }
        trace!(
            "quotient of {} settled at 1000^{} base units (divisor from 1000^{})",
            dividend,
            k,
            base
        );
        return quotient;
    }
    SaturatingInteger::ZERO
}

/// Quotients involving an infinity or a zero divisor, which never reach the
/// denomination search.
fn degenerate_quotient(
    dividend: SaturatingInteger,
    divisor_signum: i64,
    divisor_is_infinite: bool,
) -> Result<Option<SaturatingInteger>> {
    match (dividend.is_infinite(), divisor_is_infinite) {
        (true, true) => Err(UndefinedResult::InfiniteQuotient),
        (true, false) => Ok(Some(SaturatingInteger::infinity(
            dividend.signum() * if divisor_signum == 0 { 1 } else { divisor_signum },
        ))),
        (false, true) => Ok(Some(SaturatingInteger::ZERO)),
        (false, false) if divisor_signum == 0 => {
            if dividend.is_zero() {
                Err(UndefinedResult::ZeroByZero)
            } else {
                Ok(Some(SaturatingInteger::infinity(dividend.signum())))
            }
        }
        (false, false) => Ok(None),
    }
}

/// `lhs * rhs / 1000^exponent` for two quantities, with plain saturating
/// multiply semantics when either is infinite.
pub(crate) fn product(
    lhs: SaturatingInteger,
    rhs: SaturatingInteger,
    exponent: usize,
) -> Result<SaturatingInteger> {
    if lhs.is_infinite() || rhs.is_infinite() {
        return lhs.try_mul(rhs);
    }
    Ok(denominated_product(lhs, &thousands_digits(rhs), exponent))
}

/// `lhs * rhs / 1000^exponent` with `rhs` counted in nanoseconds. An infinite
/// operand against a zero operand yields zero.
pub(crate) fn product_with_duration(
    lhs: SaturatingInteger,
    rhs: Duration,
    exponent: usize,
) -> SaturatingInteger {
    if lhs.is_infinite() || rhs.is_infinite() {
        return match lhs.signum() * rhs.signum() {
            0 => SaturatingInteger::ZERO,
            signum => SaturatingInteger::infinity(signum),
        };
    }
    denominated_product(lhs, &rhs.thousands_digits(), exponent)
}

/// `lhs * 1000^exponent / rhs` for two quantities.
pub(crate) fn quotient(
    lhs: SaturatingInteger,
    rhs: SaturatingInteger,
    exponent: usize,
) -> Result<SaturatingInteger> {
    if let Some(v) = degenerate_quotient(lhs, rhs.signum(), rhs.is_infinite())? {
        return Ok(v);
    }
    let mut divisors = [SaturatingInteger::ZERO; MAX_DIGITS];
    for (j, divisor) in divisors.iter_mut().enumerate() {
        *divisor = rhs / thousands(j);
    }
    Ok(denominated_quotient(lhs, &divisors[..=exponent]))
}

/// `lhs * 1000^exponent / rhs` with `rhs` counted in nanoseconds.
pub(crate) fn quotient_by_duration(
    lhs: SaturatingInteger,
    rhs: Duration,
    exponent: usize,
) -> Result<SaturatingInteger> {
    if let Some(v) = degenerate_quotient(lhs, rhs.signum(), rhs.is_infinite())? {
        return Ok(v);
    }
    Ok(denominated_quotient(lhs, &rhs.whole_counts()[..=exponent]))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{microseconds, nanoseconds, seconds};

    fn si(v: i64) -> SaturatingInteger {
        SaturatingInteger::new(v)
    }

    #[test]
    fn test_digits() {
        let digits = thousands_digits(si(-1_002_003_004_005_006_007));
        assert_eq!(
            digits,
            [si(-7), si(-6), si(-5), si(-4), si(-3), si(-2), si(-1)]
        );
    }

    #[test]
    fn test_product_is_exact_when_it_fits() {
        assert_eq!(product(si(1_000), si(1_000), 2), Ok(si(1)));
        assert_eq!(product(si(123_456), si(-789), 0), Ok(si(-97_406_784)));
        assert_eq!(product(si(5), si(5), 1), Ok(si(0)));
    }

    #[test]
    fn test_product_falls_back_to_coarser_denomination() {
        // 4e18 * 4e6 / 1e12 only fits after dropping two denominations.
        assert_eq!(
            product(si(4_000_000_000_000_000_000), si(4_000_000), 4),
            Ok(si(16_000_000_000_000))
        );
        assert_eq!(
            product(si(i64::MAX - 1), si(i64::MAX - 1), 1),
            Ok(SaturatingInteger::POSITIVE_INFINITY)
        );
    }

    #[test]
    fn test_product_carries_fractions_between_denominations() {
        let v = si(999_999_999_999_999);
        assert_eq!(product(v, v, 4), Ok(si(999_999_999_999_998_000)));
        assert_eq!(product(-v, v, 4), Ok(si(-999_999_999_999_998_000)));
        assert_eq!(
            product_with_duration(si(999_999_999_999), nanoseconds!(999_999_999_999), 4),
            si(999_999_999_998)
        );
    }

    #[test]
    fn test_product_with_infinity() {
        assert_eq!(
            product(SaturatingInteger::NEGATIVE_INFINITY, si(3), 4),
            Ok(SaturatingInteger::NEGATIVE_INFINITY)
        );
        assert_eq!(
            product(SaturatingInteger::POSITIVE_INFINITY, si(0), 4),
            Err(UndefinedResult::InfiniteTimesZero)
        );
        assert_eq!(
            product_with_duration(SaturatingInteger::POSITIVE_INFINITY, Duration::ZERO, 4),
            SaturatingInteger::ZERO
        );
        assert_eq!(
            product_with_duration(si(-1), Duration::INFINITE, 4),
            SaturatingInteger::NEGATIVE_INFINITY
        );
    }

    #[test]
    fn test_product_with_duration() {
        let power = si(124_999_998_860);
        assert_eq!(
            product_with_duration(power, nanoseconds!(987_654_321), 4),
            si(123_456_788)
        );
        assert_eq!(
            product_with_duration(power, seconds!(987_654_321), 4),
            si(123_456_788_999_074_074)
        );
        assert_eq!(
            product_with_duration(-power, seconds!(987_654_321), 4),
            si(-123_456_788_999_074_074)
        );
    }

    #[test]
    fn test_quotient() {
        assert_eq!(quotient(si(1_000_000), si(1_000), 2), Ok(si(1_000_000_000)));
        assert_eq!(quotient(si(7), si(-2), 0), Ok(si(-3)));
        assert_eq!(
            quotient(si(7), si(0), 2),
            Ok(SaturatingInteger::POSITIVE_INFINITY)
        );
        assert_eq!(quotient(si(0), si(0), 2), Err(UndefinedResult::ZeroByZero));
        assert_eq!(
            quotient(SaturatingInteger::NEGATIVE_INFINITY, si(-4), 2),
            Ok(SaturatingInteger::POSITIVE_INFINITY)
        );
        assert_eq!(
            quotient(si(9), SaturatingInteger::NEGATIVE_INFINITY, 2),
            Ok(SaturatingInteger::ZERO)
        );
        assert_eq!(
            quotient(
                SaturatingInteger::POSITIVE_INFINITY,
                SaturatingInteger::POSITIVE_INFINITY,
                2
            ),
            Err(UndefinedResult::InfiniteQuotient)
        );
    }

    #[test]
    fn test_quotient_by_duration() {
        let energy = si(123_456_789_000_000_000);
        assert_eq!(
            quotient_by_duration(energy, seconds!(987_654_321), 4),
            Ok(si(124_999_998_860))
        );
        assert_eq!(
            quotient_by_duration(si(1_000_000_000_000), seconds!(1_000_000_000_000_000), 4),
            Ok(si(1))
        );
        assert_eq!(
            quotient_by_duration(si(1_000_000_000_000_000_000), seconds!(1), 4),
            Ok(SaturatingInteger::POSITIVE_INFINITY)
        );
        // Beyond 64-bit nanoseconds the divisor is counted in whole microseconds.
        assert_eq!(
            quotient_by_duration(
                si(5_000_000_000),
                seconds!(10_000_000_000) + microseconds!(1),
                4
            ),
            Ok(si(499))
        );
        assert_eq!(
            quotient_by_duration(si(-5), Duration::ZERO, 4),
            Ok(SaturatingInteger::NEGATIVE_INFINITY)
        );
    }
}
