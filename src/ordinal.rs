//! Proleptic Gregorian day numbers.
//!
//! Ordinals count days on a continuous axis where day 1 is Monday, January 1st
//! of year 1 (Rata Die). Every supported date maps to exactly one ordinal and
//! back, which lets shifting and weekday lookup avoid month/year rollover logic.

use crate::consts::{
    DAYS_PER_GREGORIAN_CYCLE, DAYS_PER_WEEK, DAYS_PER_YEAR, DECEMBER, GREGORIAN_CYCLE, JANUARY,
    MAX_YEAR, MIN_DAY, MIN_YEAR,
};
use crate::types::{Weekday, days_in_month};

/// Ordinal of January 1st, `MIN_YEAR`
pub const MIN_ORDINAL: i64 = from_civil(MIN_YEAR, JANUARY, MIN_DAY);

/// Ordinal of December 31st, `MAX_YEAR`
pub const MAX_ORDINAL: i64 = from_civil(MAX_YEAR, DECEMBER, 31);

/// Days from the epoch up to (not including) January 1st of `year`.
const fn days_before_year(year: u16) -> i64 {
    let elapsed = year as i64 - 1;
    DAYS_PER_YEAR * elapsed + elapsed.div_euclid(4) - elapsed.div_euclid(100)
        + elapsed.div_euclid(400)
}

/// Days in `year` before the first of `month`.
const fn days_before_month(month: u8, year: u16) -> i64 {
    let mut total = 0;
    let mut m = JANUARY;
    while m < month {
        total += days_in_month(m, year) as i64;
        m += 1;
    }
    total
}

/// Ordinal for a (year, month, day) triple. The triple is assumed to be a real date;
/// the supported domain is not checked.
///
/// # Panics
/// Panics if `month` is not in `1..=12`.
pub const fn from_civil(year: u16, month: u8, day: u8) -> i64 {
    days_before_year(year) + days_before_month(month, year) + day as i64
}

/// Inverse of [`from_civil`], returning `(year, month, day)`.
///
/// Returns `None` for ordinals before year 1 or past what a `u16` year can hold.
pub fn to_civil(ordinal: i64) -> Option<(u16, u8, u8)> {
    if ordinal < 1 {
        return None;
    }

    // The average-year estimate is at most one year off in either direction
    let estimate = (ordinal - 1).checked_mul(i64::from(GREGORIAN_CYCLE))?
        / DAYS_PER_GREGORIAN_CYCLE
        + 1;
    let mut year = u16::try_from(estimate).ok()?;
    while days_before_year(year) >= ordinal {
        year -= 1;
    }
    while days_before_year(year.checked_add(1)?) < ordinal {
        year += 1;
    }

    let mut remaining = ordinal - days_before_year(year);
    let mut month = JANUARY;
    loop {
        let length = i64::from(days_in_month(month, year));
        if remaining <= length {
            break;
        }
        remaining -= length;
        month += 1;
    }

    Some((year, month, u8::try_from(remaining).ok()?))
}

/// Weekday of an ordinal, anchored on ordinal 1 being a Monday.
pub const fn weekday(ordinal: i64) -> Weekday {
    Weekday::from_monday_index((ordinal - 1).rem_euclid(DAYS_PER_WEEK) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        assert_eq!(from_civil(1, 1, 1), 1);
        assert_eq!(to_civil(1), Some((1, 1, 1)));
        assert_eq!(weekday(1), Weekday::Monday);
        assert_eq!(to_civil(0), None);
        assert_eq!(to_civil(-5), None);
    }

    #[test]
    fn test_known_ordinals() {
        // 2000-01-01 is Rata Die 730120
        assert_eq!(from_civil(2000, 1, 1), 730_120);
        assert_eq!(MIN_ORDINAL, 661_454);
        assert_eq!(MAX_ORDINAL - MIN_ORDINAL + 1, 73_415);
    }

    #[test]
    fn test_known_weekdays() {
        struct TestCase {
            date: (u16, u8, u8),
            weekday: Weekday,
        }

        let cases = [
            TestCase {
                date: (1812, 1, 1),
                weekday: Weekday::Wednesday,
            },
            TestCase {
                date: (1900, 1, 1),
                weekday: Weekday::Monday,
            },
            TestCase {
                date: (2000, 1, 1),
                weekday: Weekday::Saturday,
            },
            TestCase {
                date: (2010, 12, 31),
                weekday: Weekday::Friday,
            },
            TestCase {
                date: (2011, 7, 31),
                weekday: Weekday::Sunday,
            },
            TestCase {
                date: (2011, 12, 31),
                weekday: Weekday::Saturday,
            },
            TestCase {
                date: (2012, 12, 31),
                weekday: Weekday::Monday,
            },
        ];

        for case in &cases {
            let (y, m, d) = case.date;
            assert_eq!(
                weekday(from_civil(y, m, d)),
                case.weekday,
                "{y}-{m:02}-{d:02} should be a {}",
                case.weekday
            );
        }
    }

    #[test]
    fn test_round_trip_whole_domain() {
        let mut expected = MIN_ORDINAL;
        for year in MIN_YEAR..=MAX_YEAR {
            for month in 1..=12 {
                for day in 1..=days_in_month(month, year) {
                    let ordinal = from_civil(year, month, day);
                    assert_eq!(ordinal, expected, "{year}-{month:02}-{day:02} is not contiguous");
                    assert_eq!(to_civil(ordinal), Some((year, month, day)));
                    expected += 1;
                }
            }
        }
        assert_eq!(expected - 1, MAX_ORDINAL);
    }

    #[test]
    fn test_year_boundaries_just_outside_domain() {
        assert_eq!(to_civil(MIN_ORDINAL - 1), Some((1811, 12, 31)));
        assert_eq!(to_civil(MAX_ORDINAL + 1), Some((2013, 1, 1)));
    }

    #[test]
    #[should_panic(expected = "month must be in 1..=12")]
    fn test_from_civil_rejects_invalid_month() {
        let _ = from_civil(1991, 13, 1);
    }

    #[test]
    fn test_to_civil_rejects_huge_ordinals() {
        assert_eq!(to_civil(i64::MAX), None);
    }
}
