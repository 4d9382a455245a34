//! # nextdate
//!
//! A proleptic Gregorian calendar date restricted to the years
//! [`MIN_YEAR`]..=[`MAX_YEAR`] (1812 through 2012), with exact day-level
//! arithmetic.
//!
//! ```
//! use nextdate::{CalendarDate, DateError, compute_next_date};
//!
//! let date = CalendarDate::new(2, 28, 1992).unwrap();
//! assert_eq!(date.next_day().unwrap().as_tuple(), (2, 29, 1992));
//!
//! assert_eq!(compute_next_date(12, 31, 2011), Ok((1, 1, 2012)));
//! assert!(matches!(
//!     compute_next_date(12, 31, 2012),
//!     Err(DateError::DomainExceeded { .. })
//! ));
//! ```
//!
//! Construction validates in two stages. Each component is first checked
//! against its own coarse range (month `1..=12`, day `1..=31`, year
//! `1812..=2012`), reported as [`DateError::OutOfRange`]. Only then is the
//! combination checked against the real month length, reported as
//! [`DateError::InvalidCombination`]. Arithmetic whose result would leave the
//! supported years fails with [`DateError::DomainExceeded`]; nothing is ever
//! clamped.

mod consts;
mod error;
pub mod ordinal;
mod prelude;
mod types;

pub use consts::*;
pub use error::{Bound, DateError, Field};
pub use types::{Day, Month, Weekday, Year, days_in_month, is_leap_year};

use crate::ordinal::{MAX_ORDINAL, MIN_ORDINAL};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// A validated calendar day between January 1st, 1812 and December 31st, 2012.
///
/// Values are immutable; every operation returns a new date. Ordering is
/// chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CalendarDate {
    // Field order drives the derived chronological ordering
    year: u16,
    month: u8,
    day: u8,
}

/// Unvalidated wire shape, routed through [`CalendarDate::new`] on deserialize.
#[derive(Deserialize)]
struct RawDate {
    year: u16,
    month: u8,
    day: u8,
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawDate::deserialize(deserializer)?;
        Self::new(raw.month, raw.day, raw.year).map_err(serde::de::Error::custom)
    }
}

impl CalendarDate {
    /// January 1st, `MIN_YEAR`
    pub const MIN: Self = Self {
        year: MIN_YEAR,
        month: JANUARY,
        day: MIN_DAY,
    };

    /// December 31st, `MAX_YEAR`
    pub const MAX: Self = Self {
        year: MAX_YEAR,
        month: DECEMBER,
        day: DAYS_IN_MONTH[DECEMBER as usize],
    };

    /// Creates a date from month, day and year, in that order.
    ///
    /// # Errors
    /// - `DateError::OutOfRange` for the first component outside its coarse
    ///   range, checked month, then day, then year.
    /// - `DateError::InvalidCombination` when every component is in range but
    ///   the day does not exist in that month of that year.
    pub fn new(month: u8, day: u8, year: u16) -> Result<Self, DateError> {
        let (month, day, year) = Self::check_fields(month, day, year)?;
        Self::check_combination(month, day, year)
    }

    /// First validation stage: each component against its own range, ignoring
    /// the others.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` naming the first failing field.
    pub fn check_fields(month: u8, day: u8, year: u16) -> Result<(Month, Day, Year), DateError> {
        let month = Month::new(month)?;
        let day = Day::new(day)?;
        let year = Year::new(year)?;
        Ok((month, day, year))
    }

    /// Second validation stage: the day must exist in that month of that year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidCombination` if it does not (e.g. February 30th).
    pub fn check_combination(month: Month, day: Day, year: Year) -> Result<Self, DateError> {
        let (month, day, year) = (month.get(), day.get(), year.get());
        if !types::day_exists(month, day, year) {
            return Err(DateError::InvalidCombination {
                month,
                day,
                year,
                max_day: days_in_month(month, year),
            });
        }
        Ok(Self { year, month, day })
    }

    /// Creates a date from its ordinal day number (see [`CalendarDate::ordinal`]).
    ///
    /// # Errors
    /// Returns `DateError::DomainExceeded` if the ordinal falls outside the
    /// supported years.
    pub fn from_ordinal(ordinal: i64) -> Result<Self, DateError> {
        if ordinal < MIN_ORDINAL {
            return Err(DateError::DomainExceeded {
                bound: Bound::Lower,
            });
        }
        if ordinal > MAX_ORDINAL {
            return Err(DateError::DomainExceeded {
                bound: Bound::Upper,
            });
        }
        let (year, month, day) = ordinal::to_civil(ordinal).ok_or(DateError::DomainExceeded {
            bound: Bound::Upper,
        })?;
        Self::new(month, day, year)
    }

    /// Returns the year
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the month (1..=12)
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of the month
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns `(month, day, year)`
    pub const fn as_tuple(&self) -> (u8, u8, u16) {
        (self.month, self.day, self.year)
    }

    /// Gregorian leap-year rule, see [`is_leap_year`]
    pub const fn is_leap(year: u16) -> bool {
        is_leap_year(year)
    }

    /// Length of `month` in `year`, see [`days_in_month`]
    ///
    /// # Panics
    /// Panics if `month` is not in `1..=12`.
    pub const fn days_in_month(month: u8, year: u16) -> u8 {
        days_in_month(month, year)
    }

    /// Whether this date's year is a leap year
    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Length of this date's month
    pub const fn month_length(&self) -> u8 {
        days_in_month(self.month, self.year)
    }

    /// Position of this date on the continuous day axis.
    pub const fn ordinal(&self) -> i64 {
        ordinal::from_civil(self.year, self.month, self.day)
    }

    /// Returns the day of the week
    pub const fn weekday(&self) -> Weekday {
        ordinal::weekday(self.ordinal())
    }

    /// Signed number of days from `self` to `other`
    pub const fn days_until(&self, other: &Self) -> i64 {
        other.ordinal() - self.ordinal()
    }

    /// The following calendar day.
    ///
    /// # Errors
    /// Returns `DateError::DomainExceeded` for December 31st, 2012.
    pub fn next_day(&self) -> Result<Self, DateError> {
        self.shift(1)
    }

    /// The preceding calendar day.
    ///
    /// # Errors
    /// Returns `DateError::DomainExceeded` for January 1st, 1812.
    pub fn prev_day(&self) -> Result<Self, DateError> {
        self.shift(-1)
    }

    /// The date `days` days after this one; negative values move backward.
    ///
    /// # Errors
    /// Returns `DateError::DomainExceeded` if the result is outside the
    /// supported years.
    pub fn shift(&self, days: i64) -> Result<Self, DateError> {
        if days == 0 {
            return Ok(*self);
        }

        let bound = if days > 0 { Bound::Upper } else { Bound::Lower };
        let target = self
            .ordinal()
            .checked_add(days)
            .ok_or(DateError::DomainExceeded { bound })?;

        Self::from_ordinal(target).inspect_err(|err| {
            trace!(
                year = self.year,
                month = self.month,
                day = self.day,
                days,
                %err,
                "shift rejected"
            );
        })
    }

    /// The last calendar day of this date's month.
    pub const fn last_day_of_month(&self) -> Self {
        Self {
            year: self.year,
            month: self.month,
            day: self.month_length(),
        }
    }

    /// The last Monday-to-Friday day of this date's month.
    ///
    /// A month ending on Saturday backs off one day, on Sunday two.
    pub fn last_business_day_of_month(&self) -> Self {
        // Month end is the day before the 1st of the next month. The year after
        // MAX_YEAR is fine here since only raw ordinals are involved.
        let (next_year, next_month) = if self.month == DECEMBER {
            (self.year + 1, JANUARY)
        } else {
            (self.year, self.month + 1)
        };
        let end = ordinal::from_civil(next_year, next_month, MIN_DAY) - 1;

        let mut backoff: u8 = 0;
        while ordinal::weekday(end - i64::from(backoff)).is_weekend() {
            backoff += 1;
        }

        let end_of_month = self.last_day_of_month();
        if backoff == 0 {
            return end_of_month;
        }

        debug!(
            year = self.year,
            month = self.month,
            ends_on = %ordinal::weekday(end),
            backoff,
            "month ends on a weekend"
        );
        // At most two days back from a day that is at least the 28th
        Self {
            day: end_of_month.day - backoff,
            ..end_of_month
        }
    }
}

impl TryFrom<(u8, u8, u16)> for CalendarDate {
    type Error = DateError;

    fn try_from(value: (u8, u8, u16)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<CalendarDate> for (u8, u8, u16) {
    fn from(date: CalendarDate) -> Self {
        date.as_tuple()
    }
}

/// Validates `(month, day, year)` and returns the following day as
/// `(month, day, year)`.
///
/// # Errors
/// Propagates every [`DateError`] from construction and from [`CalendarDate::next_day`].
pub fn compute_next_date(month: u8, day: u8, year: u16) -> Result<(u8, u8, u16), DateError> {
    let next = CalendarDate::new(month, day, year)?.next_day()?;
    Ok(next.as_tuple())
}
