use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JANUARY,
    LEAP_YEAR_CYCLE, MAX_DAY, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR,
};
use crate::error::{DateError, Field};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1812..=2012)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it lies in the supported domain
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` for the year field if the value is outside
    /// `MIN_YEAR..=MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, DateError> {
        NonZeroU16::new(value)
            .filter(|_| (MIN_YEAR..=MAX_YEAR).contains(&value))
            .map(Self)
            .ok_or(DateError::out_of_range(Field::Year, value))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Whether this year has a February 29th
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` for the month field if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value)
            .ok_or(DateError::out_of_range(Field::Month, u16::from(value)))?;
        if value > MAX_MONTH {
            return Err(DateError::out_of_range(Field::Month, u16::from(value)));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value in the coarse range `MIN_DAY..=MAX_DAY` (1..=31).
///
/// The bound does not depend on the month: a `Day` of 31 is accepted here and
/// only rejected once it is combined with a 30-day month. Keeping the two checks
/// apart lets callers tell a nonsensical day number from a day that merely does
/// not exist in a particular month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating only the coarse `1..=31` bound
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` for the day field if the value is 0 or > `MAX_DAY`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero =
            NonZeroU8::new(value).ok_or(DateError::out_of_range(Field::Day, u16::from(value)))?;
        if value > MAX_DAY {
            return Err(DateError::out_of_range(Field::Day, u16::from(value)));
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Weekday {
    #[display(fmt = "Monday")]
    Monday,
    #[display(fmt = "Tuesday")]
    Tuesday,
    #[display(fmt = "Wednesday")]
    Wednesday,
    #[display(fmt = "Thursday")]
    Thursday,
    #[display(fmt = "Friday")]
    Friday,
    #[display(fmt = "Saturday")]
    Saturday,
    #[display(fmt = "Sunday")]
    Sunday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Weekday for a Monday-based index; wraps modulo 7.
    pub(crate) const fn from_monday_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Days since the preceding Monday (Monday is 0, Sunday is 6)
    pub const fn days_from_monday(self) -> u8 {
        self as u8
    }

    /// Saturday or Sunday
    pub const fn is_weekend(self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }

    /// Monday through Friday
    pub const fn is_business_day(self) -> bool {
        !self.is_weekend()
    }
}

// Helper functions

/// Gregorian leap-year rule. Does not check the supported domain.
pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Length of `month` in `year`. Does not check the supported domain.
///
/// # Panics
/// Panics if `month` is not in `1..=12`. Validate through [`Month`] first when
/// the value comes from outside.
pub const fn days_in_month(month: u8, year: u16) -> u8 {
    assert!(matches!(month, JANUARY..=MAX_MONTH), "month must be in 1..=12");

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Whether `day` exists in `month` of `year`, for any `day` value.
pub(crate) fn day_exists(month: u8, day: u8, year: u16) -> bool {
    (MIN_DAY..=days_in_month(month, year)).contains(&day)
}
