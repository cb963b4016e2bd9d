use crate::consts::{CENTURY_CYCLE, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE};
use crate::NextDateError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value in the range `MIN_YEAR..=MAX_YEAR` (1812..=2100).
///
/// The bound is checked on construction only. [`Year::following`] may step
/// one past `MAX_YEAR`, which is how December 31st 2100 advances to 2101.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it lies in `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `NextDateError::YearOutOfRange` otherwise.
    pub fn new(value: i32) -> Result<Self, NextDateError> {
        u16::try_from(value)
            .ok()
            .filter(|year| (MIN_YEAR..=MAX_YEAR).contains(year))
            .and_then(NonZeroU16::new)
            .map(Self)
            .ok_or(NextDateError::YearOutOfRange { year: value })
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Whether this is a Gregorian leap year
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }

    /// The next year, without re-checking `MAX_YEAR`.
    pub(crate) const fn following(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl TryFrom<u16> for Year {
    type Error = NextDateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(i32::from(value))
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
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    pub const JANUARY: Self = Self(NonZeroU8::MIN);

    /// Creates a new Month, validating that it lies in `1..=MAX_MONTH`
    ///
    /// # Errors
    /// Returns `NextDateError::MonthOutOfRange` otherwise.
    pub fn new(value: i32) -> Result<Self, NextDateError> {
        u8::try_from(value)
            .ok()
            .filter(|month| *month <= MAX_MONTH)
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(NextDateError::MonthOutOfRange { month: value })
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// The next month, or `None` after December.
    pub(crate) const fn following(self) -> Option<Self> {
        if self.get() == DECEMBER {
            None
        } else {
            Some(Self(self.0.saturating_add(1)))
        }
    }
}

impl TryFrom<u8> for Month {
    type Error = NextDateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i32::from(value))
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
/// Whether the day exists in a particular month is checked by
/// [`CalendarDate`](crate::CalendarDate), which knows the month and year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    pub const FIRST: Self = Self(NonZeroU8::MIN);

    /// Creates a new Day, validating the coarse `MIN_DAY..=MAX_DAY` bound
    ///
    /// # Errors
    /// Returns `NextDateError::DayOutOfRange` otherwise.
    pub fn new(value: i32) -> Result<Self, NextDateError> {
        u8::try_from(value)
            .ok()
            .filter(|day| *day <= MAX_DAY)
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(NextDateError::DayOutOfRange { day: value })
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    pub(crate) const fn following(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl TryFrom<u8> for Day {
    type Error = NextDateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i32::from(value))
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

// Helper functions

/// 400 takes priority over 100, which takes priority over 4.
pub(crate) const fn is_leap_year(year: u16) -> bool {
    if year % GREGORIAN_CYCLE == 0 {
        true
    } else if year % CENTURY_CYCLE == 0 {
        false
    } else {
        year % LEAP_YEAR_CYCLE == 0
    }
}

pub(crate) const fn days_in_month(year: Year, month: Month) -> u8 {
    if month.get() == FEBRUARY && year.is_leap() {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month.get() as usize]
    }
}
