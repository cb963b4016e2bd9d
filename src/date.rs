use std::cmp::Ordering;
use std::str::FromStr;

use crate::types::{Day, Month, Year, days_in_month};
use crate::{DATE_SEPARATOR, NextDateError, ParseError, prelude::*};

/// A validated Gregorian date in the `MIN_YEAR..=MAX_YEAR` window.
///
/// Displays (and serialises) as `MM/DD/YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:02}/{:02}/{:04}", "month.get()", "day.get()", "year.get()")]
pub struct CalendarDate {
    month: Month,
    day: Day,
    year: Year,
}

impl CalendarDate {
    /// Validates `month`, `day` and `year` and builds a date from them.
    ///
    /// Checks run in order: year range, month range, the coarse `1..=31` day
    /// bound, then the length of the given month in the given year.
    ///
    /// # Errors
    /// Returns the `NextDateError` of the first check that fails.
    pub fn new(month: i32, day: i32, year: i32) -> Result<Self, NextDateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day)?;

        let max = days_in_month(year, month);
        if day.get() > max {
            return Err(NextDateError::InvalidDayForMonth {
                day: day.get(),
                month: month.get(),
                year: year.get(),
                max,
            });
        }

        Ok(Self { month, day, year })
    }

    /// Returns the month (1..=12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of the month
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the year
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Number of days in this date's month
    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    pub const fn is_last_day_of_month(&self) -> bool {
        self.day.get() == self.days_in_month()
    }

    /// Returns the date immediately following this one.
    ///
    /// Rolls the day over into the next month, and December into January of
    /// the next year. The year is not checked against `MAX_YEAR` again, so
    /// `12/31/2100` advances to `01/01/2101`.
    pub const fn next(self) -> Self {
        if !self.is_last_day_of_month() {
            return Self {
                day: self.day.following(),
                ..self
            };
        }

        match self.month.following() {
            Some(month) => Self {
                month,
                day: Day::FIRST,
                year: self.year,
            },
            None => Self {
                month: Month::JANUARY,
                day: Day::FIRST,
                year: self.year.following(),
            },
        }
    }

    fn parse_part(part: &str) -> Result<i32, ParseError> {
        part.trim()
            .parse::<i32>()
            .map_err(|_| ParseError::InvalidFormat(part.trim().to_owned()))
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Parses `MM/DD/YYYY`. Leading zeros are optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [month, day, year] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected MM{DATE_SEPARATOR}DD{DATE_SEPARATOR}YYYY, found {} {DATE_SEPARATOR} separators",
                parts.len() - 1
            )));
        };

        let month = Self::parse_part(month)?;
        let day = Self::parse_part(day)?;
        let year = Self::parse_part(year)?;

        Ok(Self::new(month, day, year)?)
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
