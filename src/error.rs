//! Validation errors for the next_date crate.

use crate::prelude::*;

/// The date component a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DateField {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
}

/// Error returned when an input date is rejected.
///
/// Fields are checked in a fixed order (year, month, coarse day bound, then
/// the day bound of the specific month), so a date with several bad
/// components always reports the first one in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum NextDateError {
    /// Year outside `MIN_YEAR..=MAX_YEAR`.
    #[error("Year must be between {} and {}, got {year}", MIN_YEAR, MAX_YEAR)]
    YearOutOfRange { year: i32 },

    /// Month outside `1..=12`.
    #[error("Month must be between 1 and {}, got {month}", MAX_MONTH)]
    MonthOutOfRange { month: i32 },

    /// Day outside the coarse `1..=31` bound.
    #[error("Day must be between {} and {}, got {day}", MIN_DAY, MAX_DAY)]
    DayOutOfRange { day: i32 },

    /// Day past the end of the given month in the given year.
    #[error("Day {day} is invalid for month {month} in year {year} (max {max} days)")]
    InvalidDayForMonth { day: u8, month: u8, year: u16, max: u8 },
}

impl NextDateError {
    /// Returns which component of the date was rejected.
    ///
    /// Both day variants report [`DateField::Day`].
    pub const fn field(&self) -> DateField {
        match self {
            Self::YearOutOfRange { .. } => DateField::Year,
            Self::MonthOutOfRange { .. } => DateField::Month,
            Self::DayOutOfRange { .. } | Self::InvalidDayForMonth { .. } => DateField::Day,
        }
    }
}
