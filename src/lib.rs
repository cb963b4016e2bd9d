//! Computes the calendar date that follows a given Gregorian date.
//!
//! Input dates are validated against the `1812..=2100` year window before the
//! successor is computed:
//!
//! ```
//! assert_eq!(next_date::next_date(2, 28, 2024).unwrap(), "02/29/2024");
//! assert_eq!(next_date::next_date(12, 31, 2024).unwrap(), "01/01/2025");
//! assert!(next_date::next_date(12, 31, 1811).is_err());
//! ```

mod consts;
mod date;
mod error;
mod prelude;
mod types;

pub use consts::*;
pub use date::CalendarDate;
pub use error::{DateField, NextDateError};
pub use types::{Day, Month, Year};

/// Error returned when parsing a `MM/DD/YYYY` string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Empty date string")]
    EmptyInput,

    /// Wrong number of separators, or a part that is not an integer.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// The parts parsed but do not form a valid date.
    #[error(transparent)]
    Date(#[from] NextDateError),
}

/// Returns the date following `month/day/year`, formatted as `MM/DD/YYYY`.
///
/// The year must lie in `MIN_YEAR..=MAX_YEAR`, the month in `1..=12` and the
/// day within the given month. The ceiling only applies to the input:
/// `next_date(12, 31, 2100)` returns `"01/01/2101"`.
///
/// # Errors
/// Returns a `NextDateError` naming the first component that fails
/// validation, checked in the order year, month, day.
pub fn next_date(month: i32, day: i32, year: i32) -> Result<String, NextDateError> {
    CalendarDate::new(month, day, year).map(|date| date.next().to_string())
}
