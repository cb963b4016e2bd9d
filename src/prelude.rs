//! Crate-internal prelude.
//!
//! Brings the `derive_more` display derive and the calendar bounds into scope
//! for the modules that build and format dates.

pub use crate::consts::{DAYS_IN_MONTH, DECEMBER, MAX_DAY, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR};
pub use derive_more::Display;
