//! Crate errors.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while loading configuration, building the feature
/// table, or writing it out.
#[derive(Error, Debug)]
pub enum FeatureError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV output error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON configuration error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A holiday rule names a month/day that cannot exist
    #[error("invalid holiday rule: month {month}, day {day}")]
    InvalidHolidayRule { month: u32, day: u32 },

    /// Easter could not be computed for the requested year
    #[error("easter is not defined for year {year}")]
    EasterUndefined { year: i32 },

    /// A break interval with start after end
    #[error("break interval starts after it ends: {start}..{end}")]
    InvalidInterval { start: NaiveDate, end: NaiveDate },

    /// A date string in the break table failed to parse
    #[error("invalid date '{text}' in break table")]
    UnparsableDate {
        text: String,
        source: chrono::ParseError,
    },

    /// The feature range is inverted
    #[error("feature range starts after it ends: {start}..{end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}
