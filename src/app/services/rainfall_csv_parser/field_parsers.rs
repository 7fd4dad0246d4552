//! Field parsing utilities for BOM rainfall records
//!
//! Each helper returns a [`RowError`] describing why a row cannot be used.
//! Row errors never abort a parse; the parser records them and moves on.

use crate::constants::{DAY_RANGE, MISSING_VALUE_MARKERS, MONTH_RANGE};

/// Reasons a data row is skipped
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RowError {
    #[error("insufficient columns: expected at least {expected}, got {found}")]
    InsufficientColumns { expected: usize, found: usize },

    #[error("invalid year '{0}'")]
    InvalidYear(String),

    #[error("invalid month '{0}'")]
    InvalidMonth(String),

    #[error("month out of range: {0}")]
    MonthOutOfRange(i64),

    #[error("invalid day '{0}'")]
    InvalidDay(String),

    #[error("day out of range: {0}")]
    DayOutOfRange(i64),

    #[error("invalid rainfall '{0}': cannot parse as float")]
    InvalidRainfall(String),

    #[error("invalid date: {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// The CSV reader could not decode the record (e.g. invalid UTF-8)
    #[error("malformed record: {0}")]
    MalformedRecord(String),
}

/// Parse the year field
pub fn parse_year(value: &str) -> Result<i32, RowError> {
    let trimmed = value.trim();
    trimmed
        .parse::<i32>()
        .map_err(|_| RowError::InvalidYear(trimmed.to_string()))
}

/// Parse the month field and check it lies in 1..=12
pub fn parse_month(value: &str) -> Result<u32, RowError> {
    let trimmed = value.trim();
    let month = trimmed
        .parse::<i64>()
        .map_err(|_| RowError::InvalidMonth(trimmed.to_string()))?;
    checked_in_range(month, &MONTH_RANGE).ok_or(RowError::MonthOutOfRange(month))
}

/// Parse the day field and check it lies in 1..=31
///
/// Whether the day exists in its month is checked later, once the full date
/// is known.
pub fn parse_day(value: &str) -> Result<u32, RowError> {
    let trimmed = value.trim();
    let day = trimmed
        .parse::<i64>()
        .map_err(|_| RowError::InvalidDay(trimmed.to_string()))?;
    checked_in_range(day, &DAY_RANGE).ok_or(RowError::DayOutOfRange(day))
}

/// Parse a rainfall field into `(amount, has_data)`
///
/// Missing-data markers yield `(0.0, false)`. Any other value must parse as a
/// float and is accepted without range checks, except that a number too large
/// for `f64` is rejected rather than rounded to infinity.
pub fn parse_rainfall(value: &str) -> Result<(f64, bool), RowError> {
    let trimmed = value.trim();

    if is_missing_value(trimmed) {
        return Ok((0.0, false));
    }

    let rainfall = trimmed
        .parse::<f64>()
        .map_err(|_| RowError::InvalidRainfall(trimmed.to_string()))?;

    if rainfall.is_infinite() && !is_infinity_literal(trimmed) {
        return Err(RowError::InvalidRainfall(trimmed.to_string()));
    }

    Ok((rainfall, true))
}

/// Check if a field value is one of the missing-data markers
pub fn is_missing_value(value: &str) -> bool {
    MISSING_VALUE_MARKERS.contains(&value.trim())
}

/// `inf` or `infinity` in any case, optionally signed
fn is_infinity_literal(value: &str) -> bool {
    let unsigned = value.trim_start_matches(['+', '-']);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

fn checked_in_range(value: i64, range: &std::ops::RangeInclusive<u32>) -> Option<u32> {
    u32::try_from(value).ok().filter(|v| range.contains(v))
}
