//! Individual CSV record parsing for BOM rainfall files

use chrono::{Datelike, NaiveDate};
use csv::StringRecord;

use super::field_parsers::{RowError, parse_day, parse_month, parse_rainfall, parse_year};
use crate::app::models::Observation;
use crate::constants::{MIN_COLUMNS, columns};

/// Parse a single data row into an observation
///
/// Fields are checked in column order (year, month, day, rainfall) and the
/// calendar date last, so the reported reason is the first problem found.
pub fn parse_observation_record(record: &StringRecord) -> Result<Observation, RowError> {
    if record.len() < MIN_COLUMNS {
        return Err(RowError::InsufficientColumns {
            expected: MIN_COLUMNS,
            found: record.len(),
        });
    }

    let year = parse_year(field(record, columns::YEAR))?;
    let month = parse_month(field(record, columns::MONTH))?;
    let day = parse_day(field(record, columns::DAY))?;
    let (rainfall, has_data) = parse_rainfall(field(record, columns::RAINFALL))?;

    let date = build_date(year, month, day)?;

    Ok(Observation {
        date,
        rainfall,
        has_data,
    })
}

/// Construct a calendar date and confirm it round-trips to the same parts
///
/// Rejects dates such as 2021-02-29 or 2020-04-31.
pub fn build_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, RowError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .filter(|date| date.year() == year && date.month() == month && date.day() == day)
        .ok_or(RowError::InvalidDate { year, month, day })
}

/// A row is blank when every cell is empty or whitespace
pub fn is_blank_record(record: &StringRecord) -> bool {
    record.iter().all(|cell| cell.trim().is_empty())
}

fn field(record: &StringRecord, index: usize) -> &str {
    record.get(index).unwrap_or_default()
}
