//! Data models for BOM rainfall processing
//!
//! This module contains the daily observation record produced by the parser and
//! the year/month summary tree produced by the aggregator.

use chrono::{Datelike, Month, NaiveDate};

// =============================================================================
// Daily Observation
// =============================================================================

/// One validated daily rainfall record
///
/// When `has_data` is false the day carried a missing-data marker: `rainfall`
/// is always 0.0 and the day takes no part in any statistic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Calendar date of the observation
    pub date: NaiveDate,

    /// Rainfall in millimetres, as recorded (no range checks)
    pub rainfall: f64,

    /// Whether the source row carried a rainfall value
    pub has_data: bool,
}

impl Observation {
    /// Create an observation with a recorded rainfall amount
    pub fn new(date: NaiveDate, rainfall: f64) -> Self {
        Self {
            date,
            rainfall,
            has_data: true,
        }
    }

    /// Create an observation for a day whose rainfall is missing
    pub fn missing(date: NaiveDate) -> Self {
        Self {
            date,
            rainfall: 0.0,
            has_data: false,
        }
    }

    /// Rainy means data is present and the amount is strictly positive
    pub fn is_rainy(&self) -> bool {
        self.has_data && self.rainfall > 0.0
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }
}

// =============================================================================
// Summaries
// =============================================================================

/// Statistics for one calendar month of one year
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSummary {
    /// Month number, 1 = January
    pub month: u32,
    pub first_recorded_date: NaiveDate,
    pub last_recorded_date: NaiveDate,
    pub total_rainfall: f64,
    pub average_daily_rainfall: f64,
    /// Median over rainy days only; 0.0 when the month had none
    pub median_daily_rainfall: f64,
    pub days_with_rainfall: u32,
    pub days_with_no_rainfall: u32,
}

impl MonthSummary {
    /// Full English month name, e.g. "January"
    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }
}

/// Statistics for one calendar year, with its months in ascending order
#[derive(Debug, Clone, PartialEq)]
pub struct YearSummary {
    pub year: i32,
    pub first_recorded_date: NaiveDate,
    pub last_recorded_date: NaiveDate,
    pub total_rainfall: f64,
    pub average_daily_rainfall: f64,
    pub days_with_rainfall: u32,
    pub days_with_no_rainfall: u32,
    /// Longest run of consecutive rainy observations
    pub longest_days_raining: u32,
    pub months: Vec<MonthSummary>,
}

impl YearSummary {
    /// Number of days that took part in the year's statistics
    pub fn days_with_data(&self) -> u32 {
        self.days_with_rainfall + self.days_with_no_rainfall
    }

    /// Look up the summary of a month by number
    pub fn month(&self, month: u32) -> Option<&MonthSummary> {
        self.months.iter().find(|m| m.month == month)
    }
}

/// Complete aggregation result, years in ascending order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    pub years: Vec<YearSummary>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Look up the summary of a year
    pub fn year(&self, year: i32) -> Option<&YearSummary> {
        self.years.iter().find(|y| y.year == year)
    }
}

/// Full English name for a month number; out-of-range numbers yield "Unknown"
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("Unknown")
}

/// Month number for a full or abbreviated English month name
pub fn month_number(name: &str) -> Option<u32> {
    name.trim()
        .parse::<Month>()
        .ok()
        .map(|m| m.number_from_month())
}
