//! Test fixtures for report serialization

use crate::app::models::{MonthSummary, Report, YearSummary};
use chrono::NaiveDate;


pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// The three-day January 2020 report: 5.2, 0.0, 12.5
pub fn sample_report() -> Report {
    Report {
        years: vec![YearSummary {
            year: 2020,
            first_recorded_date: date(2020, 1, 1),
            last_recorded_date: date(2020, 1, 3),
            total_rainfall: 17.7,
            average_daily_rainfall: 5.9,
            days_with_rainfall: 2,
            days_with_no_rainfall: 1,
            longest_days_raining: 1,
            months: vec![MonthSummary {
                month: 1,
                first_recorded_date: date(2020, 1, 1),
                last_recorded_date: date(2020, 1, 3),
                total_rainfall: 17.7,
                average_daily_rainfall: 5.9,
                median_daily_rainfall: 8.85,
                days_with_rainfall: 2,
                days_with_no_rainfall: 1,
            }],
        }],
    }
}
