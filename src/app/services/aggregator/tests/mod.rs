//! Test utilities for the aggregation engine

use crate::app::models::Observation;
use chrono::NaiveDate;

mod statistics_tests;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Observation with recorded rainfall
pub fn obs(y: i32, m: u32, d: u32, rainfall: f64) -> Observation {
    Observation::new(date(y, m, d), rainfall)
}

/// Observation with a missing-data marker
pub fn absent(y: i32, m: u32, d: u32) -> Observation {
    Observation::missing(date(y, m, d))
}

/// Consecutive January days starting on the 1st, one per amount
pub fn january_days(year: i32, amounts: &[f64]) -> Vec<Observation> {
    amounts
        .iter()
        .enumerate()
        .map(|(i, &amount)| obs(year, 1, i as u32 + 1, amount))
        .collect()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
