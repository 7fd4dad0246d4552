//! Year and month aggregation of daily rainfall observations

use chrono::{Datelike, NaiveDate};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::debug;

use super::statistics::{RainfallTally, StreakTracker, median};
use crate::app::models::{MonthSummary, Observation, Report, YearSummary};

/// Options controlling which observations take part in aggregation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregationOptions {
    /// Ignore observations in any month later than the month of this date
    ///
    /// Affected months are not emitted and contribute nothing to their
    /// year's statistics. The year's first/last recorded dates still cover
    /// every observation.
    pub exclude_months_after: Option<NaiveDate>,
}

impl AggregationOptions {
    pub fn with_exclude_months_after(mut self, cutoff: NaiveDate) -> Self {
        self.exclude_months_after = Some(cutoff);
        self
    }

    /// True when `(year, month)` falls after the configured cutoff month
    pub fn is_excluded(&self, year: i32, month: u32) -> bool {
        match self.exclude_months_after {
            Some(cutoff) => (year, month) > (cutoff.year(), cutoff.month()),
            None => false,
        }
    }
}

/// Groups observations by year and month and computes rainfall statistics
///
/// Aggregation is a pure function of the observation set: input order does
/// not affect the result, and years and months are emitted in ascending order.
#[derive(Debug, Clone, Default)]
pub struct RainfallAggregator {
    options: AggregationOptions,
}

impl RainfallAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: AggregationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AggregationOptions {
        &self.options
    }

    /// Aggregate observations into a report
    pub fn aggregate(&self, observations: &[Observation]) -> Report {
        let mut by_year: BTreeMap<i32, Vec<Observation>> = BTreeMap::new();
        for observation in observations {
            by_year
                .entry(observation.year())
                .or_default()
                .push(*observation);
        }

        let years = by_year
            .into_iter()
            .filter_map(|(year, mut records)| self.aggregate_year(year, &mut records))
            .collect();

        Report { years }
    }

    fn aggregate_year(&self, year: i32, records: &mut [Observation]) -> Option<YearSummary> {
        records.sort_by(compare_observations);
        let first_recorded_date = records.first()?.date;
        let last_recorded_date = records.last()?.date;

        let mut tally = RainfallTally::new();
        let mut streak = StreakTracker::new();
        let mut by_month: BTreeMap<u32, Vec<Observation>> = BTreeMap::new();

        for record in records.iter() {
            if !record.has_data || self.options.is_excluded(year, record.month()) {
                continue;
            }
            tally.add(record);
            streak.observe(record);
            by_month.entry(record.month()).or_default().push(*record);
        }

        let months: Vec<MonthSummary> = by_month
            .into_iter()
            .filter_map(|(month, records)| aggregate_month(month, &records))
            .collect();

        debug!(
            "Year {}: {} days with data, total {:.1}mm, {} months",
            year,
            tally.days(),
            tally.total,
            months.len()
        );

        Some(YearSummary {
            year,
            first_recorded_date,
            last_recorded_date,
            total_rainfall: tally.total,
            average_daily_rainfall: tally.average(),
            days_with_rainfall: tally.days_with_rainfall,
            days_with_no_rainfall: tally.days_with_no_rainfall,
            longest_days_raining: streak.longest(),
            months,
        })
    }
}

/// Summarise one month from its date-ordered, data-present observations
fn aggregate_month(month: u32, records: &[Observation]) -> Option<MonthSummary> {
    let first_recorded_date = records.first()?.date;
    let last_recorded_date = records.last()?.date;

    let mut tally = RainfallTally::new();
    let mut rainy_amounts = Vec::new();
    for record in records {
        tally.add(record);
        if record.is_rainy() {
            rainy_amounts.push(record.rainfall);
        }
    }

    Some(MonthSummary {
        month,
        first_recorded_date,
        last_recorded_date,
        total_rainfall: tally.total,
        average_daily_rainfall: tally.average(),
        median_daily_rainfall: median(&mut rainy_amounts),
        days_with_rainfall: tally.days_with_rainfall,
        days_with_no_rainfall: tally.days_with_no_rainfall,
    })
}

/// Total order over observations: date, then data presence, then amount
///
/// Sorting by the full key keeps duplicate-date inputs deterministic, so any
/// permutation of the same observations aggregates identically.
fn compare_observations(a: &Observation, b: &Observation) -> Ordering {
    a.date
        .cmp(&b.date)
        .then(a.has_data.cmp(&b.has_data))
        .then(a.rainfall.total_cmp(&b.rainfall))
}
