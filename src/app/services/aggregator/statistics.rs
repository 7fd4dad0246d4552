//! Statistical building blocks for rainfall aggregation
//!
//! Running totals, rainy-day streaks and the median are kept separate from the
//! grouping logic so each can be tested on plain values.

use crate::app::models::Observation;

/// Running rainfall total with rainy / dry day counts
///
/// Observations without data are ignored entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RainfallTally {
    pub total: f64,
    pub days_with_rainfall: u32,
    pub days_with_no_rainfall: u32,
}

impl RainfallTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one observation; returns whether it took part in the tally
    pub fn add(&mut self, observation: &Observation) -> bool {
        if !observation.has_data {
            return false;
        }

        self.total += observation.rainfall;
        if observation.is_rainy() {
            self.days_with_rainfall += 1;
        } else {
            self.days_with_no_rainfall += 1;
        }
        true
    }

    /// Days that carried data
    pub fn days(&self) -> u32 {
        self.days_with_rainfall + self.days_with_no_rainfall
    }

    /// Mean daily rainfall over days with data, 0.0 when there are none
    pub fn average(&self) -> f64 {
        average(self.total, self.days())
    }
}

/// Tracks the longest run of consecutive rainy observations
///
/// Feed observations in date order. A dry day ends the current run; a day
/// without data neither ends nor extends it.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreakTracker {
    current: u32,
    longest: u32,
    previous_rainy: bool,
}

impl StreakTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, observation: &Observation) {
        if !observation.has_data {
            return;
        }

        if observation.is_rainy() {
            self.current = if self.previous_rainy {
                self.current + 1
            } else {
                1
            };
            self.longest = self.longest.max(self.current);
            self.previous_rainy = true;
        } else {
            self.previous_rainy = false;
        }
    }

    pub fn longest(&self) -> u32 {
        self.longest
    }
}

/// `total / days`, defined as 0.0 when `days` is zero
pub fn average(total: f64, days: u32) -> f64 {
    if days == 0 {
        0.0
    } else {
        total / f64::from(days)
    }
}

/// Median of a set of values, 0.0 when empty
///
/// Even-sized sets use the mean of the two central values.
pub fn median(values: &mut [f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}
