//! Rainfall aggregation engine
//!
//! This module groups parsed observations by year and month and computes the
//! report statistics:
//!
//! - [`aggregator`] - Grouping, ordering and the future-month cutoff policy
//! - [`statistics`] - Totals, averages, medians and rainy-day streaks
//!
//! Observations without data contribute to no total, count or streak. A year
//! is emitted whenever it has at least one observation; a month only when it
//! has at least one observation with data.

pub mod aggregator;
pub mod statistics;

#[cfg(test)]
pub mod tests;

pub use aggregator::{AggregationOptions, RainfallAggregator};
pub use statistics::{RainfallTally, StreakTracker};
