//! Tests for totals, averages, medians and streak tracking

use super::*;
use crate::app::services::aggregator::statistics::{
    RainfallTally, StreakTracker, average, median,
};

#[test]
fn test_median_odd_count() {
    let mut values = vec![15.0, 5.0, 10.0];
    assert_eq!(median(&mut values), 10.0);
}

#[test]
fn test_median_even_count() {
    let mut values = vec![20.0, 5.0, 15.0, 10.0];
    assert_eq!(median(&mut values), 12.5);
}

#[test]
fn test_median_single_and_empty() {
    let mut single = [3.3];
    let mut empty: [f64; 0] = [];

    assert_eq!(median(&mut single), 3.3);
    assert_eq!(median(&mut empty), 0.0);
}

#[test]
fn test_average() {
    assert_eq!(average(10.0, 4), 2.5);
    assert_eq!(average(10.0, 0), 0.0);
    assert_eq!(average(0.0, 0), 0.0);
}

#[test]
fn test_tally_ignores_absent_days() {
    let mut tally = RainfallTally::new();

    assert!(tally.add(&obs(2020, 1, 1, 4.0)));
    assert!(tally.add(&obs(2020, 1, 2, 0.0)));
    assert!(!tally.add(&absent(2020, 1, 3)));

    assert_eq!(tally.total, 4.0);
    assert_eq!(tally.days_with_rainfall, 1);
    assert_eq!(tally.days_with_no_rainfall, 1);
    assert_eq!(tally.days(), 2);
    assert_eq!(tally.average(), 2.0);
}

#[test]
fn test_tally_negative_amount_is_dry_day() {
    let mut tally = RainfallTally::new();
    tally.add(&obs(2020, 1, 1, -2.0));

    assert_eq!(tally.total, -2.0);
    assert_eq!(tally.days_with_no_rainfall, 1);
    assert_eq!(tally.days_with_rainfall, 0);
}

fn longest_streak(observations: &[crate::app::models::Observation]) -> u32 {
    let mut tracker = StreakTracker::new();
    for o in observations {
        tracker.observe(o);
    }
    tracker.longest()
}

#[test]
fn test_streak_rain_rain_rain_dry_rain_rain() {
    let days = january_days(2020, &[1.0, 2.0, 3.0, 0.0, 4.0, 5.0]);
    assert_eq!(longest_streak(&days), 3);
}

#[test]
fn test_streak_absent_day_is_neutral() {
    let days = vec![obs(2020, 1, 1, 1.0), absent(2020, 1, 2), obs(2020, 1, 3, 1.0)];
    assert_eq!(longest_streak(&days), 2);
}

#[test]
fn test_streak_absent_after_dry_does_not_restart() {
    // dry, absent, rain, rain: the run starts at the first rainy day
    let days = vec![
        obs(2020, 1, 1, 0.0),
        absent(2020, 1, 2),
        obs(2020, 1, 3, 1.0),
        obs(2020, 1, 4, 1.0),
    ];
    assert_eq!(longest_streak(&days), 2);
}

#[test]
fn test_streak_no_rain() {
    let days = january_days(2020, &[0.0, 0.0, 0.0]);
    assert_eq!(longest_streak(&days), 0);
    assert_eq!(longest_streak(&[]), 0);
}
