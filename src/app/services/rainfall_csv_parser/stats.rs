//! Parsing statistics and result structures for BOM CSV processing
//!
//! This module provides types for tracking how many rows were used, which rows
//! were dropped and why, and for handing parsed observations downstream.

use super::field_parsers::RowError;
use crate::app::models::Observation;

/// Parsing result with observations and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully parsed observations, in file order
    pub observations: Vec<Observation>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// A data row that was dropped, with the 1-based line it came from
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    pub line: u64,
    pub reason: RowError,
}

/// Simple parsing statistics
#[derive(Debug, Clone, PartialEq)]
pub struct ParseStats {
    /// Non-blank data rows encountered after the header
    pub total_rows: usize,

    /// Whitespace-only rows, ignored without being counted as records
    pub blank_rows: usize,

    /// Number of observations successfully parsed
    pub observations_parsed: usize,

    /// Number of rows skipped due to errors
    pub rows_skipped: usize,

    /// Every skipped row and its reason
    pub skipped: Vec<SkippedRow>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_rows: 0,
            blank_rows: 0,
            observations_parsed: 0,
            rows_skipped: 0,
            skipped: Vec::new(),
        }
    }

    /// Record a dropped row
    pub fn record_skip(&mut self, line: u64, reason: RowError) {
        self.rows_skipped += 1;
        self.skipped.push(SkippedRow { line, reason });
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            100.0
        } else {
            (self.observations_parsed as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// True when no data row had to be dropped
    pub fn is_clean(&self) -> bool {
        self.rows_skipped == 0
    }

    /// One-line summary for logs and CLI output
    pub fn summary(&self) -> String {
        format!(
            "{} records parsed from {} rows ({:.1}% success) | skipped: {} | blank: {}",
            self.observations_parsed,
            self.total_rows,
            self.success_rate(),
            self.rows_skipped,
            self.blank_rows
        )
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
