//! Core BOM CSV parser implementation
//!
//! This module owns the CSV reader, validates the header row and drives the
//! per-row parsing loop.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use super::field_parsers::RowError;
use super::header::{HeaderError, RainfallHeader};
use super::record_parser::{is_blank_record, parse_observation_record};
use super::stats::{ParseResult, ParseStats};
use crate::{Error, Result};

/// Parser for BOM daily rainfall CSV exports
///
/// The parser holds no state between calls; one instance can parse any number
/// of inputs.
#[derive(Debug, Clone, Default)]
pub struct RainfallCsvParser;

impl RainfallCsvParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a CSV file from disk
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing BOM CSV file: {}", file_path.display());

        let file = File::open(file_path).map_err(|e| {
            Error::io(
                format!("Failed to open CSV file {}", file_path.display()),
                e,
            )
        })?;

        self.parse_reader(file)
    }

    /// Parse CSV content held in memory
    pub fn parse_str(&self, content: &str) -> Result<ParseResult> {
        self.parse_reader(content.as_bytes())
    }

    /// Parse CSV rows from any reader
    ///
    /// Fails only when the header is missing or invalid, or when the underlying
    /// reader reports an I/O error. Rows that cannot be parsed are dropped and
    /// listed in the returned statistics.
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<ParseResult> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = csv_reader.records();

        let header_record = match records.next() {
            Some(Ok(record)) => record,
            Some(Err(e)) => {
                if let csv::ErrorKind::Utf8 { err, .. } = e.kind() {
                    return Err(HeaderError::InvalidEncoding {
                        position: err.field() + 1,
                    }
                    .into());
                }
                let line = error_line(&e);
                return Err(Error::csv_reading(line, "Failed to read CSV header", e));
            }
            None => return Err(HeaderError::Missing.into()),
        };

        let header = RainfallHeader::parse(&header_record)?;
        debug!("CSV header: {:?}", header.columns);

        let mut stats = ParseStats::new();
        let mut observations = Vec::new();

        for result in records {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    let line = error_line(&e);
                    if matches!(e.kind(), csv::ErrorKind::Io(_)) {
                        return Err(Error::csv_reading(line, "Failed to read CSV row", e));
                    }
                    stats.total_rows += 1;
                    let reason = RowError::MalformedRecord(e.to_string());
                    debug!("Skipping row {}: {}", line, reason);
                    stats.record_skip(line, reason);
                    continue;
                }
            };

            if is_blank_record(&record) {
                stats.blank_rows += 1;
                continue;
            }

            stats.total_rows += 1;
            let line = record.position().map(|p| p.line()).unwrap_or_default();

            match parse_observation_record(&record) {
                Ok(observation) => {
                    observations.push(observation);
                    stats.observations_parsed += 1;
                }
                Err(reason) => {
                    debug!("Skipping row {}: {}", line, reason);
                    stats.record_skip(line, reason);
                }
            }
        }

        info!("Parsed {} valid records", stats.observations_parsed);

        Ok(ParseResult {
            observations,
            stats,
        })
    }
}

fn error_line(error: &csv::Error) -> u64 {
    error.position().map(|p| p.line()).unwrap_or_default()
}
