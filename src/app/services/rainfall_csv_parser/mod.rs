//! BOM rainfall CSV parser
//!
//! This module turns a BOM daily rainfall export into validated
//! [`Observation`](crate::app::models::Observation) records. The header row is
//! checked strictly and a bad header fails the whole parse; every data row is
//! parsed independently and a bad row is dropped without affecting its
//! neighbours.
//!
//! ## Architecture
//!
//! - [`parser`] - Reader setup, header handling and the row loop
//! - [`header`] - Expected column validation
//! - [`record_parser`] - Conversion of one CSV record into an observation
//! - [`field_parsers`] - Date part and rainfall field parsing, row skip reasons
//! - [`stats`] - Parse statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use bom_processor::app::services::rainfall_csv_parser::RainfallCsvParser;
//!
//! # fn example() -> bom_processor::Result<()> {
//! let csv = "Product code,Bureau of Meteorology station number,Year,Month,Day,\
//! Rainfall amount (millimetres),Period over which rainfall was measured (days),Quality\n\
//! IDCJAC0009,066062,2020,1,1,5.2,1,Y\n";
//!
//! let result = RainfallCsvParser::new().parse_str(csv)?;
//! assert_eq!(result.observations.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod field_parsers;
pub mod header;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use field_parsers::RowError;
pub use header::{HeaderError, RainfallHeader};
pub use parser::RainfallCsvParser;
pub use stats::{ParseResult, ParseStats, SkippedRow};
