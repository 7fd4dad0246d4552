//! BOM Processor Library
//!
//! A Rust library for turning Bureau of Meteorology (BOM) daily rainfall CSV
//! exports into yearly and monthly rainfall statistics.
//!
//! This library provides tools for:
//! - Parsing BOM rainfall CSV files with strict header checks and per-row fault isolation
//! - Aggregating daily observations into ordered year/month summaries
//!   (totals, averages, medians, rainy-day streaks)
//! - Rendering summaries as a stable JSON document and reading them back
//! - A thin pipeline and CLI composing the three stages

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregator;
        pub mod pipeline;
        pub mod rainfall_csv_parser;
        pub mod report_writer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{MonthSummary, Observation, Report, YearSummary};
pub use app::services::rainfall_csv_parser::HeaderError;
pub use config::Config;

/// Result type alias for the BOM processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for BOM processing operations
///
/// Only header problems and I/O failures abort a run. Malformed data rows are
/// dropped by the parser and never surface here.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader failed in a way that cannot be isolated to a single row
    #[error("CSV reading error at line {line}: {message}")]
    CsvReading {
        line: u64,
        message: String,
        #[source]
        source: csv::Error,
    },

    /// Header row missing or not the expected BOM column set
    #[error("Invalid CSV header: {0}")]
    HeaderInvalid(#[from] HeaderError),

    /// JSON rendering or decoding failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// A JSON document that does not describe a valid report
    #[error("Invalid report document: {message}")]
    DocumentInvalid { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV reading error with the line it occurred on
    pub fn csv_reading(line: u64, message: impl Into<String>, source: csv::Error) -> Self {
        Self::CsvReading {
            line,
            message: message.into(),
            source,
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create an invalid document error
    pub fn document_invalid(message: impl Into<String>) -> Self {
        Self::DocumentInvalid {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True for failures caused by the input's header row
    pub fn is_header_error(&self) -> bool {
        matches!(self, Self::HeaderInvalid(_))
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}
