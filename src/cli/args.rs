//! Command-line argument definitions for the BOM processor
//!
//! This module defines the CLI interface using the clap derive API.

use crate::constants::{DATE_FORMAT, MAX_DECIMAL_PRECISION};
use crate::{Error, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the BOM weather data processor
///
/// Converts Bureau of Meteorology daily rainfall CSV exports into yearly and
/// monthly rainfall statistics rendered as JSON.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "bom",
    version,
    about = "Convert BOM daily rainfall CSV data into yearly and monthly JSON statistics",
    long_about = "Processes Bureau of Meteorology daily rainfall CSV exports. Validates the \
                  header, drops malformed rows, and aggregates the remaining observations into \
                  per-year and per-month totals, averages, medians and rainy-day streaks."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert a BOM rainfall CSV file to JSON statistics
    Convert(ConvertArgs),
    /// Check a BOM rainfall CSV file without producing output
    Validate(ValidateArgs),
    /// Print version information
    Version,
}

/// Arguments for the convert command
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// Input BOM rainfall CSV file
    #[arg(short = 'i', long = "input", value_name = "FILE", help = "Input CSV file")]
    pub input: PathBuf,

    /// Output JSON file
    ///
    /// The document is written to stdout when omitted.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output JSON file (stdout if omitted)"
    )]
    pub output: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(short = 'c', long = "config", value_name = "FILE", help = "Configuration file")]
    pub config: Option<PathBuf>,

    /// Fractional digits for rainfall totals, averages and medians
    #[arg(
        long = "precision",
        value_name = "DIGITS",
        help = "Fractional digits on decimal fields (default 12)"
    )]
    pub precision: Option<usize>,

    /// Write single-line JSON instead of indented JSON
    #[arg(long = "compact", help = "Write compact single-line JSON")]
    pub compact: bool,

    /// Ignore observations in months after the month of this date
    #[arg(
        long = "exclude-after",
        value_name = "YYYY-MM-DD",
        value_parser = parse_cutoff_date,
        conflicts_with = "exclude_future",
        help = "Ignore observations in months after this date's month"
    )]
    pub exclude_after: Option<NaiveDate>,

    /// Ignore observations in months after the current month (UTC)
    #[arg(long = "exclude-future", help = "Ignore observations after the current month")]
    pub exclude_future: bool,

    /// Increase logging verbosity
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Input BOM rainfall CSV file
    #[arg(short = 'i', long = "input", value_name = "FILE", help = "Input CSV file")]
    pub input: PathBuf,

    /// List every skipped row with its reason
    #[arg(long = "detailed", help = "List every skipped row and why")]
    pub detailed: bool,

    /// Configuration file (TOML)
    #[arg(short = 'c', long = "config", value_name = "FILE", help = "Configuration file")]
    pub config: Option<PathBuf>,

    /// Increase logging verbosity
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

fn parse_cutoff_date(value: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|e| format!("expected a date as YYYY-MM-DD: {}", e))
}

/// Map the quiet flag and verbosity count to a tracing level
fn log_level(quiet: bool, verbose: u8) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl ConvertArgs {
    /// Validate the convert arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.is_file() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input.display()
            )));
        }

        if let Some(precision) = self.precision {
            if precision > MAX_DECIMAL_PRECISION {
                return Err(Error::configuration(format!(
                    "Precision must be between 0 and {}, got {}",
                    MAX_DECIMAL_PRECISION, precision
                )));
            }
        }

        if let Some(output) = &self.output {
            if output == &self.input {
                return Err(Error::configuration(
                    "Output file must differ from the input file",
                ));
            }
        }

        Ok(())
    }

    /// Cutoff date for month exclusion, resolving `--exclude-future` against `today`
    pub fn exclusion_cutoff(&self, today: NaiveDate) -> Option<NaiveDate> {
        if self.exclude_future {
            Some(today)
        } else {
            self.exclude_after
        }
    }

    /// Get the log level based on verbosity settings
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.quiet, self.verbose)
    }
}

impl ValidateArgs {
    /// Validate the validate command arguments
    pub fn validate(&self) -> Result<()> {
        if !self.input.is_file() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input.display()
            )));
        }
        Ok(())
    }

    /// Get the log level based on verbosity settings
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.quiet, self.verbose)
    }
}
