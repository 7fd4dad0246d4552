//! Shared components for CLI commands
//!
//! Common types and helpers used by more than one command implementation.

use crate::app::services::pipeline::ConversionSummary;
use crate::cli::args::ConvertArgs;
use crate::config::Config;
use crate::constants::LOG_TARGET;
use crate::Result;
use chrono::NaiveDate;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Processing statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    /// Number of input files read
    pub files_processed: usize,
    /// Observations that survived parsing
    pub observations_processed: usize,
    /// Data rows dropped by the parser
    pub rows_skipped: usize,
    /// Year summaries in the report
    pub years_emitted: usize,
    /// Month summaries in the report
    pub months_emitted: usize,
    /// Bytes of JSON written
    pub bytes_written: u64,
    /// Total processing time
    pub processing_time: Duration,
}

impl ProcessingStats {
    /// Statistics for one converted file
    pub fn from_conversion(summary: &ConversionSummary, processing_time: Duration) -> Self {
        Self {
            files_processed: 1,
            observations_processed: summary.stats.observations_parsed,
            rows_skipped: summary.stats.rows_skipped,
            years_emitted: summary.years,
            months_emitted: summary.months,
            bytes_written: summary.bytes_written as u64,
            processing_time,
        }
    }

    /// Format a byte count in human-readable form
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the level derived from the CLI flags.
/// A second call is a no-op.
pub fn setup_logging(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();

    if installed.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}

/// Load configuration from the given file, the default location, or defaults
pub fn load_configuration(config_file: Option<&Path>) -> Result<Config> {
    match config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => debug!("No config file given, checking default location"),
    }
    Config::load(config_file)
}

/// Apply convert command overrides on top of a loaded configuration
///
/// `today` resolves `--exclude-future`.
pub fn apply_cli_overrides(config: Config, args: &ConvertArgs, today: NaiveDate) -> Result<Config> {
    let mut config = config;

    if let Some(precision) = args.precision {
        config = config.with_precision(precision);
    }
    if args.compact {
        config = config.with_pretty(false);
    }
    if let Some(cutoff) = args.exclusion_cutoff(today) {
        config = config.with_exclude_months_after(Some(cutoff));
    }

    config.validate()?;
    Ok(config)
}
