//! Validate command implementation
//!
//! Checks the header and every data row of a CSV file without writing output.

use super::shared::{ProcessingStats, load_configuration, setup_logging};
use crate::app::services::pipeline::{RainfallPipeline, ValidationReport};
use crate::cli::args::ValidateArgs;
use crate::{Error, Result};
use colored::*;
use std::fs::File;
use std::io::BufReader;
use std::time::Instant;
use tracing::{debug, info};

/// Validate command runner
///
/// A rejected header is returned as an error after printing the verdict, so
/// the process exits non-zero. Skipped rows do not fail validation.
pub fn run_validate(args: ValidateArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level());
    debug!("Validate arguments: {:?}", args);

    args.validate()?;
    let config = load_configuration(args.config.as_deref())?;

    let input = File::open(&args.input).map_err(|e| {
        Error::io(format!("Failed to open input file {}", args.input.display()), e)
    })?;

    info!("Validating {}", args.input.display());
    let report = RainfallPipeline::from_config(&config).validate(BufReader::new(input))?;

    if let Some(header_error) = &report.header_error {
        if !args.quiet {
            println!("{} CSV file is invalid", "✗".red().bold());
        }
        return Err(Error::HeaderInvalid(header_error.clone()));
    }

    if !args.quiet {
        print_report(&report, args.detailed);
    }

    Ok(ProcessingStats {
        files_processed: 1,
        observations_processed: report.stats.observations_parsed,
        rows_skipped: report.stats.rows_skipped,
        years_emitted: report.years,
        processing_time: start_time.elapsed(),
        ..ProcessingStats::default()
    })
}

fn print_report(report: &ValidationReport, detailed: bool) {
    println!("{} CSV file is valid", "✓".green().bold());
    println!("   • {}", report.stats.summary());
    println!("   • Years covered: {}", report.years);

    if detailed && !report.stats.skipped.is_empty() {
        println!();
        println!("{}", "Skipped rows:".yellow());
        for skipped in &report.stats.skipped {
            println!("   line {}: {}", skipped.line, skipped.reason);
        }
    }
}
