//! Convert command implementation
//!
//! Runs the full parse, aggregate and render pipeline over one CSV file and
//! writes the JSON document to a file or stdout.

use super::shared::{ProcessingStats, apply_cli_overrides, load_configuration, setup_logging};
use crate::app::services::pipeline::RainfallPipeline;
use crate::cli::args::ConvertArgs;
use crate::{Error, Result};
use chrono::Utc;
use colored::*;
use std::fs::File;
use std::io::{BufReader, Write};
use std::time::Instant;
use tracing::{debug, info};

/// Convert command runner
pub fn run_convert(args: ConvertArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level());
    debug!("Convert arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(args.config.as_deref())?;
    let config = apply_cli_overrides(config, &args, Utc::now().date_naive())?;
    if let Some(cutoff) = config.aggregation.exclude_months_after {
        info!("Excluding months after {}", cutoff.format("%Y-%m"));
    }

    let input = File::open(&args.input).map_err(|e| {
        Error::io(format!("Failed to open input file {}", args.input.display()), e)
    })?;

    // A rejected input must not leave a partial output file
    let mut rendered = Vec::new();
    let summary =
        RainfallPipeline::from_config(&config).convert(BufReader::new(input), &mut rendered)?;

    let destination = match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered).map_err(|e| {
                Error::io(format!("Failed to write output file {}", path.display()), e)
            })?;
            path.display().to_string()
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(&rendered)
                .and_then(|_| stdout.flush())
                .map_err(|e| Error::io("Failed to write to stdout", e))?;
            "stdout".to_string()
        }
    };

    let stats = ProcessingStats::from_conversion(&summary, start_time.elapsed());

    if args.verbose > 0 {
        eprintln!(
            "{} Successfully converted {} to {}",
            "✓".green().bold(),
            args.input.display(),
            destination
        );
        print_summary(&stats);
    }

    Ok(stats)
}

/// Print conversion statistics to stderr
fn print_summary(stats: &ProcessingStats) {
    eprintln!("   • Observations: {}", stats.observations_processed);
    if stats.rows_skipped > 0 {
        eprintln!(
            "   • Rows skipped: {}",
            stats.rows_skipped.to_string().yellow()
        );
    }
    eprintln!(
        "   • Years: {} ({} months)",
        stats.years_emitted, stats.months_emitted
    );
    eprintln!(
        "   • Output size: {}",
        ProcessingStats::format_size(stats.bytes_written)
    );
    eprintln!("   • Time: {:.2?}", stats.processing_time);
}
