//! Parse, aggregate and render in one pass
//!
//! [`RainfallPipeline`] composes the CSV parser, the aggregator and the report
//! writer. Each run owns its data, so one pipeline can be reused across inputs.

use std::io::{Read, Write};
use tracing::{info, warn};

use crate::app::models::Report;
use crate::app::services::aggregator::RainfallAggregator;
use crate::app::services::rainfall_csv_parser::{HeaderError, ParseStats, RainfallCsvParser};
use crate::app::services::report_writer::ReportWriter;
use crate::config::Config;
use crate::{Error, Result};

/// Output of a parse + aggregate run
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub report: Report,
    pub stats: ParseStats,
}

/// Summary of a conversion written to an output stream
#[derive(Debug, Clone)]
pub struct ConversionSummary {
    pub stats: ParseStats,
    pub years: usize,
    pub months: usize,
    pub bytes_written: usize,
}

/// Result of validation-only mode
///
/// A rejected header is reported here rather than as an error so callers can
/// print a verdict. I/O failures are still returned as errors.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub header_error: Option<HeaderError>,
    pub stats: ParseStats,
    pub years: usize,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.header_error.is_none()
    }
}

/// Parser, aggregator and writer wired together
#[derive(Debug, Clone, Default)]
pub struct RainfallPipeline {
    parser: RainfallCsvParser,
    aggregator: RainfallAggregator,
    writer: ReportWriter,
}

impl RainfallPipeline {
    pub fn new(aggregator: RainfallAggregator, writer: ReportWriter) -> Self {
        Self {
            parser: RainfallCsvParser::new(),
            aggregator,
            writer,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            RainfallAggregator::with_options(config.aggregation_options()),
            config.report_writer(),
        )
    }

    /// Parse and aggregate without rendering
    pub fn run<R: Read>(&self, input: R) -> Result<PipelineOutput> {
        let parsed = self.parser.parse_reader(input)?;
        let report = self.aggregator.aggregate(&parsed.observations);

        Ok(PipelineOutput {
            report,
            stats: parsed.stats,
        })
    }

    /// Parse, aggregate and write the JSON document to `output`
    pub fn convert<R: Read, W: Write>(&self, input: R, output: W) -> Result<ConversionSummary> {
        let PipelineOutput { report, stats } = self.run(input)?;

        if !stats.is_clean() {
            warn!("{} rows skipped during parsing", stats.rows_skipped);
        }

        let bytes_written = self.writer.write(&report, output)?;
        let months = report.years.iter().map(|y| y.months.len()).sum();
        info!(
            "Converted {} observations into {} years, {} months",
            stats.observations_parsed,
            report.years.len(),
            months
        );

        Ok(ConversionSummary {
            years: report.years.len(),
            months,
            stats,
            bytes_written,
        })
    }

    /// Check the header and rows of an input without producing output
    pub fn validate<R: Read>(&self, input: R) -> Result<ValidationReport> {
        match self.run(input) {
            Ok(output) => Ok(ValidationReport {
                header_error: None,
                years: output.report.years.len(),
                stats: output.stats,
            }),
            Err(Error::HeaderInvalid(header_error)) => {
                warn!("Header rejected: {}", header_error);
                Ok(ValidationReport {
                    header_error: Some(header_error),
                    stats: ParseStats::new(),
                    years: 0,
                })
            }
            Err(e) => Err(e),
        }
    }
}
