//! Rendering reports to JSON and reading them back

use std::io::{Read, Write};
use tracing::debug;

use super::document::WeatherDataDocument;
use crate::app::models::Report;
use crate::constants::DEFAULT_DECIMAL_PRECISION;
use crate::{Error, Result};

/// Serializes reports as `WeatherData` JSON documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWriter {
    precision: usize,
    pretty: bool,
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self {
            precision: DEFAULT_DECIMAL_PRECISION,
            pretty: true,
        }
    }
}

impl ReportWriter {
    pub fn new(precision: usize, pretty: bool) -> Self {
        Self { precision, pretty }
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }

    /// Render a report as a JSON string
    pub fn render(&self, report: &Report) -> Result<String> {
        let document = WeatherDataDocument::from_report(report, self.precision);
        let rendered = if self.pretty {
            serde_json::to_string_pretty(&document)
        } else {
            serde_json::to_string(&document)
        };

        rendered.map_err(|e| {
            Error::serialization(
                format!(
                    "failed to convert weather data to JSON (years: {})",
                    report.years.len()
                ),
                e,
            )
        })
    }

    /// Render a report into a writer, followed by a newline
    pub fn write<W: Write>(&self, report: &Report, mut writer: W) -> Result<usize> {
        let rendered = self.render(report)?;
        writer
            .write_all(rendered.as_bytes())
            .and_then(|_| writer.write_all(b"\n"))
            .and_then(|_| writer.flush())
            .map_err(|e| Error::io("Failed to write output", e))?;

        debug!("Wrote {} bytes of JSON", rendered.len() + 1);
        Ok(rendered.len() + 1)
    }

    /// Read a rendered document back into a report
    pub fn read_report(&self, json: &str) -> Result<Report> {
        let document: WeatherDataDocument = serde_json::from_str(json)
            .map_err(|e| Error::serialization("failed to decode weather data JSON", e))?;
        document.to_report()
    }

    /// Read a rendered document from a reader
    pub fn read_from<R: Read>(&self, reader: R) -> Result<Report> {
        let document: WeatherDataDocument = serde_json::from_reader(reader)
            .map_err(|e| Error::serialization("failed to decode weather data JSON", e))?;
        document.to_report()
    }
}
