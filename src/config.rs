//! Configuration management and validation.
//!
//! Configuration is layered: built-in defaults, then an optional TOML file,
//! then command-line overrides applied by the CLI.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::app::services::aggregator::AggregationOptions;
use crate::app::services::report_writer::ReportWriter;
use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_DECIMAL_PRECISION, MAX_DECIMAL_PRECISION,
};
use crate::{Error, Result};

/// Top-level processor configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Aggregation policy
    pub aggregation: AggregationConfig,

    /// Rendering of the output document
    pub output: OutputConfig,
}

/// Aggregation settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Ignore observations in months after the month of this date
    ///
    /// Unset by default: every observation is aggregated.
    pub exclude_months_after: Option<NaiveDate>,
}

/// Output document settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Fractional digits on every rendered decimal field
    pub precision: usize,

    /// Indent the JSON document
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_DECIMAL_PRECISION,
            pretty: true,
        }
    }
}

impl Config {
    /// Default config file location: `<config dir>/bom-processor/config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))
    }

    /// Load configuration from an explicit file, the default location, or defaults
    ///
    /// An explicit path must exist. The default location is used only when present.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Ok(path) if path.exists() => Self::from_file(&path)?,
                _ => {
                    debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading config file: {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Configuration { message } => Error::configuration(format!(
                "{}: {}",
                path.display(),
                message
            )),
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::configuration(e.to_string()))
    }

    /// Check settings for consistency
    pub fn validate(&self) -> Result<()> {
        if self.output.precision > MAX_DECIMAL_PRECISION {
            return Err(Error::configuration(format!(
                "Output precision {} exceeds maximum of {}",
                self.output.precision, MAX_DECIMAL_PRECISION
            )));
        }
        Ok(())
    }

    /// Aggregation options derived from this configuration
    pub fn aggregation_options(&self) -> AggregationOptions {
        AggregationOptions {
            exclude_months_after: self.aggregation.exclude_months_after,
        }
    }

    /// Report writer derived from this configuration
    pub fn report_writer(&self) -> ReportWriter {
        ReportWriter::new(self.output.precision, self.output.pretty)
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.output.precision = precision;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.output.pretty = pretty;
        self
    }

    pub fn with_exclude_months_after(mut self, cutoff: Option<NaiveDate>) -> Self {
        self.aggregation.exclude_months_after = cutoff;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.output.precision, 12);
        assert!(config.output.pretty);
        assert_eq!(config.aggregation.exclude_months_after, None);
        assert!(config.validate().is_ok());
        assert_eq!(config.aggregation_options(), AggregationOptions::default());
    }

    #[test]
    fn test_parse_toml() {
        let config = Config::from_toml_str(
            r#"
            [aggregation]
            exclude_months_after = "2024-06-30"

            [output]
            precision = 1
            pretty = false
            "#,
        )
        .unwrap();

        assert_eq!(
            config.aggregation.exclude_months_after,
            NaiveDate::from_ymd_opt(2024, 6, 30)
        );
        assert_eq!(config.output.precision, 1);
        assert!(!config.output.pretty);

        let writer = config.report_writer();
        assert_eq!(writer.precision(), 1);
        assert!(!writer.is_pretty());
    }

    #[test]
    fn test_parse_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str("[output]\nprecision = 3\n").unwrap();

        assert_eq!(config.output.precision, 3);
        assert!(config.output.pretty);
        assert_eq!(config.aggregation, AggregationConfig::default());

        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = Config::from_toml_str("[output]\nprecision = \"many\"\n").unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn test_validate_precision() {
        let config = Config::default().with_precision(18);
        assert!(config.validate().is_err());

        let config = Config::default().with_precision(17);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nprecision = 2").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.output.precision, 2);
    }

    #[test]
    fn test_load_invalid_file_reports_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nprecision = 99").unwrap();

        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("precision"));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/nonexistent/bom/config.toml"))).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_builder_overrides() {
        let cutoff = NaiveDate::from_ymd_opt(2020, 1, 31);
        let config = Config::default()
            .with_precision(4)
            .with_pretty(false)
            .with_exclude_months_after(cutoff);

        assert_eq!(config.output.precision, 4);
        assert!(!config.output.pretty);
        assert_eq!(config.aggregation_options().exclude_months_after, cutoff);
    }
}
