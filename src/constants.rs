//! Application constants for the BOM processor
//!
//! This module contains the fixed BOM CSV layout, missing-data markers and
//! default values used throughout the processor.

// =============================================================================
// BOM CSV Layout
// =============================================================================

/// Column names every BOM daily rainfall export must start with, in order
pub const EXPECTED_COLUMNS: [&str; 8] = [
    "Product code",
    "Bureau of Meteorology station number",
    "Year",
    "Month",
    "Day",
    "Rainfall amount (millimetres)",
    "Period over which rainfall was measured (days)",
    "Quality",
];

/// Minimum number of fields in the header and in every data row
pub const MIN_COLUMNS: usize = EXPECTED_COLUMNS.len();

/// Zero-based field positions within a data row
pub mod columns {
    pub const YEAR: usize = 2;
    pub const MONTH: usize = 3;
    pub const DAY: usize = 4;
    pub const RAINFALL: usize = 5;
}

/// Rainfall values that mark a day as present in the file but without data
pub const MISSING_VALUE_MARKERS: &[&str] = &["", "NA", "N/A", "-"];

/// Accepted range for the month field
pub const MONTH_RANGE: std::ops::RangeInclusive<u32> = 1..=12;

/// Accepted range for the day field, before calendar validation
pub const DAY_RANGE: std::ops::RangeInclusive<u32> = 1..=31;

/// UTF-8 byte order mark some spreadsheet exports prepend to the header
pub const UTF8_BOM: char = '\u{feff}';

// =============================================================================
// Output Defaults
// =============================================================================

/// Fractional digits used for every rendered decimal field
pub const DEFAULT_DECIMAL_PRECISION: usize = 12;

/// Largest precision accepted from configuration
pub const MAX_DECIMAL_PRECISION: usize = 17;

/// Date layout used in rendered documents and configuration
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Configuration Locations
// =============================================================================

/// Directory under the user config dir holding the processor's config file
pub const CONFIG_DIR_NAME: &str = "bom-processor";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default tracing filter target
pub const LOG_TARGET: &str = "bom_processor";
