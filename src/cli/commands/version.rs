//! Version command implementation

use super::shared::ProcessingStats;
use crate::Result;

/// Version banner, e.g. "BOM Weather Data Processor v1.0.0"
pub fn version_string() -> String {
    format!("BOM Weather Data Processor v{}", env!("CARGO_PKG_VERSION"))
}

pub fn run_version() -> Result<ProcessingStats> {
    println!("{}", version_string());
    println!("Converts BOM daily rainfall CSV exports into yearly and monthly JSON statistics");
    Ok(ProcessingStats::default())
}
