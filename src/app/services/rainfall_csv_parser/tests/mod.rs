//! Test utilities for BOM CSV parser testing
//!
//! This module provides CSV fixtures and helper functions used across the
//! parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;

mod parser_tests;

/// Standard BOM header line
pub const HEADER: &str = "Product code,Bureau of Meteorology station number,Year,Month,Day,Rainfall amount (millimetres),Period over which rainfall was measured (days),Quality";

/// Build a data row for station 066062
pub fn row(year: &str, month: &str, day: &str, rainfall: &str) -> String {
    format!("IDCJAC0009,066062,{year},{month},{day},{rainfall},1,Y")
}

/// Join the standard header with the given data rows
pub fn csv_with_rows(rows: &[String]) -> String {
    let mut content = String::from(HEADER);
    for r in rows {
        content.push('\n');
        content.push_str(r);
    }
    content.push('\n');
    content
}

/// Helper to create a complete test BOM CSV content
pub fn create_test_bom_csv() -> String {
    csv_with_rows(&[
        row("2020", "1", "1", "5.2"),
        row("2020", "1", "2", "0.0"),
        row("2020", "1", "3", "12.5"),
    ])
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
