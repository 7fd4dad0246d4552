//! BOM CSV header validation
//!
//! The first row of a BOM export names its columns. Only the first eight
//! positions are checked; anything after them is carried along but ignored.

use csv::StringRecord;

use crate::constants::{EXPECTED_COLUMNS, MIN_COLUMNS, UTF8_BOM};

/// Reasons a header row is rejected
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    /// The input had no rows at all
    #[error("input contains no header row")]
    Missing,

    /// The header row is shorter than the fixed column set
    #[error("expected at least {expected} columns, got {found}")]
    TooFewColumns { expected: usize, found: usize },

    /// A header cell is not valid UTF-8 (`position` is 1-based)
    #[error("column {position} is not valid UTF-8")]
    InvalidEncoding { position: usize },

    /// A column name does not match the expected one (`position` is 1-based)
    #[error("expected column {position} to be '{expected}', got '{found}'")]
    UnexpectedColumn {
        position: usize,
        expected: &'static str,
        found: String,
    },
}

/// Validated header row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RainfallHeader {
    /// Column names as they appear in the file, trimmed
    pub columns: Vec<String>,
}

impl RainfallHeader {
    /// Validate a header record against the expected BOM column set
    pub fn parse(record: &StringRecord) -> Result<Self, HeaderError> {
        if record.len() < MIN_COLUMNS {
            return Err(HeaderError::TooFewColumns {
                expected: MIN_COLUMNS,
                found: record.len(),
            });
        }

        let columns: Vec<String> = record
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let name = if index == 0 {
                    name.trim_start_matches(UTF8_BOM)
                } else {
                    name
                };
                name.trim().to_string()
            })
            .collect();

        for (index, &expected) in EXPECTED_COLUMNS.iter().enumerate() {
            let found = &columns[index];
            if !column_name_matches(found, expected) {
                return Err(HeaderError::UnexpectedColumn {
                    position: index + 1,
                    expected,
                    found: found.clone(),
                });
            }
        }

        Ok(Self { columns })
    }

    /// Number of columns in the header, including unchecked trailing ones
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Case-insensitive comparison of a trimmed column name
fn column_name_matches(found: &str, expected: &str) -> bool {
    found.to_lowercase() == expected.to_lowercase()
}
