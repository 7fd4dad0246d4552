//! Tests for the main BOM CSV parser functionality

use super::*;
use crate::Error;
use crate::app::services::rainfall_csv_parser::{HeaderError, RainfallCsvParser, RowError};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_parse_valid_data() {
    let result = RainfallCsvParser::new()
        .parse_str(&create_test_bom_csv())
        .unwrap();

    assert_eq!(result.observations.len(), 3);
    assert_eq!(result.stats.total_rows, 3);
    assert_eq!(result.stats.observations_parsed, 3);
    assert!(result.stats.is_clean());

    let first = &result.observations[0];
    assert_eq!(first.date, date(2020, 1, 1));
    assert_eq!(first.rainfall, 5.2);
    assert!(first.has_data);

    // File order is preserved
    assert_eq!(result.observations[1].date, date(2020, 1, 2));
    assert_eq!(result.observations[2].rainfall, 12.5);
}

#[test]
fn test_parse_missing_data_markers() {
    let content = csv_with_rows(&[
        row("2020", "1", "1", ""),
        row("2020", "1", "2", "NA"),
        row("2020", "1", "3", "N/A"),
        row("2020", "1", "4", "-"),
        row("2020", "1", "5", "3.0"),
    ]);

    let result = RainfallCsvParser::new().parse_str(&content).unwrap();

    assert_eq!(result.observations.len(), 5);
    assert!(result.observations[..4].iter().all(|o| !o.has_data));
    assert!(result.observations[..4].iter().all(|o| o.rainfall == 0.0));
    assert!(result.observations[4].has_data);
}

#[test]
fn test_parse_invalid_header_aborts() {
    let content = "Invalid,Header\ninvalid,data\n";

    let err = RainfallCsvParser::new().parse_str(content).unwrap_err();

    assert!(err.is_header_error());
    assert!(matches!(
        err,
        Error::HeaderInvalid(HeaderError::TooFewColumns { found: 2, .. })
    ));
}

#[test]
fn test_parse_wrong_column_name_produces_no_records() {
    let content = format!(
        "{}\n{}\n",
        HEADER.replace("Rainfall amount (millimetres)", "Rain"),
        row("2020", "1", "1", "5.2")
    );

    let err = RainfallCsvParser::new().parse_str(&content).unwrap_err();

    match err {
        Error::HeaderInvalid(HeaderError::UnexpectedColumn {
            position, expected, ..
        }) => {
            assert_eq!(position, 6);
            assert_eq!(expected, "Rainfall amount (millimetres)");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_parse_empty_input() {
    let err = RainfallCsvParser::new().parse_str("").unwrap_err();
    assert!(matches!(err, Error::HeaderInvalid(HeaderError::Missing)));
}

#[test]
fn test_parse_header_only() {
    let result = RainfallCsvParser::new().parse_str(HEADER).unwrap();

    assert!(result.observations.is_empty());
    assert_eq!(result.stats.total_rows, 0);
    assert_eq!(result.stats.success_rate(), 100.0);
}

#[test]
fn test_parse_skips_invalid_rows() {
    let content = csv_with_rows(&[
        row("2020", "1", "1", "5.2"),
        row("20x0", "1", "2", "1.0"),
        row("2020", "13", "3", "1.0"),
        row("2020", "2", "30", "1.0"),
        row("2020", "1", "32", "1.0"),
        row("2020", "1", "4", "lots"),
        "IDCJAC0009,066062,2020,1,5".to_string(),
        row("2020", "1", "6", "2.5"),
    ]);

    let result = RainfallCsvParser::new().parse_str(&content).unwrap();

    assert_eq!(result.observations.len(), 2);
    assert_eq!(result.observations[0].date, date(2020, 1, 1));
    assert_eq!(result.observations[1].date, date(2020, 1, 6));

    let stats = &result.stats;
    assert_eq!(stats.total_rows, 8);
    assert_eq!(stats.rows_skipped, 6);
    assert_eq!(stats.observations_parsed, 2);

    let reasons: Vec<&RowError> = stats.skipped.iter().map(|s| &s.reason).collect();
    assert_eq!(reasons[0], &RowError::InvalidYear("20x0".to_string()));
    assert_eq!(reasons[1], &RowError::MonthOutOfRange(13));
    assert!(matches!(reasons[2], RowError::InvalidDate { day: 30, .. }));
    assert_eq!(reasons[3], &RowError::DayOutOfRange(32));
    assert_eq!(reasons[4], &RowError::InvalidRainfall("lots".to_string()));
    assert!(matches!(
        reasons[5],
        RowError::InsufficientColumns { found: 5, .. }
    ));
}

#[test]
fn test_skipped_rows_report_line_numbers() {
    let content = csv_with_rows(&[
        row("2020", "1", "1", "5.2"),
        row("2020", "1", "2", "bad"),
    ]);

    let result = RainfallCsvParser::new().parse_str(&content).unwrap();

    // Header is line 1
    assert_eq!(result.stats.skipped.len(), 1);
    assert_eq!(result.stats.skipped[0].line, 3);
}

#[test]
fn test_parse_blank_rows_ignored() {
    let content = format!(
        "{HEADER}\n{}\n,,,,,,,\n   ,  , ,,,,,\n\n{}\n\n\n",
        row("2020", "1", "1", "5.2"),
        row("2020", "1", "2", "0.0"),
    );

    let result = RainfallCsvParser::new().parse_str(&content).unwrap();

    assert_eq!(result.observations.len(), 2);
    assert_eq!(result.stats.blank_rows, 2);
    assert_eq!(result.stats.total_rows, 2);
    assert_eq!(result.stats.rows_skipped, 0);
}

#[test]
fn test_parse_quoted_fields_and_crlf() {
    let content = format!(
        "{HEADER}\r\n\"IDCJAC0009\",\"066062\",\"2020\",\"1\",\"1\",\"5.2\",\"1\",\"Y\"\r\n{}\r\n",
        row("2020", "1", "2", "1.0")
    );

    let result = RainfallCsvParser::new().parse_str(&content).unwrap();

    assert_eq!(result.observations.len(), 2);
    assert_eq!(result.observations[0].rainfall, 5.2);
}

#[test]
fn test_parse_overflowing_rainfall_row_is_skipped() {
    let content = csv_with_rows(&[
        row("2020", "1", "1", "1e400"),
        row("2020", "1", "2", "2.0"),
    ]);

    let result = RainfallCsvParser::new().parse_str(&content).unwrap();

    assert_eq!(result.observations.len(), 1);
    assert_eq!(result.observations[0].rainfall, 2.0);
    assert_eq!(result.stats.rows_skipped, 1);
    assert_eq!(result.stats.skipped[0].line, 2);
    assert_eq!(
        result.stats.skipped[0].reason,
        RowError::InvalidRainfall("1e400".to_string())
    );
}

#[test]
fn test_parse_invalid_utf8_header_is_header_error() {
    let mut bytes = b"Product code,Bureau of Meteorology station number,\xff\xfe".to_vec();
    bytes.extend_from_slice(b",Month,Day,Rainfall amount (millimetres),Period over which rainfall was measured (days),Quality\n");
    bytes.extend_from_slice(row("2020", "1", "1", "5.2").as_bytes());

    let err = RainfallCsvParser::new().parse_reader(&bytes[..]).unwrap_err();

    assert!(matches!(
        err,
        Error::HeaderInvalid(HeaderError::InvalidEncoding { position: 3 })
    ));
}

#[test]
fn test_parse_invalid_utf8_row_is_skipped() {
    let mut bytes = format!("{HEADER}\n{}\n", row("2020", "1", "1", "5.2")).into_bytes();
    bytes.extend_from_slice(b"IDCJAC0009,066062,2020,1,2,\xff\xfe,1,Y\n");
    bytes.extend_from_slice(row("2020", "1", "3", "1.0").as_bytes());

    let result = RainfallCsvParser::new().parse_reader(&bytes[..]).unwrap();

    assert_eq!(result.observations.len(), 2);
    assert_eq!(result.stats.rows_skipped, 1);
    assert!(matches!(
        result.stats.skipped[0].reason,
        RowError::MalformedRecord(_)
    ));
}

#[test]
fn test_parse_file() {
    let temp_file = create_temp_file(&create_test_bom_csv());

    let result = RainfallCsvParser::new()
        .parse_file(temp_file.path())
        .unwrap();

    assert_eq!(result.observations.len(), 3);
}

#[test]
fn test_parse_file_not_found() {
    let err = RainfallCsvParser::new()
        .parse_file(std::path::Path::new("nonexistent_file.csv"))
        .unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
}
