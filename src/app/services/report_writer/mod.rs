//! Report serialization
//!
//! Renders a [`Report`](crate::app::models::Report) as a `WeatherData` JSON
//! document and reads such documents back.
//!
//! - [`document`] - Serde wire types and conversions to and from the report model
//! - [`writer`] - Precision/format options and I/O

pub mod document;
pub mod writer;

#[cfg(test)]
pub mod tests;

pub use document::{
    MonthlyAggregates, WeatherDataDocument, WeatherDataForMonth, WeatherDataForYear,
    format_decimal,
};
pub use writer::ReportWriter;
