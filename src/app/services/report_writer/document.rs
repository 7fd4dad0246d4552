//! JSON document layout for rainfall reports
//!
//! Every leaf is a string so the rendered numbers keep the exact fixed-point
//! text they were written with. Field order follows struct declaration order
//! and is therefore stable.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

use crate::app::models::{MonthSummary, Report, YearSummary, month_name, month_number};
use crate::constants::DATE_FORMAT;
use crate::{Error, Result};

/// Root of the rendered document: `{"WeatherData": [...]}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WeatherDataDocument {
    #[serde(
        rename = "WeatherData",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub years: Vec<WeatherDataForYear>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WeatherDataForYear {
    pub year: String,
    pub first_recorded_date: String,
    pub last_recorded_date: String,
    pub total_rainfall: String,
    pub average_daily_rainfall: String,
    pub days_with_no_rainfall: String,
    pub days_with_rainfall: String,
    pub longest_days_raining: String,
    pub monthly_aggregates: MonthlyAggregates,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MonthlyAggregates {
    #[serde(
        rename = "WeatherDataForMonth",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub months: Vec<WeatherDataForMonth>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WeatherDataForMonth {
    pub month: String,
    pub first_recorded_date: String,
    pub last_recorded_date: String,
    pub total_rainfall: String,
    pub average_daily_rainfall: String,
    pub median_daily_rainfall: String,
    pub days_with_no_rainfall: String,
    pub days_with_rainfall: String,
}

impl WeatherDataDocument {
    /// Render a report with `precision` fractional digits on every decimal field
    pub fn from_report(report: &Report, precision: usize) -> Self {
        Self {
            years: report
                .years
                .iter()
                .map(|year| WeatherDataForYear::from_summary(year, precision))
                .collect(),
        }
    }

    /// Read the document back into a report
    pub fn to_report(&self) -> Result<Report> {
        let years = self
            .years
            .iter()
            .map(WeatherDataForYear::to_summary)
            .collect::<Result<Vec<_>>>()?;
        Ok(Report { years })
    }
}

impl WeatherDataForYear {
    fn from_summary(year: &YearSummary, precision: usize) -> Self {
        Self {
            year: year.year.to_string(),
            first_recorded_date: format_date(year.first_recorded_date),
            last_recorded_date: format_date(year.last_recorded_date),
            total_rainfall: format_decimal(year.total_rainfall, precision),
            average_daily_rainfall: format_decimal(year.average_daily_rainfall, precision),
            days_with_no_rainfall: year.days_with_no_rainfall.to_string(),
            days_with_rainfall: year.days_with_rainfall.to_string(),
            longest_days_raining: year.longest_days_raining.to_string(),
            monthly_aggregates: MonthlyAggregates {
                months: year
                    .months
                    .iter()
                    .map(|month| WeatherDataForMonth::from_summary(month, precision))
                    .collect(),
            },
        }
    }

    fn to_summary(&self) -> Result<YearSummary> {
        let context = format!("year '{}'", self.year);
        let months = self
            .monthly_aggregates
            .months
            .iter()
            .map(|month| month.to_summary(&context))
            .collect::<Result<Vec<_>>>()?;

        Ok(YearSummary {
            year: parse_field(&self.year, "Year", &context)?,
            first_recorded_date: parse_date(&self.first_recorded_date, "FirstRecordedDate", &context)?,
            last_recorded_date: parse_date(&self.last_recorded_date, "LastRecordedDate", &context)?,
            total_rainfall: parse_field(&self.total_rainfall, "TotalRainfall", &context)?,
            average_daily_rainfall: parse_field(
                &self.average_daily_rainfall,
                "AverageDailyRainfall",
                &context,
            )?,
            days_with_rainfall: parse_field(&self.days_with_rainfall, "DaysWithRainfall", &context)?,
            days_with_no_rainfall: parse_field(
                &self.days_with_no_rainfall,
                "DaysWithNoRainfall",
                &context,
            )?,
            longest_days_raining: parse_field(
                &self.longest_days_raining,
                "LongestDaysRaining",
                &context,
            )?,
            months,
        })
    }
}

impl WeatherDataForMonth {
    fn from_summary(month: &MonthSummary, precision: usize) -> Self {
        Self {
            month: month_name(month.month).to_string(),
            first_recorded_date: format_date(month.first_recorded_date),
            last_recorded_date: format_date(month.last_recorded_date),
            total_rainfall: format_decimal(month.total_rainfall, precision),
            average_daily_rainfall: format_decimal(month.average_daily_rainfall, precision),
            median_daily_rainfall: format_decimal(month.median_daily_rainfall, precision),
            days_with_no_rainfall: month.days_with_no_rainfall.to_string(),
            days_with_rainfall: month.days_with_rainfall.to_string(),
        }
    }

    fn to_summary(&self, year_context: &str) -> Result<MonthSummary> {
        let context = format!("{year_context}, month '{}'", self.month);
        let month = month_number(&self.month).ok_or_else(|| {
            Error::document_invalid(format!("{context}: unknown month name"))
        })?;

        Ok(MonthSummary {
            month,
            first_recorded_date: parse_date(&self.first_recorded_date, "FirstRecordedDate", &context)?,
            last_recorded_date: parse_date(&self.last_recorded_date, "LastRecordedDate", &context)?,
            total_rainfall: parse_field(&self.total_rainfall, "TotalRainfall", &context)?,
            average_daily_rainfall: parse_field(
                &self.average_daily_rainfall,
                "AverageDailyRainfall",
                &context,
            )?,
            median_daily_rainfall: parse_field(
                &self.median_daily_rainfall,
                "MedianDailyRainfall",
                &context,
            )?,
            days_with_rainfall: parse_field(&self.days_with_rainfall, "DaysWithRainfall", &context)?,
            days_with_no_rainfall: parse_field(
                &self.days_with_no_rainfall,
                "DaysWithNoRainfall",
                &context,
            )?,
        })
    }
}

/// Fixed-point rendering with exactly `precision` fractional digits
pub fn format_decimal(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn parse_date(value: &str, field: &str, context: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
        Error::document_invalid(format!("{context}: invalid {field} '{value}' ({e})"))
    })
}

fn parse_field<T: FromStr>(value: &str, field: &str, context: &str) -> Result<T> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| Error::document_invalid(format!("{context}: invalid {field} '{value}'")))
}

/// Accept `null` wherever a list is expected
fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
