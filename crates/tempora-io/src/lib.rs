//! CSV serialization for series.
//!
//! One `timestamp,value` row per point, no header. Timestamps are
//! RFC 3339 by default; the `_with_format` variants accept a chrono
//! format string, and a round trip through the same format string
//! reproduces identical (timestamp, value) pairs.

use chrono::{DateTime, NaiveDateTime, Utc};
use log::debug;
use series_spi::{DataPoint, TimeSeries};
use thiserror::Error;

/// Errors that can occur reading or writing series CSV.
#[derive(Error, Debug)]
pub enum IoError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("expected exactly 2 columns per row, got {got}")]
    Row { got: usize },

    #[error("invalid timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),

    #[error("invalid value: {0}")]
    Value(#[from] std::num::ParseFloatError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("output is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type for series CSV operations
pub type Result<T> = std::result::Result<T, IoError>;

fn parse_with_format(input: &str, format: &str) -> Result<DateTime<Utc>> {
    // offset-carrying formats parse directly; offset-less formats are
    // taken as UTC
    if let Ok(dt) = DateTime::parse_from_str(input, format) {
        return Ok(dt.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(input, format)?;
    Ok(naive.and_utc())
}

fn read_csv<F>(input: &str, parse_timestamp: F) -> Result<TimeSeries>
where
    F: Fn(&str) -> Result<DateTime<Utc>>,
{
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(input.as_bytes());

    let mut ts = TimeSeries::empty();
    for record in reader.records() {
        let record = record?;
        if record.len() != 2 {
            return Err(IoError::Row { got: record.len() });
        }
        let timestamp = parse_timestamp(&record[0])?;
        let value: f64 = record[1].parse()?;
        ts.add_point(DataPoint { timestamp, value });
    }
    debug!("parsed {} csv rows", ts.len());
    Ok(ts)
}

fn write_csv<F>(ts: &TimeSeries, format_timestamp: F) -> Result<String>
where
    F: Fn(DateTime<Utc>) -> String,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    for dp in ts.as_slice() {
        // `{}` on f64 is the shortest representation that round-trips
        writer.write_record([format_timestamp(dp.timestamp), format!("{}", dp.value)])?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Parse `timestamp,value` rows with RFC 3339 timestamps.
pub fn from_csv_str(input: &str) -> Result<TimeSeries> {
    read_csv(input, |s| {
        Ok(DateTime::parse_from_rfc3339(s)?.with_timezone(&Utc))
    })
}

/// Parse `timestamp,value` rows with a custom chrono timestamp format.
pub fn from_csv_str_with_format(input: &str, format: &str) -> Result<TimeSeries> {
    read_csv(input, |s| parse_with_format(s, format))
}

/// Serialize a series as `timestamp,value` rows with RFC 3339
/// timestamps.
pub fn to_csv_string(ts: &TimeSeries) -> Result<String> {
    write_csv(ts, |t| t.to_rfc3339())
}

/// Serialize a series as `timestamp,value` rows with a custom chrono
/// timestamp format.
pub fn to_csv_string_with_format(ts: &TimeSeries, format: &str) -> Result<String> {
    write_csv(ts, |t| t.format(format).to_string())
}
