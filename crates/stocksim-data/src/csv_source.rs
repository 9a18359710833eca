//! CSV import and export of price series.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};
use stocksim_core::error::DataError;
use stocksim_core::types::{Bar, Series};
use tracing::debug;

/// CSV record format.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date", alias = "timestamp", alias = "Timestamp")]
    date: String,
    #[serde(alias = "Open")]
    open: f64,
    #[serde(alias = "High")]
    high: f64,
    #[serde(alias = "Low")]
    low: f64,
    #[serde(alias = "Close", alias = "Adj Close")]
    close: f64,
    #[serde(alias = "Volume", default)]
    volume: f64,
}

#[derive(Debug, Serialize)]
struct CsvRow {
    date: String,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: u64,
}

/// Read a series from a CSV file.
pub fn load_csv(path: &Path, symbol: &str) -> Result<Series, DataError> {
    let file = File::open(path)
        .map_err(|e| DataError::NoData(format!("{}: {}", path.display(), e)))?;
    read_csv(file, symbol)
}

/// Read a series from CSV with a header row.
///
/// Rows may appear in any order; they are sorted by date. Duplicate dates are
/// rejected.
pub fn read_csv<R: Read>(reader: R, symbol: &str) -> Result<Series, DataError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut bars = Vec::new();

    for result in reader.deserialize() {
        let record: CsvRecord = result.map_err(|e| DataError::Parse(e.to_string()))?;

        let date = parse_date(&record.date)?;
        if record.volume < 0.0 || !record.volume.is_finite() {
            return Err(DataError::Parse(format!(
                "Invalid volume on {}: {}",
                record.date, record.volume
            )));
        }

        let bar = Bar::new(
            date,
            record.open,
            record.high,
            record.low,
            record.close,
            record.volume as u64,
        );
        if !bar.is_well_formed() {
            return Err(DataError::Parse(format!(
                "Malformed bar on {}: open {}, high {}, low {}, close {}",
                record.date, record.open, record.high, record.low, record.close
            )));
        }
        bars.push(bar);
    }

    if bars.is_empty() {
        return Err(DataError::NoData(format!("no rows for {symbol}")));
    }

    // Sort by date
    bars.sort_by_key(|b| b.date);
    debug!(symbol, rows = bars.len(), "loaded csv series");

    Series::from_bars(symbol, bars)
}

/// Write a series as CSV with a `date,open,high,low,close,volume` header.
pub fn write_csv<W: Write>(series: &Series, writer: W) -> Result<(), DataError> {
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(writer);

    for bar in series.iter() {
        writer
            .serialize(CsvRow {
                date: bar.date.format("%Y-%m-%d").to_string(),
                open: bar.open,
                high: bar.high,
                low: bar.low,
                close: bar.close,
                volume: bar.volume,
            })
            .map_err(|e| DataError::Parse(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| DataError::Parse(e.to_string()))
}

/// Parse various date formats.
fn parse_date(date_str: &str) -> Result<NaiveDate, DataError> {
    let formats = [
        "%Y-%m-%d",
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d",
        "%m/%d/%Y",
        "%d-%m-%Y",
    ];

    for format in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Ok(dt.date());
        }
        if let Ok(d) = NaiveDate::parse_from_str(date_str, format) {
            return Ok(d);
        }
    }

    // Try parsing as Unix timestamp
    if let Ok(ts) = date_str.parse::<i64>() {
        // Assume milliseconds if > 10 digits
        let millis = if ts > 10_000_000_000 { ts } else { ts * 1000 };
        if let Some(dt) = DateTime::from_timestamp_millis(millis) {
            return Ok(dt.date_naive());
        }
    }

    Err(DataError::Parse(format!("Could not parse date: {}", date_str)))
}
