//! CSV loader and schema validation
//!
//! Reads the case-count table into a [`Dataset`]. The header row is checked
//! once for every required column before any data row is read. Per-row
//! problems with dates or coordinates degrade to "missing" instead of
//! aborting the load.

use crate::config::{ColumnNames, LoaderConfig};
use crate::types::{Dataset, DatasetError, Record, Result};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Load a dataset from a CSV file
///
/// # Errors
/// * `FileNotFound` if `path` does not exist
/// * `MissingColumns` if the header lacks any required column
/// * `InvalidCount` if a count cell is not a non-negative integer
/// * `Csv` / `Io` for malformed files and read failures
pub fn load_dataset(path: &Path, config: &LoaderConfig) -> Result<Dataset> {
    log::info!("Loading dataset: {:?}", path);

    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DatasetError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => DatasetError::Io(e),
    })?;

    let dataset = read_dataset(file, path, config)?;

    log::info!(
        "Loaded {} records from {:?} ({} with a valid date)",
        dataset.len(),
        path,
        dataset.dated_len()
    );

    Ok(dataset)
}

/// Read a dataset from any CSV source
///
/// `source` is only recorded on the returned dataset for diagnostics.
pub fn read_dataset<R: Read>(
    reader: R,
    source: impl Into<PathBuf>,
    config: &LoaderConfig,
) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let index = ColumnIndex::resolve(&headers, &config.columns)?;
    log::debug!("Resolved columns: {:?}", index);

    let mut records = Vec::new();
    let mut undated = 0usize;
    let mut unlocated = 0usize;

    for row in reader.records() {
        let row = row?;
        let record = index.parse_row(&row, config)?;

        if record.date.is_none() {
            undated += 1;
            log::debug!(
                "Unparseable date {:?} on line {}",
                row.get(index.date).unwrap_or(""),
                line_of(&row)
            );
        }
        if record.coordinates().is_none() {
            unlocated += 1;
        }

        records.push(record);
    }

    if undated > 0 {
        log::warn!(
            "{} records have an unparseable date and are excluded from date-based views",
            undated
        );
    }
    if unlocated > 0 {
        log::debug!("{} records have no coordinates", unlocated);
    }

    Ok(Dataset::new(records, source))
}

/// Positions of the required columns in the header row
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    date: usize,
    location: usize,
    latitude: usize,
    longitude: usize,
    confirmed: usize,
    deaths: usize,
    recovered: usize,
}

impl ColumnIndex {
    /// Locate every required column, reporting all absent ones at once
    fn resolve(headers: &StringRecord, columns: &ColumnNames) -> Result<Self> {
        let mut missing = Vec::new();
        let mut find = |name: &str| match headers.iter().position(|h| h == name) {
            Some(i) => i,
            None => {
                missing.push(name.to_string());
                usize::MAX
            }
        };

        // Field order matches ColumnNames::required()
        let index = Self {
            date: find(columns.date.as_str()),
            location: find(columns.location.as_str()),
            latitude: find(columns.latitude.as_str()),
            longitude: find(columns.longitude.as_str()),
            confirmed: find(columns.confirmed.as_str()),
            deaths: find(columns.deaths.as_str()),
            recovered: find(columns.recovered.as_str()),
        };

        if missing.is_empty() {
            Ok(index)
        } else {
            Err(DatasetError::MissingColumns { columns: missing })
        }
    }

    fn parse_row(&self, row: &StringRecord, config: &LoaderConfig) -> Result<Record> {
        let cell = |i: usize| row.get(i).unwrap_or("");
        let count = |i: usize, column: &str| {
            parse_count(cell(i)).ok_or_else(|| DatasetError::InvalidCount {
                line: line_of(row),
                column: column.to_string(),
                value: cell(i).to_string(),
            })
        };

        let columns = &config.columns;
        Ok(Record {
            location: cell(self.location).to_string(),
            latitude: parse_coordinate(cell(self.latitude)),
            longitude: parse_coordinate(cell(self.longitude)),
            date: parse_date(cell(self.date), &config.date_formats),
            confirmed: count(self.confirmed, columns.confirmed.as_str())?,
            deaths: count(self.deaths, columns.deaths.as_str())?,
            recovered: count(self.recovered, columns.recovered.as_str())?,
        })
    }
}

fn line_of(row: &StringRecord) -> u64 {
    row.position().map(|p| p.line()).unwrap_or(0)
}

/// Parse a date cell, returning None (the sentinel) when nothing matches
///
/// Formats are tried in order. Failing those, a date-time whose first ten
/// characters are an ISO date (`2020-01-22 00:00:00`, `2020-01-22T00:00:00Z`)
/// is accepted.
pub fn parse_date(value: &str, formats: &[String]) -> Option<NaiveDate> {
    if value.is_empty() {
        return None;
    }

    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            let (date, rest) = (value.get(..10)?, value.get(10..)?);
            if rest.starts_with(' ') || rest.starts_with('T') {
                NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
            } else {
                None
            }
        })
}

/// Parse a coordinate cell; empty or non-numeric cells are missing
fn parse_coordinate(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a count cell
///
/// Empty cells count as zero. Integral floats such as `12.0` are accepted,
/// anything negative, fractional or non-numeric is rejected.
fn parse_count(value: &str) -> Option<u64> {
    if value.is_empty() {
        return Some(0);
    }
    if let Ok(n) = value.parse::<u64>() {
        return Some(n);
    }
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v < u64::MAX as f64 => {
            Some(v as u64)
        }
        _ => None,
    }
}
