//! Core types for the COVID-19 dataset library
//!
//! This module defines the record and dataset types produced by the loader,
//! the derived aggregate rows, and the library error type. A dataset is
//! loaded once and never mutated afterwards.

use chrono::NaiveDate;
use std::fmt;
use std::path::{Path, PathBuf};

/// Result type for dataset operations
pub type Result<T> = std::result::Result<T, DatasetError>;

/// One observation row from the input file
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Country/region name
    pub location: String,
    /// Latitude in degrees (None if the cell was empty or not numeric)
    pub latitude: Option<f64>,
    /// Longitude in degrees (None if the cell was empty or not numeric)
    pub longitude: Option<f64>,
    /// Reporting date (None if the date failed to parse)
    pub date: Option<NaiveDate>,
    /// Cumulative confirmed cases
    pub confirmed: u64,
    /// Cumulative deaths
    pub deaths: u64,
    /// Cumulative recoveries
    pub recovered: u64,
}

impl Record {
    /// True if the record carries a usable date
    pub fn is_dated(&self) -> bool {
        self.date.is_some()
    }

    /// Both coordinates, if present
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}

/// All records read from one input file, in file order
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
    source: PathBuf,
}

impl Dataset {
    /// Wrap already-parsed records
    pub fn new(records: Vec<Record>, source: impl Into<PathBuf>) -> Self {
        Self {
            records,
            source: source.into(),
        }
    }

    /// File the records were read from
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records whose date parsed
    pub fn dated_len(&self) -> usize {
        self.records.iter().filter(|r| r.is_dated()).count()
    }

    /// Latest parseable date in the dataset (None if there is none)
    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.records.iter().filter_map(|r| r.date).max()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Global totals for one reporting date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub confirmed: u64,
    pub deaths: u64,
    pub recovered: u64,
}

/// Confirmed total for one location on the latest date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryTotal {
    pub location: String,
    pub confirmed: u64,
}

/// Peak confirmed count observed at one (location, latitude, longitude) triple
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPoint {
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub confirmed: u64,
}

/// Errors that can occur while loading or validating a dataset
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("File not found at {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Missing columns in dataset: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    #[error("Invalid count on line {line}, column '{column}': {value:?}")]
    InvalidCount {
        line: u64,
        column: String,
        value: String,
    },

    #[error("Dataset has no records with a parseable date")]
    NoDatedRecords,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DatasetError {
    /// True for schema problems (as opposed to missing files or bad rows)
    pub fn is_schema_error(&self) -> bool {
        matches!(self, DatasetError::MissingColumns { .. })
    }
}

impl fmt::Display for TrendPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: confirmed={} deaths={} recovered={}",
            self.date.format("%Y-%m-%d"),
            self.confirmed,
            self.deaths,
            self.recovered
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(location: &str, date: Option<NaiveDate>) -> Record {
        Record {
            location: location.to_string(),
            latitude: Some(1.0),
            longitude: None,
            date,
            confirmed: 1,
            deaths: 0,
            recovered: 0,
        }
    }

    #[test]
    fn test_latest_date_skips_sentinel() {
        let d1 = NaiveDate::from_ymd_opt(2020, 1, 22).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2020, 1, 23).unwrap();
        let dataset = Dataset::new(
            vec![record("A", Some(d2)), record("B", None), record("C", Some(d1))],
            "x.csv",
        );

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.dated_len(), 2);
        assert_eq!(dataset.latest_date(), Some(d2));
    }

    #[test]
    fn test_empty_dataset_has_no_latest_date() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert_eq!(dataset.latest_date(), None);
    }

    #[test]
    fn test_coordinates_require_both_values() {
        let r = record("A", None);
        assert_eq!(r.coordinates(), None);
    }

    #[test]
    fn test_error_messages() {
        let err = DatasetError::FileNotFound {
            path: PathBuf::from("data/missing.csv"),
        };
        assert_eq!(err.to_string(), "File not found at data/missing.csv");

        let err = DatasetError::MissingColumns {
            columns: vec!["Deaths".to_string(), "Recovered".to_string()],
        };
        assert_eq!(err.to_string(), "Missing columns in dataset: Deaths, Recovered");
        assert!(err.is_schema_error());
    }
}
