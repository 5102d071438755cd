//! Loader configuration types
//!
//! Column names are a contract with the data source. The defaults match the
//! Johns Hopkins "clean complete" export; callers normally use them as-is.

use serde::{Deserialize, Serialize};

/// Header names of the columns the loader reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnNames {
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_latitude")]
    pub latitude: String,
    #[serde(default = "default_longitude")]
    pub longitude: String,
    #[serde(default = "default_date")]
    pub date: String,
    #[serde(default = "default_confirmed")]
    pub confirmed: String,
    #[serde(default = "default_deaths")]
    pub deaths: String,
    #[serde(default = "default_recovered")]
    pub recovered: String,
}

fn default_location() -> String {
    "Country/Region".to_string()
}

fn default_latitude() -> String {
    "Lat".to_string()
}

fn default_longitude() -> String {
    "Long".to_string()
}

fn default_date() -> String {
    "Date".to_string()
}

fn default_confirmed() -> String {
    "Confirmed".to_string()
}

fn default_deaths() -> String {
    "Deaths".to_string()
}

fn default_recovered() -> String {
    "Recovered".to_string()
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            location: default_location(),
            latitude: default_latitude(),
            longitude: default_longitude(),
            date: default_date(),
            confirmed: default_confirmed(),
            deaths: default_deaths(),
            recovered: default_recovered(),
        }
    }
}

impl ColumnNames {
    /// Every required column, date first, in the order they are reported when missing
    pub fn required(&self) -> [&str; 7] {
        [
            self.date.as_str(),
            self.location.as_str(),
            self.latitude.as_str(),
            self.longitude.as_str(),
            self.confirmed.as_str(),
            self.deaths.as_str(),
            self.recovered.as_str(),
        ]
    }
}

/// Configuration for the dataset loader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Expected header names
    #[serde(default)]
    pub columns: ColumnNames,

    /// chrono format strings tried in order when parsing the date column
    #[serde(default = "default_date_formats")]
    pub date_formats: Vec<String>,
}

fn default_date_formats() -> Vec<String> {
    ["%Y-%m-%d", "%m/%d/%y", "%m/%d/%Y", "%Y/%m/%d"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            columns: ColumnNames::default(),
            date_formats: default_date_formats(),
        }
    }
}

impl LoaderConfig {
    /// Create a loader configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: replace the expected column names
    pub fn with_columns(mut self, columns: ColumnNames) -> Self {
        self.columns = columns;
        self
    }

    /// Builder method: replace the list of date formats
    pub fn with_date_formats(mut self, formats: Vec<String>) -> Self {
        self.date_formats = formats;
        self
    }

    /// Builder method: append one date format
    pub fn add_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_formats.push(format.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_columns() {
        let columns = ColumnNames::default();
        assert_eq!(
            columns.required(),
            ["Date", "Country/Region", "Lat", "Long", "Confirmed", "Deaths", "Recovered"]
        );
    }

    #[test]
    fn test_loader_config_builder() {
        let columns = ColumnNames {
            location: "Country".to_string(),
            ..ColumnNames::default()
        };
        let config = LoaderConfig::new()
            .with_columns(columns)
            .with_date_formats(vec!["%d.%m.%Y".to_string()])
            .add_date_format("%Y%m%d");

        assert_eq!(config.columns.location, "Country");
        assert_eq!(config.columns.deaths, "Deaths");
        assert_eq!(config.date_formats, vec!["%d.%m.%Y", "%Y%m%d"]);
    }

    #[test]
    fn test_default_formats_start_with_iso() {
        let config = LoaderConfig::default();
        assert_eq!(config.date_formats.first().map(String::as_str), Some("%Y-%m-%d"));
        assert_eq!(config.date_formats.len(), 4);
    }
}
