//! COVID-19 Dataset Library
//!
//! Loads the daily case-count table (`covid_19_clean_complete.csv` layout)
//! and computes the aggregates behind the report charts.
//!
//! # Architecture
//!
//! This library only deals with data:
//! - Reads and validates the CSV schema (all required columns up front)
//! - Parses dates, keeping rows with bad dates as undated records
//! - Aggregates per date, per location on the latest date, and per coordinate
//!
//! The library does NOT draw charts or write output files. Rendering lives
//! in the application layer (covid-report-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use covid_dataset::{load_dataset, LoaderConfig};
//! use std::path::Path;
//!
//! let dataset = load_dataset(Path::new("covid_19_clean_complete.csv"), &LoaderConfig::new()).unwrap();
//!
//! for point in dataset.global_trend() {
//!     println!("{}", point);
//! }
//!
//! if let Some(latest) = dataset.latest_date() {
//!     for country in dataset.top_countries(10) {
//!         println!("{} {}: {}", latest, country.location, country.confirmed);
//!     }
//! }
//! ```

// Public modules
pub mod config;
pub mod loader;
pub mod types;

// Inherent Dataset methods only
mod aggregate;

// Re-export main types for convenience
pub use config::{ColumnNames, LoaderConfig};
pub use loader::{load_dataset, read_dataset};
pub use types::{CountryTotal, Dataset, DatasetError, GeoPoint, Record, Result, TrendPoint};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Smoke test: an empty dataset aggregates to nothing
        let dataset = Dataset::default();
        assert!(dataset.global_trend().is_empty());
        assert!(dataset.top_countries(10).is_empty());
        assert!(dataset.geo_points().is_empty());
    }
}
