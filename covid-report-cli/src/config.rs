//! Report configuration
//!
//! Everything here is fixed at build time: the report reads one hardcoded
//! input file and writes three PNGs into the working directory.

use covid_dataset::LoaderConfig;
use std::path::PathBuf;

/// Input file expected in the working directory
pub const DEFAULT_INPUT: &str = "covid_19_clean_complete.csv";

/// Main application configuration
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub input: PathBuf,
    pub loader: LoaderConfig,
    pub output_dir: PathBuf,
    pub trend_file: String,
    pub countries_file: String,
    pub heatmap_file: String,
    /// Number of bars in the country comparison
    pub top_n: usize,
    /// Pixel sizes (width, height) of each chart
    pub trend_size: (u32, u32),
    pub countries_size: (u32, u32),
    pub heatmap_size: (u32, u32),
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            loader: LoaderConfig::default(),
            output_dir: PathBuf::from("."),
            trend_file: "global_trend.png".to_string(),
            countries_file: "country_comparison.png".to_string(),
            heatmap_file: "global_heatmap.png".to_string(),
            top_n: 10,
            trend_size: (1200, 600),
            countries_size: (1200, 600),
            heatmap_size: (1400, 800),
        }
    }
}

impl ReportConfig {
    pub fn trend_path(&self) -> PathBuf {
        self.output_dir.join(&self.trend_file)
    }

    pub fn countries_path(&self) -> PathBuf {
        self.output_dir.join(&self.countries_file)
    }

    pub fn heatmap_path(&self) -> PathBuf {
        self.output_dir.join(&self.heatmap_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_outputs() {
        let config = ReportConfig::default();

        assert_eq!(config.input, Path::new("covid_19_clean_complete.csv"));
        assert_eq!(config.top_n, 10);

        let paths = [config.trend_path(), config.countries_path(), config.heatmap_path()];
        let names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec!["global_trend.png", "country_comparison.png", "global_heatmap.png"]
        );
        assert!(paths.iter().all(|p| p.parent() == Some(Path::new("."))));
    }
}
