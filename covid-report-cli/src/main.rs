//! COVID-19 Report CLI Application
//!
//! Reads `covid_19_clean_complete.csv` from the working directory with the
//! covid-dataset library and renders:
//! - `global_trend.png`: worldwide totals per date
//! - `country_comparison.png`: top 10 countries on the latest date
//! - `global_heatmap.png`: peak confirmed cases by coordinate
//!
//! The dataset is fully loaded and validated before the first chart is drawn,
//! so a failed load leaves no output files behind.

use anyhow::{Context, Result};
use clap::Parser;
use covid_dataset::{load_dataset, Dataset, DatasetError};

mod charts;
mod config;

use config::ReportConfig;

/// COVID-19 Report - Render case-count charts from the daily CSV export
#[derive(Parser, Debug)]
#[command(name = "covid-report-cli")]
#[command(about = "Render COVID-19 trend, country and heatmap charts", long_about = None)]
#[command(version)]
struct Args {}

fn main() -> Result<()> {
    // Only --help/--version; the report itself takes no options
    let _args = Args::parse();

    init_logging();

    log::info!("COVID Report CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using dataset library v{}", covid_dataset::VERSION);

    let config = ReportConfig::default();
    run(&config)
}

/// Load, validate, then render the three charts in order
fn run(config: &ReportConfig) -> Result<()> {
    println!("═══════════════════════════════════════════════");
    println!("  COVID-19 Report Generator");
    println!("═══════════════════════════════════════════════\n");

    let dataset = load(config)?;

    let Some(latest) = dataset.latest_date() else {
        let e = DatasetError::NoDatedRecords;
        print_hint(&e);
        return Err(e.into());
    };

    println!("📊 Dataset: {:?}", dataset.source());
    println!("  Records:      {}", dataset.len());
    println!("  Dated:        {}", dataset.dated_len());
    println!("  Latest date:  {}", latest.format("%Y-%m-%d"));
    println!("───────────────────────────────────────────────\n");

    let trend_path = config.trend_path();
    charts::trend::render(&dataset.global_trend(), &trend_path, config.trend_size)
        .with_context(|| format!("Failed to render trend chart {:?}", trend_path))?;
    println!("✓ {}", trend_path.display());

    let countries_path = config.countries_path();
    charts::countries::render(
        &dataset.top_countries(config.top_n),
        latest,
        config.top_n,
        &countries_path,
        config.countries_size,
    )
    .with_context(|| format!("Failed to render country comparison {:?}", countries_path))?;
    println!("✓ {}", countries_path.display());

    let heatmap_path = config.heatmap_path();
    charts::geo::render(&dataset.geo_points(), &heatmap_path, config.heatmap_size)
        .with_context(|| format!("Failed to render heatmap {:?}", heatmap_path))?;
    println!("✓ {}", heatmap_path.display());

    println!("\nVisualizations created successfully!");
    Ok(())
}

/// Load the dataset, printing a hint on failure
///
/// The error itself is reported once, by `main`'s return value.
fn load(config: &ReportConfig) -> Result<Dataset> {
    load_dataset(&config.input, &config.loader).map_err(|e| {
        print_hint(&e);
        e.into()
    })
}

fn print_hint(e: &DatasetError) {
    if let Some(hint) = load_hint(e) {
        eprintln!("{}", hint);
    }
}

/// What the user should check for a failed load
fn load_hint(e: &DatasetError) -> Option<&'static str> {
    match e {
        DatasetError::FileNotFound { .. } => Some("Please verify the file path and try again."),
        DatasetError::MissingColumns { .. } => Some("Please verify the CSV file structure."),
        DatasetError::NoDatedRecords => Some("Please verify the Date column in the CSV file."),
        _ => None,
    }
}

/// Initialize logging at a fixed level
fn init_logging() {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    Builder::new()
        .filter_level(LevelFilter::Info)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
