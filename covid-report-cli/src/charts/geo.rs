//! Geographic scatter of peak confirmed cases

use super::{gradient, normalize, REDS};
use anyhow::Result;
use covid_dataset::GeoPoint;
use plotters::prelude::*;
use std::path::Path;

/// Marker area range in square points
const MIN_AREA: f64 = 20.0;
const MAX_AREA: f64 = 500.0;

/// Pixels per point at the 100 dpi the chart sizes assume
const PX_PER_PT: f64 = 100.0 / 72.0;

const ALPHA: f64 = 0.7;

/// Plot every point at (longitude, latitude), sized and shaded by count
pub fn render(points: &[GeoPoint], path: &Path, size: (u32, u32)) -> Result<()> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Global Distribution of COVID-19 Cases (Heatmap)",
            ("sans-serif", 32),
        )
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(-180f64..180f64, -90f64..90f64)?;

    chart
        .configure_mesh()
        .x_desc("Longitude")
        .y_desc("Latitude")
        .x_labels(13)
        .y_labels(7)
        .draw()?;

    if points.is_empty() {
        log::warn!("No located records, heatmap has no points");
    }

    let min = points.iter().map(|p| p.confirmed).min().unwrap_or(0);
    let max = points.iter().map(|p| p.confirmed).max().unwrap_or(0);

    // Large markers first so small ones stay visible on top
    let mut ordered: Vec<&GeoPoint> = points.iter().collect();
    ordered.sort_by(|a, b| b.confirmed.cmp(&a.confirmed));

    chart.draw_series(ordered.into_iter().map(|p| {
        let t = normalize(p.confirmed, min, max);
        Circle::new(
            (p.longitude, p.latitude),
            marker_radius(t),
            gradient(&REDS, t).mix(ALPHA).filled(),
        )
    }))?;

    root.present()?;
    log::info!("Heatmap written to {:?} ({} points)", path, points.len());
    Ok(())
}

/// Marker area in square points for a normalized count
fn marker_area(t: f64) -> f64 {
    MIN_AREA + (MAX_AREA - MIN_AREA) * t.clamp(0.0, 1.0)
}

/// Marker radius in pixels for a normalized count
fn marker_radius(t: f64) -> i32 {
    let radius_pt = (marker_area(t) / std::f64::consts::PI).sqrt();
    ((radius_pt * PX_PER_PT).round() as i32).max(1)
}
