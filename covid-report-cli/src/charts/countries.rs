//! Top-N countries horizontal bar chart

use super::{axis_max, gradient, MAKO};
use anyhow::Result;
use chrono::NaiveDate;
use covid_dataset::CountryTotal;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

/// Half of a bar's thickness, in rows
const BAR_HALF_HEIGHT: f64 = 0.4;

/// Plot one horizontal bar per location, largest at the top
///
/// `top` must already be sorted descending, as returned by
/// `Dataset::top_countries`.
pub fn render(
    top: &[CountryTotal],
    latest: NaiveDate,
    top_n: usize,
    path: &Path,
    size: (u32, u32),
) -> Result<()> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let rows = top.len().max(1);
    let peak = top.iter().map(|c| c.confirmed).max().unwrap_or(0);

    // Row 0 is the bottom bar, so the leader goes last
    let labels: Vec<&str> = top.iter().rev().map(|c| c.location.as_str()).collect();

    let mut chart = ChartBuilder::on(&root)
        .caption(caption(top_n, latest), ("sans-serif", 32))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(180)
        .build_cartesian_2d(0f64..axis_max(peak), row_span(rows))?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc("Confirmed Cases")
        .y_desc("Country")
        .y_labels(rows)
        .x_label_formatter(&|x| format!("{:.0}", x))
        .y_label_formatter(&|y| row_label(&labels, *y))
        .draw()?;

    chart.draw_series(top.iter().enumerate().map(|(rank, country)| {
        let row = (rows - 1 - rank) as f64;
        let color = gradient(&MAKO, bar_shade(rank, top.len()));
        Rectangle::new(
            [
                (0.0, row - BAR_HALF_HEIGHT),
                (country.confirmed as f64, row + BAR_HALF_HEIGHT),
            ],
            color.filled(),
        )
    }))?;

    root.present()?;
    log::info!("Country comparison written to {:?} ({} bars)", path, top.len());
    Ok(())
}

fn caption(top_n: usize, latest: NaiveDate) -> String {
    format!(
        "Top {} Countries by Confirmed Cases ({})",
        top_n,
        latest.format("%Y-%m-%d")
    )
}

/// Palette position for the bar at `rank` (0 = darkest)
fn bar_shade(rank: usize, count: usize) -> f64 {
    if count <= 1 {
        0.0
    } else {
        rank as f64 / (count - 1) as f64
    }
}

/// Vertical extent holding exactly one unit-high row per bar
///
/// Bars sit on whole-number rows 0..rows, each centred on its row.
fn row_span(rows: usize) -> Range<f64> {
    -0.5..(rows as f64 - 0.5)
}

/// Location name for a whole-number row; blank between rows
fn row_label(labels: &[&str], y: f64) -> String {
    if (y - y.round()).abs() > 1e-6 || y < 0.0 {
        return String::new();
    }
    labels
        .get(y.round() as usize)
        .map(|s| s.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_has_date() {
        let latest = NaiveDate::from_ymd_opt(2020, 7, 27).unwrap();
        assert_eq!(
            caption(10, latest),
            "Top 10 Countries by Confirmed Cases (2020-07-27)"
        );
    }

    #[test]
    fn test_bar_shade_spans_palette() {
        assert_eq!(bar_shade(0, 10), 0.0);
        assert_eq!(bar_shade(9, 10), 1.0);
        assert_eq!(bar_shade(0, 1), 0.0);
    }

    #[test]
    fn test_row_label() {
        let labels = ["Chile", "Brazil", "US"];
        assert_eq!(row_label(&labels, 2.0), "US");
        assert_eq!(row_label(&labels, 0.0), "Chile");
        assert_eq!(row_label(&labels, 7.0), "");
        assert_eq!(row_label(&labels, 0.5), "");
        assert_eq!(row_label(&labels, -1.0), "");
    }

    #[test]
    fn test_one_row_per_bar() {
        for rows in [1usize, 3, 10] {
            let span = row_span(rows);
            assert_eq!(span.end - span.start, rows as f64);

            // Every bar fits inside the span and nothing else has room
            let bottom = 0.0 - BAR_HALF_HEIGHT;
            let top = (rows - 1) as f64 + BAR_HALF_HEIGHT;
            assert!(bottom > span.start && top < span.end);
            assert!(span.end - top < 1.0 - BAR_HALF_HEIGHT);
        }
    }
}
