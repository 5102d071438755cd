//! Global trend line chart

use super::axis_max;
use anyhow::Result;
use chrono::{Duration, NaiveDate};
use covid_dataset::TrendPoint;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;
use std::path::Path;

/// Most date labels drawn under the x axis
const MAX_DATE_LABELS: usize = 12;
/// Pixels between the axis line and the start of a date label
const LABEL_GAP: i32 = 8;

const CONFIRMED: RGBColor = RGBColor(31, 119, 180);
const DEATHS: RGBColor = RGBColor(255, 127, 14);
const RECOVERED: RGBColor = RGBColor(44, 160, 44);

/// Plot confirmed, deaths and recovered totals against date
pub fn render(series: &[TrendPoint], path: &Path, size: (u32, u32)) -> Result<()> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        log::warn!("No dated records, trend chart left empty");
        root.present()?;
        return Ok(());
    };

    let start = first.date;
    let span = (last.date - start).num_days().max(1) as f64;
    let peak = series
        .iter()
        .map(|p| p.confirmed.max(p.deaths).max(p.recovered))
        .max()
        .unwrap_or(0);

    let mut chart = ChartBuilder::on(&root)
        .caption("Global COVID-19 Trends", ("sans-serif", 32))
        .margin(15)
        .x_label_area_size(120)
        .y_label_area_size(90)
        .build_cartesian_2d(0f64..span, 0f64..axis_max(peak))?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Case Count")
        .x_labels(MAX_DATE_LABELS)
        // Dates are drawn below by hand so they hang from the axis
        .x_label_formatter(&|_| String::new())
        .y_label_formatter(&|y| format!("{:.0}", y))
        .draw()?;

    let confirmed = to_points(series, start, |p| p.confirmed);
    chart
        .draw_series(LineSeries::new(confirmed.clone(), CONFIRMED.stroke_width(2)))?
        .label("Confirmed")
        .legend(|(x, y)| Circle::new((x + 10, y), 4, CONFIRMED.filled()));
    chart.draw_series(
        confirmed
            .iter()
            .map(|&p| Circle::new(p, 4, CONFIRMED.filled())),
    )?;

    let deaths = to_points(series, start, |p| p.deaths);
    chart
        .draw_series(LineSeries::new(deaths.clone(), DEATHS.stroke_width(2)))?
        .label("Deaths")
        .legend(|(x, y)| Cross::new((x + 10, y), 4, DEATHS.stroke_width(2)));
    chart.draw_series(
        deaths
            .iter()
            .map(|&p| Cross::new(p, 4, DEATHS.stroke_width(2))),
    )?;

    let recovered = to_points(series, start, |p| p.recovered);
    chart
        .draw_series(LineSeries::new(recovered.clone(), RECOVERED.stroke_width(2)))?
        .label("Recovered")
        .legend(|(x, y)| TriangleMarker::new((x + 10, y), 5, RECOVERED.filled()));
    chart.draw_series(
        recovered
            .iter()
            .map(|&p| TriangleMarker::new(p, 5, RECOVERED.filled())),
    )?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    let days = (last.date - start).num_days();
    let ticks: Vec<(i64, (i32, i32))> = label_days(days, MAX_DATE_LABELS)
        .into_iter()
        .map(|d| (d, chart.backend_coord(&(d as f64, 0.0))))
        .collect();

    // Rotated text anchored at its start, so each label reads downward
    // from just under its tick
    let style = TextStyle::from(("sans-serif", 14).into_font())
        .transform(FontTransform::Rotate90)
        .pos(Pos::new(HPos::Left, VPos::Center));
    for (day, (x, y)) in ticks {
        root.draw(&Text::new(
            day_label(start, day as f64),
            (x, y + LABEL_GAP),
            style.clone(),
        ))?;
    }

    root.present()?;
    log::info!("Trend chart written to {:?} ({} dates)", path, series.len());
    Ok(())
}

/// Map one field of the series onto (days since start, count)
fn to_points(
    series: &[TrendPoint],
    start: NaiveDate,
    value: impl Fn(&TrendPoint) -> u64,
) -> Vec<(f64, f64)> {
    series
        .iter()
        .map(|p| ((p.date - start).num_days() as f64, value(p) as f64))
        .collect()
}

/// Day offsets that get a date label, evenly spaced from day 0
fn label_days(span_days: i64, max_labels: usize) -> Vec<i64> {
    if span_days <= 0 || max_labels < 2 {
        return vec![0];
    }
    let gaps = (max_labels - 1) as i64;
    let step = ((span_days + gaps - 1) / gaps).max(1);
    (0..=span_days).step_by(step as usize).collect()
}

/// Axis label for a day offset; blank between whole days
fn day_label(start: NaiveDate, offset: f64) -> String {
    if (offset - offset.round()).abs() > 1e-6 {
        return String::new();
    }
    (start + Duration::days(offset.round() as i64))
        .format("%Y-%m-%d")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_label() {
        let start = ymd(2020, 1, 30);
        assert_eq!(day_label(start, 0.0), "2020-01-30");
        assert_eq!(day_label(start, 2.0), "2020-02-01");
        assert_eq!(day_label(start, 0.5), "");
    }

    #[test]
    fn test_label_days() {
        // A full pandemic-length series stays within the label budget
        let days = label_days(187, 12);
        assert!(days.len() <= 12);
        assert_eq!(days[0], 0);
        assert_eq!(days[1], 17);
        assert!(*days.last().unwrap() <= 187);

        assert_eq!(label_days(3, 12), vec![0, 1, 2, 3]);
        assert_eq!(label_days(0, 12), vec![0]);
    }

    #[test]
    fn test_to_points_offsets() {
        let start = ymd(2020, 1, 22);
        let series = vec![
            TrendPoint { date: start, confirmed: 30, deaths: 1, recovered: 2 },
            TrendPoint { date: ymd(2020, 1, 25), confirmed: 40, deaths: 3, recovered: 4 },
        ];

        assert_eq!(to_points(&series, start, |p| p.confirmed), vec![(0.0, 30.0), (3.0, 40.0)]);
        assert_eq!(to_points(&series, start, |p| p.deaths), vec![(0.0, 1.0), (3.0, 3.0)]);
    }
}
