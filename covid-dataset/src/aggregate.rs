//! Aggregations over a loaded dataset
//!
//! Each view reduces the same immutable [`Dataset`]:
//! - `global_trend`: per-date sums across all locations
//! - `top_countries`: largest confirmed totals on the latest date
//! - `geo_points`: peak confirmed count per (location, lat, long)

use crate::types::{CountryTotal, Dataset, GeoPoint, TrendPoint};
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

impl Dataset {
    /// Sum confirmed/deaths/recovered per date, ascending by date
    ///
    /// Records with an unparseable date are left out. Totals saturate at
    /// `u64::MAX`.
    pub fn global_trend(&self) -> Vec<TrendPoint> {
        let mut by_date: BTreeMap<NaiveDate, (u64, u64, u64)> = BTreeMap::new();

        for record in self.iter() {
            let Some(date) = record.date else { continue };
            let totals = by_date.entry(date).or_default();
            totals.0 = totals.0.saturating_add(record.confirmed);
            totals.1 = totals.1.saturating_add(record.deaths);
            totals.2 = totals.2.saturating_add(record.recovered);
        }

        by_date
            .into_iter()
            .map(|(date, (confirmed, deaths, recovered))| TrendPoint {
                date,
                confirmed,
                deaths,
                recovered,
            })
            .collect()
    }

    /// The `n` locations with the most confirmed cases on the latest date
    ///
    /// Sorted descending by total. Equal totals keep location-name order.
    /// Totals saturate at `u64::MAX`.
    /// Empty if the dataset has no parseable date.
    pub fn top_countries(&self, n: usize) -> Vec<CountryTotal> {
        let Some(latest) = self.latest_date() else {
            return Vec::new();
        };

        let mut by_location: BTreeMap<&str, u64> = BTreeMap::new();
        for record in self.iter().filter(|r| r.date == Some(latest)) {
            let total = by_location.entry(record.location.as_str()).or_default();
            *total = total.saturating_add(record.confirmed);
        }

        let mut totals: Vec<CountryTotal> = by_location
            .into_iter()
            .map(|(location, confirmed)| CountryTotal {
                location: location.to_string(),
                confirmed,
            })
            .collect();

        // Stable sort keeps the alphabetical order among ties
        totals.sort_by(|a, b| b.confirmed.cmp(&a.confirmed));
        totals.truncate(n);
        totals
    }

    /// Peak confirmed count per (location, latitude, longitude)
    ///
    /// Triples with a missing coordinate, or sitting exactly on (0, 0), are
    /// dropped. Ordered by location, then latitude, then longitude.
    pub fn geo_points(&self) -> Vec<GeoPoint> {
        let mut points: Vec<GeoPoint> = Vec::new();
        let mut slots: HashMap<(&str, u64, u64), usize> = HashMap::new();

        for record in self.iter() {
            let Some((lat, long)) = record.coordinates() else {
                continue;
            };
            // -0.0 and 0.0 share a group
            let (lat, long) = (lat + 0.0, long + 0.0);
            if lat == 0.0 && long == 0.0 {
                continue;
            }

            let key = (record.location.as_str(), lat.to_bits(), long.to_bits());
            match slots.get(&key) {
                Some(&i) => {
                    let point = &mut points[i];
                    point.confirmed = point.confirmed.max(record.confirmed);
                }
                None => {
                    slots.insert(key, points.len());
                    points.push(GeoPoint {
                        location: record.location.clone(),
                        latitude: lat,
                        longitude: long,
                        confirmed: record.confirmed,
                    });
                }
            }
        }

        points.sort_by(compare_geo);
        points
    }
}

fn compare_geo(a: &GeoPoint, b: &GeoPoint) -> Ordering {
    a.location
        .cmp(&b.location)
        .then_with(|| a.latitude.total_cmp(&b.latitude))
        .then_with(|| a.longitude.total_cmp(&b.longitude))
}
