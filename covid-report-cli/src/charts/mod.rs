//! Chart rendering (PNG via plotters)
//!
//! One module per view. Shared here: colour ramps and value scaling.

pub mod countries;
pub mod geo;
pub mod trend;

use plotters::style::RGBColor;

/// Dark-to-light sequential ramp used for the country bars
pub const MAKO: [RGBColor; 5] = [
    RGBColor(46, 30, 60),
    RGBColor(56, 76, 138),
    RGBColor(53, 123, 162),
    RGBColor(54, 170, 173),
    RGBColor(110, 206, 168),
];

/// Light-to-dark red ramp used for case density
pub const REDS: [RGBColor; 5] = [
    RGBColor(254, 229, 217),
    RGBColor(252, 174, 145),
    RGBColor(251, 106, 74),
    RGBColor(222, 45, 38),
    RGBColor(165, 15, 21),
];

/// Sample a piecewise-linear colour ramp at `t` in [0, 1]
pub fn gradient(stops: &[RGBColor], t: f64) -> RGBColor {
    match stops {
        [] => RGBColor(0, 0, 0),
        [only] => *only,
        _ => {
            let t = t.clamp(0.0, 1.0) * (stops.len() - 1) as f64;
            let i = (t.floor() as usize).min(stops.len() - 2);
            let frac = t - i as f64;
            let (a, b) = (stops[i], stops[i + 1]);
            let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * frac).round() as u8;
            RGBColor(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
        }
    }
}

/// Position of `value` within [min, max], mapped to [0, 1]
///
/// A degenerate range maps everything to the midpoint.
pub fn normalize(value: u64, min: u64, max: u64) -> f64 {
    if max <= min {
        return 0.5;
    }
    (value.saturating_sub(min)) as f64 / (max - min) as f64
}

/// Upper bound for a count axis, with 10% headroom
pub fn axis_max(max: u64) -> f64 {
    (max as f64 * 1.1).max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_endpoints() {
        assert_eq!(gradient(&REDS, 0.0), REDS[0]);
        assert_eq!(gradient(&REDS, 1.0), REDS[4]);
        assert_eq!(gradient(&REDS, 0.5), REDS[2]);
        assert_eq!(gradient(&REDS, 7.0), REDS[4]);
    }

    #[test]
    fn test_gradient_interpolates() {
        let stops = [RGBColor(0, 0, 0), RGBColor(200, 100, 50)];
        assert_eq!(gradient(&stops, 0.5), RGBColor(100, 50, 25));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(5, 0, 10), 0.5);
        assert_eq!(normalize(10, 0, 10), 1.0);
        assert_eq!(normalize(0, 0, 10), 0.0);
        assert_eq!(normalize(3, 3, 3), 0.5);
    }

    #[test]
    fn test_axis_max() {
        assert_eq!(axis_max(0), 1.0);
        assert!((axis_max(100) - 110.0).abs() < 1e-9);
    }
}
