use crate::models::PriceSeries;
use crate::utils::{TimeUtils, format_abbreviated};

use super::DisplayWindow;

/// A tick label positioned as a fraction along its axis (0 = top or left edge).
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    pub fraction: f32,
    pub text: String,
}

/// `count` evenly spaced value labels, top (window max) to bottom (window min).
pub fn y_axis_labels(window: DisplayWindow, count: usize) -> Vec<AxisLabel> {
    match count {
        0 => Vec::new(),
        1 => vec![AxisLabel {
            fraction: 0.0,
            text: currency_label(window.max),
        }],
        _ => (0..count)
            .map(|i| {
                let fraction = i as f64 / (count - 1) as f64;
                AxisLabel {
                    fraction: fraction as f32,
                    text: currency_label(window.value_at(1.0 - fraction)),
                }
            })
            .collect(),
    }
}

/// Start date on the left edge, then `hour_labels` hour stamps spread evenly to the right
/// edge, each taken from the sample nearest its position.
pub fn x_axis_labels(series: &PriceSeries, hour_labels: usize) -> Vec<AxisLabel> {
    let points = series.points();
    let Some(first) = points.first() else {
        return Vec::new();
    };

    let mut labels = Vec::with_capacity(hour_labels + 1);
    labels.push(AxisLabel {
        fraction: 0.0,
        text: first.timestamp.format(TimeUtils::AXIS_DATE_FORMAT).to_string(),
    });

    let last_index = points.len() - 1;
    labels.extend((1..=hour_labels).map(|k| {
        let fraction = k as f32 / hour_labels as f32;
        let index = ((fraction * last_index as f32).round() as usize).min(last_index);
        AxisLabel {
            fraction,
            text: points[index]
                .timestamp
                .format(TimeUtils::AXIS_HOUR_FORMAT)
                .to_string(),
        }
    }));
    labels
}

fn currency_label(value: f64) -> String {
    let text = format_abbreviated(value);
    match text.strip_prefix('-') {
        Some(abs) => format!("-${abs}"),
        None => format!("${text}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::generate_synthetic_series;
    use chrono::{Local, TimeZone};
    use rand::{SeedableRng, rngs::StdRng};
    use std::time::Duration;

    fn texts(labels: &[AxisLabel]) -> Vec<&str> {
        labels.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn y_labels_run_top_to_bottom() {
        let labels = y_axis_labels(DisplayWindow::new(1_000_000.0, 1_400_000.0), 5);
        assert_eq!(texts(&labels), vec!["$1.4M", "$1.3M", "$1.2M", "$1.1M", "$1.0M"]);
        assert_eq!(labels[0].fraction, 0.0);
        assert_eq!(labels[4].fraction, 1.0);
    }

    #[test]
    fn y_label_edge_counts() {
        let window = DisplayWindow::new(-50.0, 50.0);
        assert!(y_axis_labels(window, 0).is_empty());
        assert_eq!(texts(&y_axis_labels(window, 1)), vec!["$50.00"]);
        assert_eq!(texts(&y_axis_labels(window, 2)), vec!["$50.00", "-$50.00"]);
    }

    #[test]
    fn x_labels_date_then_hours() {
        let now = Local.with_ymd_and_hms(2024, 12, 13, 14, 0, 0).unwrap();
        let series = generate_synthetic_series(
            24,
            1_000.0,
            -5.0..=15.0,
            Duration::from_secs(3_600),
            now,
            &mut StdRng::seed_from_u64(5),
        );
        let labels = x_axis_labels(&series, 3);
        assert_eq!(texts(&labels), vec!["12/12", "22:00", "06:00", "14:00"]);
        assert_eq!(labels[3].fraction, 1.0);
    }

    #[test]
    fn x_labels_empty_series() {
        assert!(x_axis_labels(&PriceSeries::default(), 3).is_empty());
    }
}
