use std::{ops::RangeInclusive, time::Duration};

use chrono::{DateTime, Local, TimeDelta};
use rand::Rng;

use crate::config::SyntheticSeriesConfig;
use crate::utils::value_bounds;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PricePoint {
    pub timestamp: DateTime<Local>,
    pub value: f64,
}

/// Chronologically ascending, read-only once built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Observed (min, max) of the values.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        value_bounds(&self.values())
    }

    /// Build the synthetic history described by `config`, ending at `now`.
    pub fn synthetic(
        config: &SyntheticSeriesConfig,
        now: DateTime<Local>,
        rng: &mut impl Rng,
    ) -> Self {
        generate_synthetic_series(
            config.point_count,
            config.base_price,
            config.noise_min..=config.noise_max,
            config.interval,
            now,
            rng,
        )
    }
}

/// `point_count + 1` samples spaced `interval_unit` apart, the last one at `now`, each
/// `base_price + uniform(noise_range)`. Returned oldest first.
pub fn generate_synthetic_series(
    point_count: usize,
    base_price: f64,
    noise_range: RangeInclusive<f64>,
    interval_unit: Duration,
    now: DateTime<Local>,
    rng: &mut impl Rng,
) -> PriceSeries {
    let (lo, hi) = {
        let (a, b) = (*noise_range.start(), *noise_range.end());
        if a <= b { (a, b) } else { (b, a) }
    };
    let step = TimeDelta::from_std(interval_unit).unwrap_or(TimeDelta::hours(1));

    let points = (0..=point_count)
        .rev()
        .map(|steps_back| {
            let back = i32::try_from(steps_back).unwrap_or(i32::MAX);
            let timestamp = now - step * back;
            let noise = if lo < hi { rng.random_range(lo..=hi) } else { lo };
            PricePoint {
                timestamp,
                value: base_price + noise,
            }
        })
        .collect();

    PriceSeries { points }
}
