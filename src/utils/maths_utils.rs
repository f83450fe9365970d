use argminmax::ArgMinMax;
use std::time::Duration;

/// Linearly maps a value from one range to another while preserving its relative proportion.
/// Not clamped: values outside the input range land outside the output range.
pub fn remap(val: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let t = (val - in_min) / (in_max - in_min);
    out_min + t * (out_max - out_min)
}

/// Cubic ease-in-out. Monotonic on [0, 1], maps 0 -> 0 and 1 -> 1.
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// How far `elapsed` is through `total`, clamped to [0, 1]. A zero-length span is already done.
#[inline]
pub fn progress_fraction(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0) as f32
}

/// (min, max) of a series, or None when it is empty.
#[inline]
pub fn value_bounds(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let (min_index, max_index) = values.argminmax();
    Some((values[min_index], values[max_index]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remap_is_unclamped() {
        assert_eq!(remap(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
        assert_eq!(remap(20.0, 0.0, 10.0, 0.0, 100.0), 200.0);
        // inverted output range (canvas y grows downwards)
        assert_eq!(remap(10.0, 0.0, 10.0, 200.0, 0.0), 0.0);
    }

    #[test]
    fn ease_hits_endpoints_and_is_monotonic() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
        let mut last = 0.0;
        for i in 0..=100 {
            let v = ease_in_out(i as f32 / 100.0);
            assert!(v >= last);
            last = v;
        }
        assert_eq!(ease_in_out(-3.0), 0.0);
        assert_eq!(ease_in_out(7.0), 1.0);
    }

    #[test]
    fn progress_fraction_clamps() {
        let total = Duration::from_secs(2);
        assert_eq!(progress_fraction(Duration::ZERO, total), 0.0);
        assert_eq!(progress_fraction(Duration::from_secs(1), total), 0.5);
        assert_eq!(progress_fraction(Duration::from_secs(5), total), 1.0);
        assert_eq!(progress_fraction(Duration::ZERO, Duration::ZERO), 1.0);
    }

    #[test]
    fn bounds_of_series() {
        assert_eq!(value_bounds(&[]), None);
        assert_eq!(value_bounds(&[3.0, -1.0, 7.5, 2.0]), Some((-1.0, 7.5)));
    }
}
