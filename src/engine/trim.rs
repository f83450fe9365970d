//! Animated trim fraction for the chart line.

use std::time::Duration;

#[cfg(debug_assertions)]
use crate::config::DF;
use crate::utils::{ease_in_out, progress_fraction};

/// Drives a single 0 -> 1 run with ease-in-out. The fraction never goes backwards and the
/// animation cannot be restarted.
#[derive(Debug)]
pub struct TrimAnimation {
    duration: Duration,
    started_at: Option<Duration>,
    fraction: f32,
    torn_down: bool,
}

impl TrimAnimation {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            started_at: None,
            fraction: 0.0,
            torn_down: false,
        }
    }

    pub fn start(&mut self, now: Duration) -> bool {
        if self.started_at.is_some() || self.torn_down {
            return false;
        }
        self.started_at = Some(now);
        #[cfg(debug_assertions)]
        if DF.log_chart_trim {
            log::info!("Chart trim started at {:?} ({:?} run)", now, self.duration);
        }
        true
    }

    /// Recompute the fraction for `now`. Returns the new value.
    pub fn advance(&mut self, now: Duration) -> f32 {
        let Some(started_at) = self.started_at else {
            return self.fraction;
        };
        if self.torn_down || self.is_complete() {
            return self.fraction;
        }
        let t = progress_fraction(now.saturating_sub(started_at), self.duration);
        self.fraction = self.fraction.max(ease_in_out(t)).min(1.0);
        #[cfg(debug_assertions)]
        if DF.log_chart_trim && self.is_complete() {
            log::info!("Chart trim complete at {:?}", now);
        }
        self.fraction
    }

    /// Jump straight to the fully drawn state.
    pub fn finish(&mut self) {
        if self.started_at.is_some() && !self.torn_down {
            self.fraction = 1.0;
        }
    }

    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && !self.torn_down && !self.is_complete()
    }

    pub fn is_complete(&self) -> bool {
        self.fraction >= 1.0
    }

    pub fn teardown(&mut self) {
        self.torn_down = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const RUN: Duration = Duration::from_secs(2);

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn idle_until_started() {
        let mut trim = TrimAnimation::new(RUN);
        assert_eq!(trim.advance(ms(5_000)), 0.0);
        assert!(!trim.is_running());
    }

    #[test]
    fn runs_zero_to_one_over_duration() {
        let mut trim = TrimAnimation::new(RUN);
        trim.start(ms(1_000));
        assert_eq!(trim.advance(ms(1_000)), 0.0);
        assert!((trim.advance(ms(2_000)) - 0.5).abs() < 1e-6);
        assert!(trim.is_running());
        assert_eq!(trim.advance(ms(3_000)), 1.0);
        assert!(trim.is_complete());
        assert!(!trim.is_running());
    }

    #[test]
    fn never_reverses() {
        let mut trim = TrimAnimation::new(RUN);
        trim.start(Duration::ZERO);
        let high = trim.advance(ms(1_500));
        // a stale timestamp must not pull the line back
        assert_eq!(trim.advance(ms(200)), high);
    }

    #[test]
    fn cannot_restart() {
        let mut trim = TrimAnimation::new(RUN);
        assert!(trim.start(Duration::ZERO));
        trim.advance(ms(2_000));
        assert!(!trim.start(ms(2_000)));
        assert_eq!(trim.fraction(), 1.0);
    }

    #[test]
    fn teardown_freezes_fraction() {
        let mut trim = TrimAnimation::new(RUN);
        trim.start(Duration::ZERO);
        let frozen = trim.advance(ms(500));
        trim.teardown();
        assert_eq!(trim.advance(ms(10_000)), frozen);
        trim.finish();
        assert_eq!(trim.fraction(), frozen);
    }

    #[test]
    fn zero_duration_completes_on_first_tick() {
        let mut trim = TrimAnimation::new(Duration::ZERO);
        trim.start(ms(10));
        assert_eq!(trim.advance(ms(10)), 1.0);
    }

    proptest! {
        #[test]
        fn fraction_is_monotonic_and_bounded(
            mut ticks in proptest::collection::vec(0u64..4_000, 1..60)
        ) {
            ticks.sort_unstable();
            let mut trim = TrimAnimation::new(RUN);
            trim.start(Duration::ZERO);
            let mut last = 0.0f32;
            for t in ticks {
                let f = trim.advance(ms(t));
                prop_assert!(f >= last);
                prop_assert!((0.0..=1.0).contains(&f));
                last = f;
            }
        }
    }
}
