use std::time::Duration;

use crate::utils::AppInstant;

/// Converts wall time since mount into the logical time the engine runs on.
/// `speed` > 1 plays the presentation faster.
#[derive(Clone, Copy, Debug)]
pub struct MountClock {
    mounted_at: AppInstant,
    speed: f64,
}

impl MountClock {
    pub fn start(speed: f64) -> Self {
        let speed = if speed.is_finite() && speed > 0.0 {
            speed
        } else {
            log::warn!("Invalid speed {}; playing at 1.0x", speed);
            1.0
        };
        Self {
            mounted_at: AppInstant::now(),
            speed,
        }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Logical time since mount.
    pub fn now(&self) -> Duration {
        self.to_logical(self.mounted_at.elapsed())
    }

    pub fn to_logical(&self, real: Duration) -> Duration {
        Duration::try_from_secs_f64(real.as_secs_f64() * self.speed).unwrap_or(Duration::MAX)
    }

    /// How long to wait in wall time for `logical` to pass.
    pub fn to_real(&self, logical: Duration) -> Duration {
        Duration::try_from_secs_f64(logical.as_secs_f64() / self.speed).unwrap_or(Duration::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_scales_both_ways() {
        let clock = MountClock::start(2.0);
        assert_eq!(clock.to_logical(Duration::from_secs(3)), Duration::from_secs(6));
        assert_eq!(clock.to_real(Duration::from_secs(6)), Duration::from_secs(3));
    }

    #[test]
    fn bad_speed_falls_back_to_real_time() {
        for speed in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert_eq!(MountClock::start(speed).speed(), 1.0);
        }
    }

    #[test]
    fn logical_time_starts_near_zero() {
        let clock = MountClock::start(1.0);
        assert!(clock.now() < Duration::from_secs(1));
    }
}
