use std::time::Duration;

/// Timings for the per-component animations (everything except the stage schedule).
pub struct AnimationConfig {
    /// Gap between two typed characters.
    pub char_interval: Duration,
    /// How long the chart line takes to draw itself.
    pub trim_duration: Duration,
    /// Gap between two asset rows appearing.
    pub row_delay: Duration,
    /// Fade-in length of a single asset row (rendering only).
    pub row_fade: Duration,
}

pub const ANIMATION: AnimationConfig = AnimationConfig {
    char_interval: Duration::from_millis(50),
    trim_duration: Duration::from_secs(2),
    row_delay: Duration::from_millis(500),
    row_fade: Duration::from_millis(500),
};
