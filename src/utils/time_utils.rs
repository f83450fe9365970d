use std::{fmt::Display, time::Duration};

use chrono::{DateTime, Local, TimeZone};

/// Monotonic instant that also works on wasm32.
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    /// `MM-dd-yyyy`, the typed date line.
    pub const CLOCK_DATE_FORMAT: &str = "%m-%d-%Y";
    /// `hh:mm a`, the typed time line.
    pub const CLOCK_TIME_FORMAT: &str = "%I:%M %p";
    /// Leading x-axis label.
    pub const AXIS_DATE_FORMAT: &str = "%m/%d";
    /// Hour labels along the x-axis.
    pub const AXIS_HOUR_FORMAT: &str = "%H:00";
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

    pub fn now_local() -> DateTime<Local> {
        Local::now()
    }

    pub fn clock_date_string<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        dt.format(Self::CLOCK_DATE_FORMAT).to_string()
    }

    pub fn clock_time_string<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        dt.format(Self::CLOCK_TIME_FORMAT).to_string()
    }
}

/// Compact elapsed-time display for logs and the preview table, e.g. `2.10s`.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.2}s", elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 13, 14, 5, 0).unwrap()
    }

    #[test]
    fn clock_strings_use_dashboard_formats() {
        let dt = sample();
        assert_eq!(TimeUtils::clock_date_string(&dt), "12-13-2024");
        assert_eq!(TimeUtils::clock_time_string(&dt), "02:05 PM");
    }

    #[test]
    fn elapsed_is_two_decimals() {
        assert_eq!(format_elapsed(Duration::from_millis(2100)), "2.10s");
        assert_eq!(format_elapsed(Duration::ZERO), "0.00s");
    }
}
