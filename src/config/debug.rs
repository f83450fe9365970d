//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every reveal stage as it fires.
    pub log_stage_changes: bool,

    /// Log when a typed line finishes.
    pub log_typed_text: bool,

    /// Log chart trim start and completion.
    pub log_chart_trim: bool,

    /// Log each asset row as it is revealed.
    pub log_row_reveal: bool,

    /// Log timeline cancellation on teardown.
    pub log_timeline: bool,

    /// Activate trace_time macro (scope-level timing)
    pub log_performance: bool,

    /// Summary of the generated sample data at mount.
    pub log_startup: bool,
}

pub const DF: LogFlags = LogFlags {
    log_startup: true,
    log_stage_changes: true,
    log_chart_trim: true,

    log_typed_text: false,
    log_row_reveal: false,
    log_timeline: false,
    log_performance: false,
};
