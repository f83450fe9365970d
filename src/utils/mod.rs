mod format;
mod maths_utils;
mod perf;
pub mod time_utils;

pub use format::{
    format_abbreviated, format_currency, format_decimal, format_fixed, format_integer,
};
pub use time_utils::{AppInstant, TimeUtils};

pub(crate) use maths_utils::{ease_in_out, progress_fraction, remap, value_bounds};
