//! Chart geometry: maps a price series into canvas space and trims the resulting path.

mod axis;
mod path;
mod projection;

pub use axis::{AxisLabel, x_axis_labels, y_axis_labels};
pub use path::{ChartPath, progressive_trim};
pub use projection::{DisplayWindow, project_to_canvas};
