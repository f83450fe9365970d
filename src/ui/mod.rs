mod asset_table;
mod background;
mod chart_view;
mod screens;
mod styles;
mod ui_text;
mod utils;

pub use background::Background;
pub use chart_view::ChartView;
pub use ui_text::UI_TEXT;

pub(crate) use screens::render_dashboard;
pub(crate) use utils::setup_custom_visuals;
