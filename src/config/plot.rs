//! Price chart visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Fixed display window. Independent of the data actually plotted.
    pub declared_min: f64,
    pub declared_max: f64,
    /// Portfolio value history plotted by default
    pub portfolio_points: &'static [f64],

    /// Height of the line area in points
    pub height: f32,
    /// Space on the right of the line reserved for y-axis labels
    pub right_gutter: f32,
    /// Height of the x-axis label row below the line area
    pub x_label_band: f32,

    /// Number of horizontal grid lines (and y-axis labels)
    pub grid_lines: usize,
    /// Hour labels after the leading date label
    pub x_hour_labels: usize,

    // --- LINE ---
    pub line_color: Color32,
    pub line_width: f32,
    pub glow_width: f32,
    pub glow_opacity: f32,
    pub glow_offset_y: f32,

    // --- AXES ---
    pub grid_color: Color32,
    pub label_color: Color32,
    pub y_label_font_size: f32,
    pub x_label_font_size: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    declared_min: 1_000_000.0,
    declared_max: 1_400_000.0,
    portfolio_points: &[
        1_150_000.0, 1_160_000.0, 1_180_000.0, 1_190_000.0, 1_200_000.0,
        1_210_000.0, 1_220_000.0, 1_215_000.0, 1_200_000.0, 1_190_000.0,
        1_185_000.0, 1_195_000.0, 1_200_000.0, 1_210_000.0, 1_220_000.0,
    ],

    height: 200.0,
    right_gutter: 30.0,
    x_label_band: 18.0,

    grid_lines: 5,
    x_hour_labels: 3,

    line_color: Color32::GREEN,
    line_width: 2.0,
    glow_width: 8.0,
    glow_opacity: 0.25,
    glow_offset_y: 10.0,

    grid_color: Color32::from_rgba_premultiplied(26, 26, 26, 51), // gray @ 20%
    label_color: Color32::GRAY,
    y_label_font_size: 8.0,
    x_label_font_size: 10.0,
};
