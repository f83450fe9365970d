use eframe::egui::Color32;

/// Colours, fonts and spacing for the dashboard screen.
pub struct ThemeConfig {
    // Background gradient (top -> bottom), html colour strings for colorgrad
    pub background_gradient: &'static [&'static str],
    pub background_bands: usize,
    pub noise_dots: usize,
    /// Max brightness of a noise dot (0.0 - 1.0)
    pub noise_max_brightness: f32,

    pub text_color: Color32,
    pub text_color_subdued: Color32,

    pub text_font_size: f32,
    pub table_font_size: f32,
    pub table_header_font_size: f32,

    pub line_spacing: f32,
    pub table_column_spacing: f32,
    pub content_padding: i8,
    pub wallet_icon_size: f32,
    pub gap_after_chart: f32,
}

pub const THEME: ThemeConfig = ThemeConfig {
    background_gradient: &["#000000", "#808080"],
    background_bands: 64,
    noise_dots: 900,
    noise_max_brightness: 0.2,

    text_color: Color32::WHITE,
    text_color_subdued: Color32::GRAY,

    text_font_size: 14.0,
    table_font_size: 12.0,
    table_header_font_size: 11.0,

    line_spacing: 13.0,
    table_column_spacing: 24.0,
    content_padding: 16,
    wallet_icon_size: 20.0,
    gap_after_chart: 40.0,
};
