use eframe::egui::{Color32, Context, Visuals};

use crate::config::THEME;

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    // Panels stay transparent so the painted background shows through
    visuals.window_fill = Color32::BLACK;
    visuals.panel_fill = Color32::TRANSPARENT;

    visuals.widgets.noninteractive.fg_stroke.color = THEME.text_color;
    visuals.widgets.inactive.fg_stroke.color = THEME.text_color;

    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}

pub fn to_egui_color(colorgrad_color: colorgrad::Color) -> Color32 {
    let rgba8 = colorgrad_color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba8[0], rgba8[1], rgba8[2], 255)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_gradient_colours_opaque() {
        let gray = colorgrad::Color::from_rgba8(128, 128, 128, 10);
        assert_eq!(to_egui_color(gray), Color32::from_rgb(128, 128, 128));
    }
}
