use std::time::Duration;

use eframe::egui::{Align, Grid, Layout, Ui};
use strum::IntoEnumIterator;

use crate::{
    app::Presentation,
    config::THEME,
    models::AssetColumn,
    ui::styles::{apply_opacity, mono},
};

/// Header plus every revealed row, each fading in from when it appeared.
pub(crate) fn render_asset_table(ui: &mut Ui, presentation: &Presentation, now: Duration) {
    let assets = &presentation.portfolio().assets;
    Grid::new("asset_table")
        .num_columns(AssetColumn::iter().count())
        .spacing([THEME.table_column_spacing, 4.0])
        .show(ui, |ui| {
            for column in AssetColumn::iter() {
                cell(ui, column, column.to_string(), THEME.table_header_font_size, 1.0, true);
            }
            ui.end_row();

            for (index, row) in assets.iter().enumerate() {
                if !presentation.rows().is_row_visible(index) {
                    break;
                }
                let opacity = presentation.row_opacity(index, now);
                for column in AssetColumn::iter() {
                    cell(ui, column, column.cell(row), THEME.table_font_size, opacity, false);
                }
                ui.end_row();
            }
        });
}

fn cell(ui: &mut Ui, column: AssetColumn, text: String, size: f32, opacity: f32, header: bool) {
    let base = if header { THEME.text_color_subdued } else { THEME.text_color };
    let text = mono(text, size, apply_opacity(base, opacity));
    if column.is_numeric() {
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| ui.label(text));
    } else {
        ui.label(text);
    }
}
