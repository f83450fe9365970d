use std::time::Duration;

use eframe::egui::{CentralPanel, Context, Frame, LayerId, Margin, ScrollArea, Ui};

use crate::{
    app::{Presentation, Section},
    config::THEME,
    ui::{Background, ChartView, asset_table::render_asset_table, styles::UiStyleExt},
};

/// Draws the whole dashboard for one frame. Sections below the current stage take no space.
pub(crate) fn render_dashboard(
    ctx: &Context,
    presentation: &Presentation,
    chart_view: &mut ChartView,
    background: &Background,
    now: Duration,
) {
    background.paint(&ctx.layer_painter(LayerId::background()), ctx.content_rect());

    CentralPanel::default()
        .frame(Frame::NONE.inner_margin(Margin::same(THEME.content_padding)))
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.spacing_mut().item_spacing.y = THEME.line_spacing / 2.0;
                render_clock(ui, presentation);
                render_wallets(ui, presentation);
                if presentation.is_visible(Section::Chart) {
                    ui.add_space(THEME.line_spacing);
                    chart_view.render(ui, presentation.chart(), presentation.trim_fraction());
                    ui.add_space(THEME.gap_after_chart);
                }
                if presentation.is_visible(Section::Totals) {
                    ui.typed_line(presentation.total_line());
                    ui.typed_line(presentation.asset_count_line());
                    ui.add_space(THEME.line_spacing);
                }
                if presentation.is_visible(Section::Table) {
                    render_asset_table(ui, presentation, now);
                }
            });
        });
}

fn render_clock(ui: &mut Ui, presentation: &Presentation) {
    if presentation.is_visible(Section::Date) {
        ui.typed_line(presentation.date_line());
    }
    if presentation.is_visible(Section::Time) {
        ui.typed_line(presentation.time_line());
    }
    ui.add_space(THEME.line_spacing);
}

fn render_wallets(ui: &mut Ui, presentation: &Presentation) {
    for (index, wallet) in presentation.portfolio().wallets.iter().enumerate() {
        if !presentation.is_visible(Section::Wallet(index)) {
            continue;
        }
        ui.horizontal(|ui| {
            ui.chain_badge(wallet.chain);
            ui.typed_line(presentation.wallet_line(index));
        });
    }
}
