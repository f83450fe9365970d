use eframe::egui::{Align2, FontId, Rect, Sense, Shape, Stroke, Ui, Vec2, pos2, vec2};

use crate::{
    app::ChartData,
    config::PLOT_CONFIG,
    geometry::{AxisLabel, ChartPath, project_to_canvas, x_axis_labels, y_axis_labels},
    models::PriceSeries,
    ui::styles::apply_opacity,
};

/// Render cache for the price chart. The projected path only changes when the plot area
/// is resized; per frame only the trim is recomputed.
#[derive(Default)]
pub struct ChartView {
    path: Option<(Vec2, ChartPath)>,
    y_labels: Vec<AxisLabel>,
    x_labels: Vec<AxisLabel>,
}

impl ChartView {
    pub fn new(chart: &ChartData, history: &PriceSeries) -> Self {
        Self {
            path: None,
            y_labels: y_axis_labels(chart.window, PLOT_CONFIG.grid_lines),
            x_labels: x_axis_labels(history, PLOT_CONFIG.x_hour_labels),
        }
    }

    /// Canvas-space path for a plot area of `size`, rebuilt on resize.
    pub fn path_for(&mut self, chart: &ChartData, size: Vec2) -> &ChartPath {
        if !matches!(&self.path, Some((cached, _)) if *cached == size) {
            self.path = None;
        }
        let (_, path) = self.path.get_or_insert_with(|| {
            let path = crate::trace_time!("Rebuild chart path", 500, {
                ChartPath::new(project_to_canvas(&chart.values, chart.window, size.x, size.y))
            });
            (size, path)
        });
        path
    }

    pub fn render(&mut self, ui: &mut Ui, chart: &ChartData, trim_fraction: f32) {
        let width = ui.available_width();
        let total = vec2(width, PLOT_CONFIG.height + PLOT_CONFIG.x_label_band);
        let (rect, _) = ui.allocate_exact_size(total, Sense::hover());
        if !ui.is_rect_visible(rect) {
            return;
        }
        let plot_rect = Rect::from_min_size(
            rect.min,
            vec2((width - PLOT_CONFIG.right_gutter).max(0.0), PLOT_CONFIG.height),
        );
        let painter = ui.painter_at(rect);

        // Grid and y labels
        let grid_stroke = Stroke::new(1.0, PLOT_CONFIG.grid_color);
        for label in &self.y_labels {
            let y = plot_rect.top() + label.fraction * plot_rect.height();
            painter.hline(plot_rect.x_range(), y, grid_stroke);
            painter.text(
                pos2(plot_rect.right() + 4.0, y),
                Align2::LEFT_CENTER,
                &label.text,
                FontId::monospace(PLOT_CONFIG.y_label_font_size),
                PLOT_CONFIG.label_color,
            );
        }

        // X labels
        for (i, label) in self.x_labels.iter().enumerate() {
            let anchor = match i {
                0 => Align2::LEFT_TOP,
                _ if label.fraction >= 1.0 => Align2::RIGHT_TOP,
                _ => Align2::CENTER_TOP,
            };
            painter.text(
                pos2(
                    plot_rect.left() + label.fraction * plot_rect.width(),
                    plot_rect.bottom() + 4.0,
                ),
                anchor,
                &label.text,
                FontId::monospace(PLOT_CONFIG.x_label_font_size),
                PLOT_CONFIG.label_color,
            );
        }

        // Line with glow underneath
        let origin = plot_rect.min.to_vec2();
        let trimmed: Vec<_> = self
            .path_for(chart, plot_rect.size())
            .trim(trim_fraction)
            .into_iter()
            .map(|p| p + origin)
            .collect();
        if trimmed.len() < 2 {
            return;
        }
        let glow: Vec<_> = trimmed
            .iter()
            .map(|p| *p + vec2(0.0, PLOT_CONFIG.glow_offset_y))
            .collect();
        painter.add(Shape::line(
            glow,
            Stroke::new(
                PLOT_CONFIG.glow_width,
                apply_opacity(PLOT_CONFIG.line_color, PLOT_CONFIG.glow_opacity),
            ),
        ));
        painter.add(Shape::line(
            trimmed,
            Stroke::new(PLOT_CONFIG.line_width, PLOT_CONFIG.line_color),
        ));
    }
}
