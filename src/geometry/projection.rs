use eframe::egui::{Pos2, pos2};

use crate::utils::remap;

/// Fixed [min, max] value window the chart is drawn against. Independent of the data, so
/// samples outside it land outside the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayWindow {
    pub min: f64,
    pub max: f64,
}

impl DisplayWindow {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// No usable height: every value would divide by zero.
    pub fn is_degenerate(&self) -> bool {
        let span = self.span();
        !span.is_finite() || span.abs() < f64::EPSILON
    }

    /// Value sitting `fraction` of the way from min (0.0) to max (1.0).
    pub fn value_at(&self, fraction: f64) -> f64 {
        self.min + self.span() * fraction
    }

    /// Canvas y for `value`: max -> 0, min -> height, unclamped.
    /// A degenerate window puts everything on the mid line.
    pub fn project_y(&self, value: f64, height: f32) -> f32 {
        if self.is_degenerate() {
            return height / 2.0;
        }
        remap(value, self.min, self.max, height as f64, 0.0) as f32
    }
}

/// Sample index -> x spread evenly over `width` (a lone sample sits at 0), value -> y via
/// the window. Origin is the top-left of the canvas.
pub fn project_to_canvas(
    values: &[f64],
    window: DisplayWindow,
    width: f32,
    height: f32,
) -> Vec<Pos2> {
    let last_index = values.len().saturating_sub(1);
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let x = if last_index == 0 {
                0.0
            } else {
                index as f32 / last_index as f32 * width
            };
            pos2(x, window.project_y(value, height))
        })
        .collect()
}
