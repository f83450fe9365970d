use colorgrad::Gradient;
use eframe::egui::{Color32, Painter, Pos2, Rect, pos2, vec2};
use rand::Rng;

use crate::{config::THEME, ui::utils::to_egui_color};

#[derive(Clone, Copy, Debug, PartialEq)]
struct NoiseDot {
    // position as a fraction of the screen, so resizes don't need a regenerate
    at: Pos2,
    color: Color32,
}

/// Vertical gradient with a sparse noise overlay. Generated once per mount.
pub struct Background {
    bands: Vec<Color32>,
    dots: Vec<NoiseDot>,
}

impl Background {
    pub fn generate(rng: &mut impl Rng) -> Self {
        Self {
            bands: gradient_bands(THEME.background_gradient, THEME.background_bands),
            dots: noise_dots(rng, THEME.noise_dots, THEME.noise_max_brightness),
        }
    }

    pub fn paint(&self, painter: &Painter, rect: Rect) {
        if self.bands.is_empty() {
            painter.rect_filled(rect, 0.0, Color32::BLACK);
        } else {
            let band_height = rect.height() / self.bands.len() as f32;
            for (i, color) in self.bands.iter().enumerate() {
                let top = rect.top() + i as f32 * band_height;
                // overlap by a pixel to hide seams
                let band = Rect::from_min_size(
                    pos2(rect.left(), top),
                    vec2(rect.width(), band_height + 1.0),
                );
                painter.rect_filled(band.intersect(rect), 0.0, *color);
            }
        }
        for dot in &self.dots {
            let center = pos2(
                rect.left() + dot.at.x * rect.width(),
                rect.top() + dot.at.y * rect.height(),
            );
            painter.rect_filled(Rect::from_center_size(center, vec2(1.0, 1.0)), 0.0, dot.color);
        }
    }
}

fn gradient_bands(html_colors: &[&str], count: usize) -> Vec<Color32> {
    let gradient = match colorgrad::GradientBuilder::new()
        .html_colors(html_colors)
        .build::<colorgrad::LinearGradient>()
    {
        Ok(gradient) => gradient,
        Err(e) => {
            log::warn!("Background gradient unavailable ({}); using a flat fill", e);
            return Vec::new();
        }
    };
    (0..count)
        .map(|i| {
            let t = if count > 1 { i as f32 / (count - 1) as f32 } else { 0.0 };
            to_egui_color(gradient.at(t))
        })
        .collect()
}

fn noise_dots(rng: &mut impl Rng, count: usize, max_brightness: f32) -> Vec<NoiseDot> {
    let max_level = (max_brightness.clamp(0.0, 1.0) * 255.0) as u8;
    (0..count)
        .map(|_| {
            let level = rng.random_range(0..=max_level);
            NoiseDot {
                at: pos2(rng.random::<f32>(), rng.random::<f32>()),
                color: Color32::from_rgba_unmultiplied(255, 255, 255, level),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn bands_run_black_to_gray() {
        let bands = gradient_bands(&["#000000", "#808080"], 5);
        assert_eq!(bands.len(), 5);
        assert_eq!(bands[0], Color32::from_rgb(0, 0, 0));
        assert_eq!(bands[4], Color32::from_rgb(128, 128, 128));
    }

    #[test]
    fn bad_colour_falls_back_to_flat() {
        assert!(gradient_bands(&["not-a-colour"], 4).is_empty());
    }

    #[test]
    fn noise_is_fixed_once_generated() {
        let mut rng = StdRng::seed_from_u64(11);
        let dots = noise_dots(&mut rng, 200, 0.2);
        assert_eq!(dots.len(), 200);
        for dot in &dots {
            assert!((0.0..1.0).contains(&dot.at.x) && (0.0..1.0).contains(&dot.at.y));
            assert!(dot.color.a() <= 51);
        }
        let again = noise_dots(&mut StdRng::seed_from_u64(11), 200, 0.2);
        assert_eq!(dots, again);
    }
}
