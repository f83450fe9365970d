use eframe::egui::{Align2, Color32, FontId, RichText, Sense, Ui, Vec2};

use crate::{
    config::THEME,
    engine::TypedText,
    models::Chain,
    ui::UI_TEXT,
};

pub trait ChainBadge {
    fn color(&self) -> Color32;
    fn icon(&self) -> &'static str;
}

impl ChainBadge for Chain {
    fn color(&self) -> Color32 {
        match self {
            Self::Ethereum => Color32::from_rgb(98, 126, 234),
            Self::Solana => Color32::from_rgb(153, 69, 255),
            Self::Bitcoin => Color32::from_rgb(247, 147, 26),
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Self::Ethereum => &UI_TEXT.icon_ethereum,
            Self::Solana => &UI_TEXT.icon_solana,
            Self::Bitcoin => &UI_TEXT.icon_bitcoin,
        }
    }
}

pub fn apply_opacity(color: Color32, factor: f32) -> Color32 {
    color.linear_multiply(factor.clamp(0.0, 1.0))
}

pub(crate) fn mono(text: impl Into<String>, size: f32, color: Color32) -> RichText {
    RichText::new(text.into()).monospace().size(size).color(color)
}

pub(crate) trait UiStyleExt {
    /// The revealed prefix of a typed line. Nothing is drawn until the line exists.
    fn typed_line(&mut self, line: Option<&TypedText>);
    /// Round chain badge with its icon centred inside.
    fn chain_badge(&mut self, chain: Chain);
}

impl UiStyleExt for Ui {
    fn typed_line(&mut self, line: Option<&TypedText>) {
        if let Some(line) = line {
            self.label(mono(line.displayed(), THEME.text_font_size, THEME.text_color));
        }
    }

    fn chain_badge(&mut self, chain: Chain) {
        let size = THEME.wallet_icon_size;
        let (rect, _) = self.allocate_exact_size(Vec2::splat(size), Sense::hover());
        if self.is_rect_visible(rect) {
            let painter = self.painter();
            painter.circle_filled(rect.center(), size / 2.0, chain.color());
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                chain.icon(),
                FontId::proportional(size * 0.6),
                Color32::WHITE,
            );
        }
    }
}
