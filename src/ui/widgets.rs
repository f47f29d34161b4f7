use egui::{Color32, Frame, Margin, RichText, Rounding, Stroke, Ui};

use crate::ui::theme;
use crate::view::tables::Badge;

/// Bordered white (or slate) card that hosts one dashboard section.
pub fn card_frame(ui: &Ui) -> Frame {
    let p = theme::palette(ui.ctx());
    Frame {
        fill: p.bg_card,
        rounding: Rounding::same(theme::CARD_ROUNDING),
        inner_margin: Margin::same(theme::CARD_PADDING),
        outer_margin: Margin::ZERO,
        stroke: Stroke::new(1.0, p.border),
        shadow: egui::epaint::Shadow::NONE,
    }
}

/// Title plus an optional dim subtitle.
pub fn section_heading(ui: &mut Ui, title: &str, subtitle: Option<&str>) {
    let p = theme::palette(ui.ctx());
    ui.label(
        RichText::new(title)
            .font(theme::font_heading())
            .strong()
            .color(p.text_primary),
    );
    if let Some(subtitle) = subtitle {
        ui.label(
            RichText::new(subtitle)
                .font(theme::font_small())
                .color(p.text_dim),
        );
    }
    ui.add_space(10.0);
}

/// Rounded pill showing a status in its tone's colors.
pub fn status_badge(ui: &mut Ui, badge: &Badge) -> egui::Response {
    let dark = ui.visuals().dark_mode;
    let (fg, bg) = theme::tone_colors(badge.tone, dark);
    pill(ui, &badge.text, fg, bg)
}

pub fn pill(ui: &mut Ui, text: &str, fg: Color32, bg: Color32) -> egui::Response {
    Frame::none()
        .fill(bg)
        .rounding(Rounding::same(theme::BADGE_ROUNDING))
        .inner_margin(Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(
                RichText::new(text)
                    .font(theme::font_small())
                    .strong()
                    .color(fg),
            );
        })
        .response
}

/// Centered placeholder used instead of an empty table.
pub fn empty_state(ui: &mut Ui, icon: &str, message: &str) {
    let p = theme::palette(ui.ctx());
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(RichText::new(icon).size(32.0).color(p.text_dim));
        ui.add_space(4.0);
        ui.label(RichText::new(message).font(theme::font_body()).color(p.text_dim));
        ui.add_space(24.0);
    });
}

/// Dim uppercase column header.
pub fn column_header(ui: &mut Ui, text: &str) {
    let p = theme::palette(ui.ctx());
    ui.label(
        RichText::new(text.to_uppercase())
            .font(theme::font_small())
            .strong()
            .color(p.text_dim),
    );
}

/// Primary line with a dim secondary line below it.
pub fn two_line_cell(ui: &mut Ui, primary: &str, secondary: &str) {
    let p = theme::palette(ui.ctx());
    ui.vertical(|ui| {
        ui.spacing_mut().item_spacing.y = 1.0;
        ui.label(
            RichText::new(primary)
                .font(theme::font_body())
                .strong()
                .color(p.text_primary),
        );
        ui.label(
            RichText::new(secondary)
                .font(theme::font_small())
                .color(p.text_dim),
        );
    });
}
