use egui::{Color32, RichText, Ui};

use crate::ui::theme;

pub const LOADING_MESSAGE: &str = "Loading project data...";
pub const ERROR_TITLE: &str = "Error Loading Projects";

pub fn show_loading(ui: &mut Ui) {
    let p = theme::palette(ui.ctx());
    ui.vertical_centered(|ui| {
        ui.add_space((ui.available_height() / 2.0 - 40.0).max(0.0));
        ui.add(egui::Spinner::new().size(48.0).color(p.accent));
        ui.add_space(12.0);
        ui.label(RichText::new(LOADING_MESSAGE).font(theme::font_body()).color(p.text_secondary));
    });
}

/// Terminal failure screen. No selector or dashboard is shown.
pub fn show_error(ui: &mut Ui, message: &str) {
    let p = theme::palette(ui.ctx());
    let dark = ui.visuals().dark_mode;
    let (border, title, body) = if dark {
        (
            Color32::from_rgb(0x99, 0x1b, 0x1b),
            Color32::from_rgb(0xf8, 0x71, 0x71),
            Color32::from_rgb(0xef, 0x44, 0x44),
        )
    } else {
        (
            Color32::from_rgb(0xfe, 0xca, 0xca),
            Color32::from_rgb(0x7f, 0x1d, 0x1d),
            Color32::from_rgb(0xb9, 0x1c, 0x1c),
        )
    };
    ui.vertical_centered(|ui| {
        ui.add_space((ui.available_height() / 2.0 - 60.0).max(0.0));
        egui::Frame::none()
            .fill(p.bg_card)
            .stroke(egui::Stroke::new(1.0, border))
            .rounding(egui::Rounding::same(theme::CARD_ROUNDING))
            .inner_margin(egui::Margin::same(32.0))
            .show(ui, |ui| {
                ui.set_max_width(420.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(ERROR_TITLE).font(theme::font_heading()).strong().color(title));
                    ui.add_space(6.0);
                    ui.label(RichText::new(message).font(theme::font_body()).color(body));
                });
            });
    });
}
