use egui::{RichText, Ui};
use egui_phosphor::regular as icons;

use crate::ui::theme;

/// Title bar. Returns `true` when the dark-mode toggle was clicked.
pub fn show_header(ui: &mut Ui, dark_mode: bool) -> bool {
    let p = theme::palette(ui.ctx());
    let mut toggled = false;
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.spacing_mut().item_spacing.y = 2.0;
            ui.label(
                RichText::new("Customer Portal")
                    .font(theme::font_title())
                    .strong()
                    .color(p.text_primary),
            );
            ui.label(
                RichText::new("Real-time project visibility and updates")
                    .font(theme::font_body())
                    .color(p.text_dim),
            );
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let (icon, hint) = if dark_mode {
                (icons::SUN, "Switch to light mode")
            } else {
                (icons::MOON, "Switch to dark mode")
            };
            let button = egui::Button::new(RichText::new(icon).size(20.0).color(p.text_secondary))
                .frame(false);
            if ui.add(button).on_hover_text(hint).clicked() {
                toggled = true;
            }
        });
    });
    toggled
}
