use egui::{Color32, RichText, Ui};
use egui_phosphor::regular as icons;

use crate::ui::{theme, widgets};
use crate::view::overview::{CardKind, OverviewCard};

fn card_icon(kind: CardKind) -> (&'static str, Color32) {
    match kind {
        CardKind::ContractValue => (icons::CURRENCY_DOLLAR, Color32::from_rgb(0x25, 0x63, 0xeb)),
        CardKind::Invoiced => (icons::TREND_UP, Color32::from_rgb(0x16, 0xa3, 0x4a)),
        CardKind::Paid => (icons::CREDIT_CARD, Color32::from_rgb(0x93, 0x33, 0xea)),
        CardKind::Remaining => (icons::CLOCK, Color32::from_rgb(0xea, 0x58, 0x0c)),
    }
}

pub fn show_overview_cards(ui: &mut Ui, cards: &[OverviewCard]) {
    let p = theme::palette(ui.ctx());
    ui.columns(cards.len(), |cols| {
        for (col, card) in cols.iter_mut().zip(cards) {
            widgets::card_frame(col).show(col, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(card.title)
                            .font(theme::font_body())
                            .color(p.text_secondary),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let (icon, color) = card_icon(card.kind);
                        ui.label(RichText::new(icon).size(20.0).color(color));
                    });
                });
                ui.add_space(6.0);
                ui.label(
                    RichText::new(&card.value)
                        .size(22.0)
                        .strong()
                        .color(p.text_primary),
                );
                match &card.subtitle {
                    Some(subtitle) => {
                        ui.label(
                            RichText::new(subtitle)
                                .font(theme::font_small())
                                .color(p.text_dim),
                        );
                    }
                    // Keep card heights aligned.
                    None => {
                        ui.label(RichText::new(" ").font(theme::font_small()));
                    }
                }
            });
        }
    });
}
