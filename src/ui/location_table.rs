use egui::{RichText, Ui};

use crate::ui::data_table::show_table;
use crate::ui::{theme, widgets};
use crate::view::tables::{LocationRow, TableView};

const COMPLETION_BAR_WIDTH: f32 = 120.0;

pub fn show_location_table(ui: &mut Ui, caption: &str, view: &TableView<LocationRow>) {
    let p = theme::palette(ui.ctx());
    let dark = ui.visuals().dark_mode;
    widgets::card_frame(ui).show(ui, |ui| {
        ui.set_width(ui.available_width());
        widgets::section_heading(ui, "All Locations", Some(caption));
        show_table(
            ui,
            "location-table",
            egui_phosphor::regular::MAP_PIN,
            &["Location", "Status", "Completion", "Last Updated"],
            view,
            44.0,
            |ui, col, row| match col {
                0 => widgets::two_line_cell(ui, &row.name, &row.address),
                1 => {
                    widgets::status_badge(ui, &row.status);
                }
                2 => {
                    let bar = egui::ProgressBar::new(row.completion_fraction)
                        .desired_width(COMPLETION_BAR_WIDTH.min(ui.available_width() - 44.0).max(20.0))
                        .desired_height(8.0)
                        .fill(theme::tone_fill(row.completion_tone, dark))
                        .rounding(egui::Rounding::same(4.0));
                    ui.add(bar);
                    ui.label(
                        RichText::new(&row.completion_label)
                            .font(theme::font_body())
                            .strong()
                            .color(p.text_secondary),
                    );
                }
                _ => {
                    ui.label(
                        RichText::new(&row.last_updated)
                            .font(theme::font_body())
                            .color(p.text_dim),
                    );
                }
            },
        );
    });
}
