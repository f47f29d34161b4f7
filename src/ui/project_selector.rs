use egui::{RichText, Ui};

use crate::ui::{theme, widgets};
use crate::view::header::{ProjectOption, ProjectSummary};

/// Picker, status badge and summary fields. Returns the index of a newly
/// picked project.
pub fn show_project_selector(
    ui: &mut Ui,
    options: &[ProjectOption],
    selected_index: usize,
    summary: &ProjectSummary,
) -> Option<usize> {
    let p = theme::palette(ui.ctx());
    let mut picked = None;

    widgets::card_frame(ui).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    RichText::new("Select Project")
                        .font(theme::font_body())
                        .strong()
                        .color(p.text_secondary),
                );
                egui::ComboBox::from_id_salt("project-select")
                    .width(320.0)
                    .selected_text(summary.selector_label.as_str())
                    .show_ui(ui, |ui| {
                        for (index, option) in options.iter().enumerate() {
                            let selected = index == selected_index;
                            if ui.selectable_label(selected, option.label.as_str()).clicked() && !selected {
                                picked = Some(index);
                            }
                        }
                    });
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new("Project Status")
                            .font(theme::font_body())
                            .strong()
                            .color(p.text_secondary),
                    );
                    widgets::status_badge(ui, &summary.status);
                });
            });
        });

        ui.add_space(12.0);
        ui.separator();
        ui.add_space(8.0);

        ui.columns(summary.fields.len(), |cols| {
            for (col, (label, value)) in cols.iter_mut().zip(&summary.fields) {
                col.label(
                    RichText::new(label.to_uppercase())
                        .font(theme::font_small())
                        .color(p.text_dim),
                );
                col.label(
                    RichText::new(value)
                        .font(theme::font_body())
                        .strong()
                        .color(p.text_primary),
                );
            }
        });
    });

    picked
}
