use egui::{RichText, Ui};
use egui_phosphor::regular as icons;

use crate::state::ActivityTab;
use crate::ui::data_table::show_table;
use crate::ui::{theme, widgets};
use crate::view::tabs::{ActivityView, TabHeader};

const ROW_HEIGHT: f32 = 36.0;

/// Tab strip plus the active tab's list. Returns a newly clicked tab.
pub fn show_activity_tabs(
    ui: &mut Ui,
    headers: &[TabHeader],
    active: ActivityTab,
    view: &ActivityView,
) -> Option<ActivityTab> {
    let mut clicked = None;
    widgets::card_frame(ui).show(ui, |ui| {
        ui.set_width(ui.available_width());
        widgets::section_heading(ui, "Project Activity", None);

        ui.horizontal(|ui| {
            for header in headers {
                if tab_button(ui, header, header.tab == active) && header.tab != active {
                    clicked = Some(header.tab);
                }
            }
        });
        ui.separator();
        ui.add_space(6.0);

        show_activity(ui, view);
    });
    clicked
}

/// Draws one tab; returns `true` when clicked.
fn tab_button(ui: &mut Ui, header: &TabHeader, selected: bool) -> bool {
    let p = theme::palette(ui.ctx());
    let dark = ui.visuals().dark_mode;
    let color = if selected { p.accent } else { p.text_secondary };
    let response = ui
        .horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 6.0;
            let label = ui.add(
                egui::Button::new(RichText::new(header.label).font(theme::font_body()).strong().color(color))
                    .selected(selected)
                    .frame(selected),
            );
            if header.count > 0 {
                let (fg, bg) = if selected {
                    theme::tone_colors(crate::status::StatusTone::Informational, dark)
                } else {
                    (p.text_secondary, p.bg_track)
                };
                widgets::pill(ui, &header.count.to_string(), fg, bg);
            }
            label
        })
        .inner;
    response.clicked()
}

fn show_activity(ui: &mut Ui, view: &ActivityView) {
    let p = theme::palette(ui.ctx());
    let text = |ui: &mut Ui, s: &str| {
        ui.label(RichText::new(s).font(theme::font_body()).color(p.text_secondary));
    };
    let strong = |ui: &mut Ui, s: &str| {
        ui.label(RichText::new(s).font(theme::font_body()).strong().color(p.text_primary));
    };

    match view {
        ActivityView::Rfis(rows) => show_table(
            ui,
            "rfi-table",
            icons::WARNING_CIRCLE,
            &["RFI #", "Subject", "Category", "Days Open", "Assigned To", "Status"],
            rows,
            ROW_HEIGHT,
            |ui, col, row| match col {
                0 => strong(ui, &row.number),
                1 => strong(ui, &row.subject),
                2 => text(ui, &row.category),
                3 => {
                    widgets::status_badge(ui, &row.days_open);
                }
                4 => text(ui, &row.assigned_to),
                _ => {
                    widgets::status_badge(ui, &row.status);
                }
            },
        ),
        ActivityView::Submittals(rows) => show_table(
            ui,
            "submittal-table",
            icons::FILE_TEXT,
            &["Item", "Description", "Category", "Due Date", "Status"],
            rows,
            ROW_HEIGHT,
            |ui, col, row| match col {
                0 => strong(ui, &row.item),
                1 => text(ui, &row.description),
                2 => text(ui, &row.category),
                3 => text(ui, &row.due_date),
                _ => {
                    widgets::status_badge(ui, &row.status);
                }
            },
        ),
        ActivityView::ActionItems(rows) => show_table(
            ui,
            "action-item-table",
            icons::CHECK_SQUARE,
            &["Description", "Category", "Owner", "Due Date", "Status"],
            rows,
            ROW_HEIGHT,
            |ui, col, row| match col {
                0 => strong(ui, &row.description),
                1 => text(ui, &row.category),
                2 => text(ui, &row.owner),
                3 => text(ui, &row.due_date),
                _ => {
                    widgets::status_badge(ui, &row.status);
                }
            },
        ),
    }
}
