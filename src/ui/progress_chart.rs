use egui::{Pos2, Rect, RichText, Rounding, Sense, Shape, Stroke, Ui, Vec2};

use crate::format::format_percentage;
use crate::ui::{theme, widgets};
use crate::view::progress::{ProgressSeries, ACTUAL_COLOR, PLANNED_COLOR};

const CHART_HEIGHT: f32 = 300.0;
const AXIS_WIDTH: f32 = 36.0;
const LABEL_HEIGHT: f32 = 22.0;
const BAR_GAP: f32 = 4.0;
/// Share of a month's slot taken by its two bars.
const GROUP_FILL: f32 = 0.7;

/// Planned and actual bar rectangles for one month.
#[derive(Debug, Clone, Copy, PartialEq)]
struct GroupLayout {
    slot: Rect,
    planned: Rect,
    actual: Rect,
}

fn layout_groups(series: &ProgressSeries, plot: Rect) -> Vec<GroupLayout> {
    let n = series.groups.len();
    if n == 0 {
        return Vec::new();
    }
    let slot_w = plot.width() / n as f32;
    let bar_w = ((slot_w * GROUP_FILL - BAR_GAP) / 2.0).max(1.0);
    let y_for = |v: f64| {
        let frac = (v.max(0.0) / series.axis_max) as f32;
        plot.bottom() - frac * plot.height()
    };
    series
        .groups
        .iter()
        .enumerate()
        .map(|(i, g)| {
            let slot = Rect::from_min_max(
                Pos2::new(plot.left() + i as f32 * slot_w, plot.top()),
                Pos2::new(plot.left() + (i + 1) as f32 * slot_w, plot.bottom()),
            );
            let x0 = slot.center().x - bar_w - BAR_GAP / 2.0;
            let x1 = slot.center().x + BAR_GAP / 2.0;
            GroupLayout {
                slot,
                planned: Rect::from_min_max(
                    Pos2::new(x0, y_for(g.planned)),
                    Pos2::new(x0 + bar_w, plot.bottom()),
                ),
                actual: Rect::from_min_max(
                    Pos2::new(x1, y_for(g.actual)),
                    Pos2::new(x1 + bar_w, plot.bottom()),
                ),
            }
        })
        .collect()
}

pub fn show_progress_chart(ui: &mut Ui, series: &ProgressSeries) {
    let p = theme::palette(ui.ctx());
    widgets::card_frame(ui).show(ui, |ui| {
        ui.set_width(ui.available_width());
        widgets::section_heading(ui, "Project Progress", Some("Planned vs Actual Completion (%)"));

        if series.is_empty() {
            widgets::empty_state(ui, egui_phosphor::regular::CHART_BAR, "No progress reported yet");
            return;
        }

        let (response, painter) =
            ui.allocate_painter(Vec2::new(ui.available_width(), CHART_HEIGHT), Sense::hover());
        let rect = response.rect;
        let plot = Rect::from_min_max(
            Pos2::new(rect.left() + AXIS_WIDTH, rect.top() + 8.0),
            Pos2::new(rect.right() - 8.0, rect.bottom() - LABEL_HEIGHT),
        );

        // Grid and y axis labels
        let grid = Stroke::new(1.0, p.grid_line);
        for tick in series.ticks() {
            let y = plot.bottom() - (tick / series.axis_max) as f32 * plot.height();
            painter.extend(Shape::dashed_line(
                &[Pos2::new(plot.left(), y), Pos2::new(plot.right(), y)],
                grid,
                3.0,
                3.0,
            ));
            painter.text(
                Pos2::new(plot.left() - 6.0, y),
                egui::Align2::RIGHT_CENTER,
                format!("{tick:.0}"),
                theme::font_small(),
                p.text_dim,
            );
        }
        painter.line_segment([plot.left_bottom(), plot.right_bottom()], grid);

        let rounding = Rounding {
            nw: 4.0,
            ne: 4.0,
            sw: 0.0,
            se: 0.0,
        };
        let hover = response.hover_pos();
        for (group, layout) in series.groups.iter().zip(layout_groups(series, plot)) {
            if hover.is_some_and(|pos| layout.slot.contains(pos)) {
                painter.rect_filled(layout.slot, 0.0, p.grid_line.gamma_multiply(0.4));
            }
            painter.rect_filled(layout.planned, rounding, PLANNED_COLOR);
            painter.rect_filled(layout.actual, rounding, ACTUAL_COLOR);
            painter.text(
                Pos2::new(layout.slot.center().x, plot.bottom() + 4.0),
                egui::Align2::CENTER_TOP,
                &group.month,
                theme::font_small(),
                p.text_dim,
            );

            if hover.is_some_and(|pos| layout.slot.contains(pos)) {
                egui::show_tooltip_at_pointer(
                    ui.ctx(),
                    ui.layer_id(),
                    egui::Id::new(("progress-tip", group.month.as_str())),
                    |ui| {
                        ui.strong(&group.month);
                        ui.label(
                            RichText::new(format!("Planned: {}", format_percentage(group.planned)))
                                .color(PLANNED_COLOR),
                        );
                        ui.label(
                            RichText::new(format!("Actual: {}", format_percentage(group.actual)))
                                .color(ACTUAL_COLOR),
                        );
                    },
                );
            }
        }

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            legend_entry(ui, PLANNED_COLOR, "Planned");
            legend_entry(ui, ACTUAL_COLOR, "Actual");
        });
    });
}

pub(crate) fn legend_entry(ui: &mut Ui, color: egui::Color32, label: &str) {
    let (swatch, _) = ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
    ui.painter().rect_filled(swatch, 2.0, color);
    ui.label(
        RichText::new(label)
            .font(theme::font_small())
            .color(theme::palette(ui.ctx()).text_secondary),
    );
}
