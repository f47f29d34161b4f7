use std::f32::consts::TAU;

use egui::{Color32, Pos2, RichText, Sense, Shape, Stroke, Ui, Vec2};

use crate::format::format_currency;
use crate::ui::progress_chart::legend_entry;
use crate::ui::{theme, widgets};
use crate::view::financial::FinancialSummary;

const CHART_HEIGHT: f32 = 260.0;
const OUTER_RADIUS: f32 = 100.0;
const INNER_RADIUS: f32 = 60.0;
const PADDING_ANGLE: f32 = 2.0 * TAU / 360.0;
/// Arc segments per full turn.
const SEGMENTS: f32 = 180.0;

/// Start and end angle (radians, clockwise from 12 o'clock) of each slice.
/// Slices with no value get an empty span.
fn slice_angles(summary: &FinancialSummary) -> Vec<(f32, f32)> {
    let values: Vec<f64> = summary.slices.iter().map(|s| s.value.max(0.0)).collect();
    let sum: f64 = values.iter().sum();
    let visible = values.iter().filter(|v| **v > 0.0).count();
    if sum <= 0.0 || !sum.is_finite() {
        return vec![(0.0, 0.0); values.len()];
    }
    let padding = if visible > 1 { PADDING_ANGLE } else { 0.0 };
    let sweep = TAU - padding * visible as f32;
    let mut start = 0.0;
    values
        .iter()
        .map(|v| {
            if *v <= 0.0 {
                return (start, start);
            }
            let end = start + sweep * (*v / sum) as f32;
            let span = (start, end);
            start = end + padding;
            span
        })
        .collect()
}

/// Slice under `angle`, if any.
fn slice_at(angles: &[(f32, f32)], angle: f32) -> Option<usize> {
    angles.iter().position(|&(a0, a1)| a1 > a0 && angle >= a0 && angle < a1)
}

fn point(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    center + radius * Vec2::new(angle.sin(), -angle.cos())
}

fn paint_arc(painter: &egui::Painter, center: Pos2, a0: f32, a1: f32, color: Color32) {
    let steps = (((a1 - a0) / TAU) * SEGMENTS).ceil().max(1.0) as usize;
    let step = (a1 - a0) / steps as f32;
    for i in 0..steps {
        let s = a0 + step * i as f32;
        let e = s + step;
        painter.add(Shape::convex_polygon(
            vec![
                point(center, OUTER_RADIUS, s),
                point(center, OUTER_RADIUS, e),
                point(center, INNER_RADIUS, e),
                point(center, INNER_RADIUS, s),
            ],
            color,
            Stroke::NONE,
        ));
    }
}

pub fn show_financial_chart(ui: &mut Ui, summary: &FinancialSummary) {
    let p = theme::palette(ui.ctx());
    widgets::card_frame(ui).show(ui, |ui| {
        ui.set_width(ui.available_width());
        widgets::section_heading(ui, "Financial Summary", Some("Budget Breakdown"));

        let (response, painter) =
            ui.allocate_painter(Vec2::new(ui.available_width(), CHART_HEIGHT), Sense::hover());
        let center = response.rect.center();
        let angles = slice_angles(summary);

        if angles.iter().all(|(a0, a1)| a1 <= a0) {
            painter.circle_stroke(
                center,
                (OUTER_RADIUS + INNER_RADIUS) / 2.0,
                Stroke::new(OUTER_RADIUS - INNER_RADIUS, p.bg_track),
            );
        }

        for (slice, &(a0, a1)) in summary.slices.iter().zip(&angles) {
            if a1 <= a0 {
                continue;
            }
            paint_arc(&painter, center, a0, a1, slice.kind.color());
            painter.text(
                point(center, OUTER_RADIUS + 16.0, (a0 + a1) / 2.0),
                egui::Align2::CENTER_CENTER,
                summary.slice_label(slice),
                theme::font_small(),
                slice.kind.color(),
            );
        }

        if let Some(pos) = response.hover_pos() {
            let offset = pos - center;
            let radius = offset.length();
            if (INNER_RADIUS..=OUTER_RADIUS).contains(&radius) {
                let angle = offset.x.atan2(-offset.y).rem_euclid(TAU);
                if let Some(index) = slice_at(&angles, angle) {
                    let slice = &summary.slices[index];
                    egui::show_tooltip_at_pointer(
                        ui.ctx(),
                        ui.layer_id(),
                        egui::Id::new(("financial-tip", index)),
                        |ui| {
                            ui.label(
                                RichText::new(format!(
                                    "{}: {}",
                                    slice.kind.label(),
                                    format_currency(slice.value)
                                ))
                                .color(slice.kind.color()),
                            );
                        },
                    );
                }
            }
        }

        ui.horizontal(|ui| {
            for slice in &summary.slices {
                legend_entry(ui, slice.kind.color(), slice.kind.label());
            }
        });

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(6.0);
        ui.columns(summary.slices.len(), |cols| {
            for (col, slice) in cols.iter_mut().zip(&summary.slices) {
                col.vertical_centered(|ui| {
                    ui.horizontal(|ui| {
                        let (dot, _) = ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
                        ui.painter().circle_filled(dot.center(), 5.0, slice.kind.color());
                        ui.label(
                            RichText::new(slice.kind.short_label())
                                .font(theme::font_small())
                                .color(p.text_dim),
                        );
                    });
                    ui.label(
                        RichText::new(format_currency(slice.value))
                            .font(theme::font_body())
                            .strong()
                            .color(p.text_primary),
                    );
                });
            }
        });
    });
}
