use egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::ui::widgets;
use crate::view::tables::TableView;

const HEADER_HEIGHT: f32 = 28.0;

/// A read-only table, or the view's placeholder when it has no rows.
///
/// `cell` draws column `col` of a row.
pub fn show_table<R>(
    ui: &mut Ui,
    id_salt: &str,
    empty_icon: &str,
    headers: &[&str],
    view: &TableView<R>,
    row_height: f32,
    cell: impl Fn(&mut Ui, usize, &R),
) {
    let rows = match view {
        TableView::Empty { placeholder } => {
            widgets::empty_state(ui, empty_icon, placeholder);
            return;
        }
        TableView::Rows(rows) => rows,
    };

    ui.push_id(id_salt, |ui| {
        let mut table = TableBuilder::new(ui)
            .striped(false)
            .resizable(false)
            .vscroll(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
        for _ in headers {
            table = table.column(Column::remainder().at_least(70.0).clip(true));
        }
        table
            .header(HEADER_HEIGHT, |mut header| {
                for text in headers {
                    header.col(|ui| widgets::column_header(ui, text));
                }
            })
            .body(|mut body| {
                for row in rows {
                    body.row(row_height, |mut tr| {
                        for col in 0..headers.len() {
                            tr.col(|ui| cell(ui, col, row));
                        }
                    });
                }
            });
    });
}
