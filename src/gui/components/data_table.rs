// src/gui/components/data_table.rs
//
// Draws one chart series as a table. Purely a view.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::output::TableData;

const ROW_H: f32 = 20.0;
const MAX_BODY_H: f32 = 260.0;

pub fn draw(ui: &mut egui::Ui, ix: usize, table: &TableData) {
    ui.strong(&table.title);

    if table.is_empty() {
        ui.label("No rows for the selected filters.");
        return;
    }

    let cols = table.ncols().max(1);

    ui.push_id(("data_table", ix), |ui| {
        let mut builder = TableBuilder::new(ui)
            .striped(true)
            .max_scroll_height(MAX_BODY_H)
            .column(Column::initial(180.0).resizable(true).clip(true));
        for _ in 1..cols {
            builder = builder.column(Column::initial(110.0).resizable(true).clip(true));
        }

        builder
            .header(24.0, |mut header| {
                for h in &table.headers {
                    header.col(|ui| { ui.strong(h); });
                }
            })
            .body(|body| {
                body.rows(ROW_H, table.nrows(), |mut row| {
                    let row_idx = row.index();
                    if let Some(data) = table.rows.get(row_idx) {
                        for cell in data {
                            row.col(|ui| { ui.label(cell); });
                        }
                    }
                });
            });
    });
}
