// src/gui/components/filter_panel.rs
//
// Left sidebar: one multi-select list per dimension the current page reads.
// Click toggles a value; All/None reset the list. An empty list filters
// nothing, same as a full one.

use eframe::egui;
use tracing::debug;

use crate::filter::Dimension;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filters");
    ui.separator();

    let dims = app.current_page().filters();
    let mut changed = false;

    egui::ScrollArea::vertical()
        .id_salt("filter_panel_scroll")
        .show(ui, |ui| {
            for dim in dims {
                changed |= draw_dimension(ui, app, *dim);
            }
        });

    if changed {
        debug!("UI: filters → {:?}", app.state.gui.filters);
        app.rebuild_view();
        app.status = match app.output.metrics.as_ref() {
            Some(m) => format!("{} record(s) in view", m.rows()),
            None => app.status.clone(),
        };
    }
}

fn draw_dimension(ui: &mut egui::Ui, app: &mut App, dim: Dimension) -> bool {
    let choices = app.choices_for(dim).to_vec();
    if choices.is_empty() {
        return false;
    }
    let mut changed = false;

    egui::CollapsingHeader::new(format!("Select {}(s)", dim.label()))
        .default_open(true)
        .show(ui, |ui| {
            let filters = &mut app.state.gui.filters;
            ui.horizontal(|ui| {
                if ui.button("All").clicked() {
                    filters.set(dim, choices.iter().cloned());
                    changed = true;
                }
                if ui.button("None").clicked() {
                    filters.clear(dim);
                    changed = true;
                }
            });

            for value in &choices {
                let is_selected = filters.is_selected(dim, value);
                if ui.selectable_label(is_selected, value).clicked() {
                    filters.toggle(dim, value);
                    changed = true;
                }
            }
        });

    changed
}
