// src/gui/components/export_bar.rs

use eframe::egui;
use tracing::{error, info};

use crate::{file, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let kind = app.current_page_kind();
    let dir = app.state.options.export_dir_for(kind);

    ui.horizontal(|ui| {
        ui.label(format!("Output: {}", dir.display()));

        if ui.button("Copy insight").clicked() {
            if let Some(text) = &app.output.insight {
                ui.ctx().copy_text(text.clone());
                app.status = s!("Copied to clipboard.");
            }
        }

        if ui.button("Export CSV").clicked() {
            match file::export_tables(&dir, &app.output) {
                Ok(paths) => {
                    info!("UI: exported {:?} ({} files)", kind, paths.len());
                    app.status = format!("Exported {} table(s) to {}", paths.len(), dir.display());
                }
                Err(e) => {
                    error!("UI: export failed: {e}");
                    app.status = format!("Export error: {e}");
                }
            }
        }
    });
}
