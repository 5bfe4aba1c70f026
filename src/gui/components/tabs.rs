// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the tab switch itself. Selections are
// shared across pages; switching only re-renders.

use eframe::egui;
use tracing::info;

use crate::gui::app::App;
use crate::pages::router;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.current_index();

        for (idx, page) in router::all_pages().iter().enumerate() {
            let selected = idx == cur;

            if ui.selectable_label(selected, page.title()).clicked() && !selected {
                let prev = app.current_page_kind();
                app.set_current_index(idx);
                app.state.options.page = page.kind();
                info!("UI: Tab switch {:?} → {:?}", prev, page.kind());
                app.rebuild_view();
            }
        }
    });
}
