// src/gui/components/kpi_tiles.rs
use eframe::egui::{self, RichText};

use crate::output::Kpi;

const TILE_W: f32 = 170.0;

pub fn draw(ui: &mut egui::Ui, kpis: &[Kpi]) {
    ui.horizontal_wrapped(|ui| {
        for k in kpis {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(TILE_W);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(&k.value).size(24.0).strong())
                        .on_hover_text(k.raw.to_string());
                    ui.label(&k.label);
                });
            });
        }
    });
}
