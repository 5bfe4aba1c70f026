// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use ipl_insights::{
    config::state::AppState,
    gui,
    log,
};

fn main() {
    log::init(false);

    let state = AppState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([state.gui.window_w, state.gui.window_h])
            .with_title("IPL Fantasy Intelligence Dashboard"),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
