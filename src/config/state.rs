// src/config/state.rs
use super::consts::{WINDOW_H, WINDOW_W};
use super::options::AppOptions;
use crate::filter::FilterSpec;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Sidebar selections, shared across pages; each page only reads the
    /// dimensions it recognizes.
    pub filters: FilterSpec,

    pub window_w: f32,
    pub window_h: f32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            filters: FilterSpec::new(),
            window_w: WINDOW_W,
            window_h: WINDOW_H,
            current_page_index: 1,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
