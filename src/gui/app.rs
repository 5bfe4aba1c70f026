// src/gui/app.rs
use std::error::Error;

use eframe::egui;
use tracing::{info, warn};

use crate::{
    config::{
        consts::NO_DATA_SOURCE,
        options::PageKind,
        state::AppState,
    },
    filter::{ Dimension, FilterSpec },
    output::RenderedOutput,
    pages::{ Page, router },
    store::RecordStore,
};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "IPL Fantasy Intelligence Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // loaded once, never rewritten
    pub store: RecordStore,
    pub load_error: Option<String>,

    // sidebar choices per dimension, from the store
    pub choices: Vec<(Dimension, Vec<String>)>,

    // what the current page rendered for the current selections
    pub output: RenderedOutput,

    pub status: String,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        let loaded = RecordStore::load_or_empty(&state.options.data_path);
        let store = loaded.store;

        let choices = Dimension::ALL
            .iter()
            .map(|d| (*d, d.choices(&store)))
            .collect();

        // Default selection: everything observed
        state.gui.filters = FilterSpec::all_observed(&store);
        state.gui.current_page_index = state.options.page.index();

        let status = match &loaded.error {
            Some(e) => e.clone(),
            None if store.is_empty() => s!(NO_DATA_SOURCE),
            None => format!("Loaded {} records from {}", store.len(), state.options.data_path.display()),
        };
        info!("Init: {} records, page {:?}", store.len(), state.options.page);

        let mut app = Self {
            state,
            store,
            load_error: loaded.error,
            choices,
            output: RenderedOutput::default(),
            status,
        };
        app.rebuild_view();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages.get(self.current_index()).copied().unwrap_or(pages[0])
    }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    pub fn choices_for(&self, dim: Dimension) -> &[String] {
        self.choices
            .iter()
            .find(|(d, _)| *d == dim)
            .map(|(_, v)| v.as_slice())
            .unwrap_or(&[])
    }

    /// Re-run the current page against the current selections.
    pub fn rebuild_view(&mut self) {
        let page = self.current_page();
        self.output = page.render_with(&self.store, &self.state.gui.filters, &self.state.options.analysis);
        if let Some(err) = &self.load_error {
            if self.output.notice.is_some() {
                self.output.notice = Some(err.clone());
            }
        }
        if let Some(m) = &self.output.metrics {
            if m.is_empty_view() {
                warn!("View: {:?} has no rows for current filters", page.kind());
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            crate::gui::components::tabs::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(format!("Status: {}", self.status));
        });

        if !self.current_page().filters().is_empty() {
            egui::SidePanel::left("filters")
                .resizable(false)
                .show(ctx, |ui| {
                    crate::gui::components::filter_panel::draw(ui, self);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("page_scroll")
                .show(ui, |ui| {
                    ui.heading(&self.output.title);

                    if let Some(n) = &self.output.notice {
                        let color = ui.visuals().error_fg_color;
                        ui.colored_label(color, n);
                    }
                    for p in &self.output.body {
                        ui.label(p);
                        ui.add_space(4.0);
                    }

                    if !self.output.kpis.is_empty() {
                        ui.separator();
                        crate::gui::components::kpi_tiles::draw(ui, &self.output.kpis);
                    }

                    for (ix, table) in self.output.tables.iter().enumerate() {
                        ui.separator();
                        crate::gui::components::data_table::draw(ui, ix, table);
                    }

                    if let Some(insight) = self.output.insight.as_deref().filter(|i| !i.is_empty()) {
                        ui.separator();
                        ui.strong("Summary Insights");
                        ui.label(insight);
                    }

                    if !self.output.tables.is_empty() {
                        ui.separator();
                        crate::gui::components::export_bar::draw(ui, self);
                    }
                });
        });
    }
}
