// src/pages/mod.rs
//! Dashboard pages.
//!
//! Every analytical page runs the same cycle: restrict the sidebar
//! selections to the dimensions it recognizes, filter the store, aggregate,
//! then fill a [`RenderedOutput`] with KPI tiles, chart tables and the
//! insight sentence. Home and About render static text.

use crate::{
    config::options::{ AnalysisOptions, PageKind },
    filter::{ self, Dimension, FilterSpec, FilteredView },
    metrics::Metrics,
    narrative,
    output::{ Kpi, RenderedOutput },
    store::RecordStore,
};

pub mod about;
pub mod home;
pub mod match_analysis;
pub mod overview;
pub mod player_hub;
pub mod router;
pub mod strategy_lab;
pub mod team_analytics;

pub trait Page: Send + Sync + 'static {
    fn kind(&self) -> PageKind;
    fn title(&self) -> &'static str;

    /// Sidebar dimensions this page reads. Other dimensions in the filter spec are
    /// ignored.
    fn filters(&self) -> &'static [Dimension] {
        &[]
    }

    fn render_with(
        &self,
        store: &RecordStore,
        spec: &FilterSpec,
        opts: &AnalysisOptions,
    ) -> RenderedOutput;

    /// Render with default analysis options.
    fn render(&self, store: &RecordStore, spec: &FilterSpec) -> RenderedOutput {
        self.render_with(store, spec, &AnalysisOptions::default())
    }
}

/// The filtered view a page aggregates over.
pub fn scoped_view<'a>(
    page: &dyn Page,
    store: &'a RecordStore,
    spec: &FilterSpec,
) -> FilteredView<'a> {
    filter::apply(store, &spec.restricted_to(page.filters()))
}

/// KPI tiles from (label, metric key) pairs, in order.
pub(crate) fn tiles(m: &Metrics, spec: &[(&str, &str)]) -> Vec<Kpi> {
    spec.iter().map(|(label, k)| Kpi::new(label, m.get(k).clone())).collect()
}

/// Attach the insight sentence and the metrics themselves.
pub(crate) fn finish(mut out: RenderedOutput, kind: PageKind, m: Metrics) -> RenderedOutput {
    out.insight = Some(narrative::synthesize(kind, &m));
    out.metrics = Some(m);
    out
}
