// src/pages/strategy_lab.rs
use crate::{
    config::options::{ AnalysisOptions, PageKind::{ self, * } },
    filter::{ Dimension, FilterSpec },
    metrics::{ key, strategy },
    output::{ RenderedOutput, TableData, fmt1 },
    store::RecordStore,
};

use super::{ Page, finish, scoped_view, tiles };

pub struct StrategyLabPage;
pub static PAGE: StrategyLabPage = StrategyLabPage;

pub const COMPOSITION: &str = "Dream Team Composition";
pub const ROLE_SUCCESS: &str = "Role Success Rate in Dream Teams";

impl Page for StrategyLabPage {
    fn kind(&self) -> PageKind { StrategyLab }
    fn title(&self) -> &'static str { "Fantasy Strategy Lab" }

    fn filters(&self) -> &'static [Dimension] {
        &[Dimension::Season, Dimension::Role]
    }

    fn render_with(&self, store: &RecordStore, spec: &FilterSpec, _: &AnalysisOptions) -> RenderedOutput {
        if store.is_empty() {
            return RenderedOutput::no_data(self.title());
        }
        let view = scoped_view(self, store, spec);
        let m = strategy::compute(&view);

        let mut out = RenderedOutput::new(self.title());
        out.kpis = tiles(&m, &[
            ("Dream Team Count", key::DREAM_TEAM_MATCHES),
            ("Captaincy Impact", key::CAPTAINCY_IMPACT),
            ("Vice Captain Impact", key::VICE_CAPTAINCY_IMPACT),
            ("Optimal Points", key::OPTIMAL_POINTS),
        ]);
        // Impacts are multiples of a regular player's points.
        for k in out.kpis.iter_mut().filter(|k| k.label.ends_with("Impact")) {
            *k = k.clone().with_unit("x");
        }

        let mut comp = TableData::new(COMPOSITION, &["Player", "Count"]);
        for (player, n) in strategy::composition(&view) {
            comp.push(vec![player, n.to_string()]);
        }
        out.tables.push(comp);

        let mut success = TableData::new(ROLE_SUCCESS, &["Role", "Rows", "Dream Team", "Selection Rate (%)"]);
        for r in strategy::role_success(&view) {
            success.push(vec![r.role, r.total.to_string(), r.dream.to_string(), fmt1(r.rate)]);
        }
        out.tables.push(success);

        finish(out, self.kind(), m)
    }
}
