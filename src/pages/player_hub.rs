// src/pages/player_hub.rs
use crate::{
    config::options::{ AnalysisOptions, PageKind::{ self, * } },
    filter::{ Dimension, FilterSpec },
    metrics::{ key, players },
    output::{ RenderedOutput, TableData, fmt1 },
    store::RecordStore,
};

use super::{ Page, finish, scoped_view, tiles };

pub struct PlayerHubPage;
pub static PAGE: PlayerHubPage = PlayerHubPage;

pub const DISTRIBUTION: &str = "Player Performance Distribution";
pub const ROLE_COMPARISON: &str = "Role Comparison";

impl Page for PlayerHubPage {
    fn kind(&self) -> PageKind { PlayerHub }
    fn title(&self) -> &'static str { "Player Performance Hub" }

    fn filters(&self) -> &'static [Dimension] {
        &[Dimension::Season, Dimension::Team, Dimension::Role]
    }

    fn render_with(&self, store: &RecordStore, spec: &FilterSpec, _: &AnalysisOptions) -> RenderedOutput {
        if store.is_empty() {
            return RenderedOutput::no_data(self.title());
        }
        let view = scoped_view(self, store, spec);
        let m = players::compute(&view);

        let mut out = RenderedOutput::new(self.title());
        out.kpis = tiles(&m, &[
            ("Players Analyzed", key::PLAYERS_ANALYZED),
            ("Top Scorer", key::TOP_SCORER),
            ("Most Consistent", key::MOST_CONSISTENT),
            ("Role Leader", key::ROLE_LEADER),
        ]);

        let mut dist = TableData::new(DISTRIBUTION, &[
            "Player", "Role", "Batting Innings", "Bowling Innings", "Fantasy Points", "Size",
        ]);
        for p in players::distribution(&view) {
            dist.push(vec![
                p.fullname,
                p.role,
                p.batting_innings.to_string(),
                p.bowling_innings.to_string(),
                fmt1(p.total_fp),
                fmt1(p.size),
            ]);
        }
        out.tables.push(dist);

        let mut roles = TableData::new(ROLE_COMPARISON, &["Role", "Count", "Mean", "Min", "Median", "Max"]);
        for r in players::role_stats(&view) {
            roles.push(vec![
                r.role,
                r.count.to_string(),
                fmt1(r.mean),
                fmt1(r.min),
                fmt1(r.median),
                fmt1(r.max),
            ]);
        }
        out.tables.push(roles);

        finish(out, self.kind(), m)
    }
}
