// src/pages/team_analytics.rs
use crate::{
    config::options::{ AnalysisOptions, PageKind::{ self, * } },
    filter::{ Dimension, FilterSpec },
    metrics::{ key, teams },
    output::{ RenderedOutput, TableData, fmt_opt },
    store::RecordStore,
};

use super::{ Page, finish, scoped_view, tiles };

pub struct TeamAnalyticsPage;
pub static PAGE: TeamAnalyticsPage = TeamAnalyticsPage;

pub const TEAM_MATRIX: &str = "Team Performance Matrix";
pub const HOME_VS_AWAY: &str = "Home vs Away Performance";

impl Page for TeamAnalyticsPage {
    fn kind(&self) -> PageKind { TeamAnalytics }
    fn title(&self) -> &'static str { "Team Analytics" }

    fn filters(&self) -> &'static [Dimension] {
        &[Dimension::Season, Dimension::Venue]
    }

    fn render_with(&self, store: &RecordStore, spec: &FilterSpec, opts: &AnalysisOptions) -> RenderedOutput {
        if store.is_empty() {
            return RenderedOutput::no_data(self.title());
        }
        let view = scoped_view(self, store, spec);
        let m = teams::compute(&view, opts.home_advantage);

        let mut out = RenderedOutput::new(self.title());
        out.kpis = tiles(&m, &[
            ("Teams Compared", key::TEAMS_COMPARED),
            ("Strongest Home Team", key::STRONGEST_HOME),
            ("Best Away Team", key::BEST_AWAY),
            ("Most Improved", key::MOST_IMPROVED),
        ]);

        out.tables.push(TableData::from_pivot(TEAM_MATRIX, "Team \\ Venue", &teams::team_venue_pivot(&view)));

        let mut split = TableData::new(HOME_VS_AWAY, &["Team", "Home Performance", "Away Performance"]);
        for s in teams::home_vs_away(&view) {
            split.push(vec![s.team, fmt_opt(s.home), fmt_opt(s.away)]);
        }
        out.tables.push(split);

        finish(out, self.kind(), m)
    }
}
