// src/pages/overview.rs
use crate::{
    config::options::{ AnalysisOptions, PageKind::{ self, * } },
    filter::{ Dimension, FilterSpec },
    metrics::{ key, overview },
    output::{ RenderedOutput, TableData, fmt1 },
    store::RecordStore,
};

use super::{ Page, finish, scoped_view, tiles };

pub struct OverviewPage;
pub static PAGE: OverviewPage = OverviewPage;

pub const SEASON_TREND: &str = "Season Performance Trend";
pub const TEAM_HEATMAP: &str = "Team Performance Heatmap (Home vs Away)";

impl Page for OverviewPage {
    fn kind(&self) -> PageKind { Overview }
    fn title(&self) -> &'static str { "Executive Overview" }

    fn filters(&self) -> &'static [Dimension] {
        &[Dimension::Season, Dimension::Team, Dimension::Venue, Dimension::Role]
    }

    fn render_with(&self, store: &RecordStore, spec: &FilterSpec, _: &AnalysisOptions) -> RenderedOutput {
        if store.is_empty() {
            return RenderedOutput::no_data(self.title());
        }
        let view = scoped_view(self, store, spec);
        let m = overview::compute(&view);

        let mut out = RenderedOutput::new(self.title());
        out.kpis = tiles(&m, &[
            ("Total Matches", key::TOTAL_MATCHES),
            ("Active Players", key::ACTIVE_PLAYERS),
            ("Avg Fantasy Points", key::AVG_FANTASY_POINTS),
            ("Top Performer", key::TOP_PERFORMER),
        ]);

        let mut trend = TableData::new(SEASON_TREND, &["Season", "Average Fantasy Points"]);
        for (season, avg) in overview::season_trend(&view) {
            trend.push(vec![s!(season), fmt1(avg)]);
        }
        out.tables.push(trend);
        out.tables.push(TableData::from_pivot(
            TEAM_HEATMAP,
            "Home Team \\ Away Team",
            &overview::home_away_pivot(&view),
        ));

        finish(out, self.kind(), m)
    }
}
