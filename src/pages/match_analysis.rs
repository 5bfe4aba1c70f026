// src/pages/match_analysis.rs
use crate::{
    config::options::{ AnalysisOptions, PageKind::{ self, * } },
    filter::{ Dimension, FilterSpec },
    metrics::{ key, matches },
    output::{ RenderedOutput, TableData, fmt1 },
    store::RecordStore,
};

use super::{ Page, finish, scoped_view, tiles };

pub struct MatchAnalysisPage;
pub static PAGE: MatchAnalysisPage = MatchAnalysisPage;

pub const MATCH_TIMELINE: &str = "Match Timeline";
pub const VENUE_PERFORMANCE: &str = "Venue Performance";

impl Page for MatchAnalysisPage {
    fn kind(&self) -> PageKind { MatchAnalysis }
    fn title(&self) -> &'static str { "Match Analysis" }

    fn filters(&self) -> &'static [Dimension] {
        &[Dimension::Season, Dimension::Team, Dimension::Venue]
    }

    fn render_with(&self, store: &RecordStore, spec: &FilterSpec, opts: &AnalysisOptions) -> RenderedOutput {
        if store.is_empty() {
            return RenderedOutput::no_data(self.title());
        }
        let view = scoped_view(self, store, spec);
        let m = matches::compute(&view, opts.home_advantage);

        let mut out = RenderedOutput::new(self.title());
        out.kpis = tiles(&m, &[
            ("Matches Analyzed", key::MATCHES_ANALYZED),
            ("Avg Points per Match", key::AVG_POINTS_PER_MATCH),
            ("Highest Scoring Venue", key::HIGHEST_SCORING_VENUE),
            ("Closest Margin", key::CLOSEST_MARGIN),
        ]);

        let mut timeline = TableData::new(MATCH_TIMELINE, &["Match ID", "Match", "Average Fantasy Points"]);
        for p in matches::timeline(&view) {
            timeline.push(vec![p.match_id.to_string(), p.match_name, fmt1(p.avg_points)]);
        }
        out.tables.push(timeline);

        let mut venues = TableData::new(VENUE_PERFORMANCE, &["Venue", "Average Fantasy Points"]);
        for (venue, avg) in matches::venue_performance(&view) {
            venues.push(vec![s!(venue), fmt1(avg)]);
        }
        out.tables.push(venues);

        finish(out, self.kind(), m)
    }
}
