// src/pages/home.rs
use crate::{
    config::options::{ AnalysisOptions, PageKind::{ self, * } },
    filter::FilterSpec,
    output::RenderedOutput,
    store::RecordStore,
};

use super::Page;

pub struct HomePage;
pub static PAGE: HomePage = HomePage;

const BODY: &[&str] = &[
    "Welcome to the IPL Fantasy Intelligence Dashboard. It turns raw match statistics into \
     insights for fantasy team selection: player performance patterns, venue and team trends, \
     and what the best lineups have in common.",
    "Match Analysis: breakdown of each match with performance metrics.",
    "Player Insights: individual player performance and consistency.",
    "Team Analytics: team performance across venues and seasons.",
    "Fantasy Strategy: dream team composition and captaincy impact.",
    "Pick a page from the tabs and narrow the data with the filters on the left.",
];

impl Page for HomePage {
    fn kind(&self) -> PageKind { Home }
    fn title(&self) -> &'static str { "IPL Fantasy Intelligence Dashboard" }

    fn render_with(&self, _: &RecordStore, _: &FilterSpec, _: &AnalysisOptions) -> RenderedOutput {
        let mut out = RenderedOutput::new(self.title());
        out.body = BODY.iter().map(|p| s!(*p)).collect();
        out
    }
}
