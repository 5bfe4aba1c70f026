// src/pages/router.rs
use crate::config::options::PageKind::{ self, * };
use super::{ self as pages, Page };

/// Tab order.
pub static PAGES: &[&'static dyn Page] = &[
    &pages::home::PAGE,
    &pages::overview::PAGE,
    &pages::match_analysis::PAGE,
    &pages::player_hub::PAGE,
    &pages::team_analytics::PAGE,
    &pages::strategy_lab::PAGE,
    &pages::about::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(kind: PageKind) -> &'static dyn Page {
    match kind {
        Home          => &pages::home::PAGE,
        Overview      => &pages::overview::PAGE,
        MatchAnalysis => &pages::match_analysis::PAGE,
        PlayerHub     => &pages::player_hub::PAGE,
        TeamAnalytics => &pages::team_analytics::PAGE,
        StrategyLab   => &pages::strategy_lab::PAGE,
        AboutUs       => &pages::about::PAGE,
    }
}
