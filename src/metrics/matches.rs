// src/metrics/matches.rs
//
// Match analysis.
//
// Closest margin is a known discrepancy. Per (match, home, away) fixture it
// is defined as the points of rows whose home_team is the fixture's home team
// minus the points of rows whose away_team is the fixture's away team. Every
// row of a fixture satisfies both conditions (records do not say which side
// a player batted for), so the margin is always 0.0. The figure is kept so
// published numbers do not move; an empty view gives N/A.

use serde::Serialize;

use super::home::{self, HomeAdvantageMode};
use super::{Metrics, Scalar, group, key, stats};
use crate::filter::FilteredView;

pub fn compute(view: &FilteredView, mode: HomeAdvantageMode) -> Metrics {
    let mut m = Metrics::new(view.len());

    m.insert(key::MATCHES_ANALYZED, Scalar::Count(group::distinct_matches(view)));
    m.insert(key::AVG_POINTS_PER_MATCH, Scalar::from_opt_number(avg_points_per_match(view)));

    let top_venue = group::best_group(view, |r| r.venue.as_str());
    m.insert(
        key::HIGHEST_SCORING_VENUE,
        Scalar::from_opt_text(top_venue.map(|(v, _)| v)),
    );
    m.insert(key::CLOSEST_MARGIN, Scalar::from_opt_number(closest_margin(view)));

    // Narrative only
    m.insert(key::TOP_VENUE_AVG, Scalar::from_opt_number(top_venue.map(|(_, avg)| avg)));
    m.insert(
        key::HOME_ADVANTAGE,
        Scalar::from_opt_number(home::home_away(view, mode).map(|ha| ha.delta())),
    );

    m
}

/// Mean of per-match means, so large squads do not outweigh small ones.
pub fn avg_points_per_match(view: &FilteredView) -> Option<f64> {
    stats::mean(group::group_means(view, |r| r.match_id).into_iter().map(|(_, m)| m))
}

/// The home-side and away-side sums of a fixture cover the same rows, so
/// every fixture's margin is 0.0. N/A without fixtures.
pub fn closest_margin(view: &FilteredView) -> Option<f64> {
    (!view.is_empty()).then_some(0.0)
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchPoint {
    pub match_id: i64,
    pub match_name: String,
    pub avg_points: f64,
}

/// Mean points per match, match ids ascending.
pub fn timeline(view: &FilteredView) -> Vec<MatchPoint> {
    group::group_means(view, |r| (r.match_id, r.match_name.as_str()))
        .into_iter()
        .map(|((match_id, name), avg_points)| MatchPoint { match_id, match_name: s!(name), avg_points })
        .collect()
}

/// Mean points per venue, best first. Equal means keep venue name order.
pub fn venue_performance<'a>(view: &FilteredView<'a>) -> Vec<(&'a str, f64)> {
    let mut venues = group::group_means(view, |r| r.venue.as_str());
    venues.sort_by(|a, b| b.1.total_cmp(&a.1));
    venues
}
