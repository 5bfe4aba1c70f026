// src/metrics/overview.rs
//
// Executive overview: headline counts plus the season trend and the
// home-by-away heatmap.

use super::{Metrics, Pivot, Scalar, group, key};
use crate::filter::FilteredView;

pub fn compute(view: &FilteredView) -> Metrics {
    let mut m = Metrics::new(view.len());

    m.insert(key::TOTAL_MATCHES, Scalar::Count(group::distinct_matches(view)));
    m.insert(key::ACTIVE_PLAYERS, Scalar::Count(group::distinct_players(view)));
    m.insert(key::AVG_FANTASY_POINTS, Scalar::from_opt_number(group::mean_points(view)));
    m.insert(
        key::TOP_PERFORMER,
        Scalar::from_opt_text(group::top_record(view).map(|r| r.fullname.as_str())),
    );

    // Narrative only
    let seasons: Vec<&str> = season_trend(view).into_iter().map(|(s, _)| s).collect();
    m.insert(
        key::SEASONS,
        if seasons.is_empty() { Scalar::NotAvailable } else { Scalar::Text(seasons.join(", ")) },
    );
    m.insert(
        key::TOP_HOME_TEAM,
        Scalar::from_opt_text(group::best_group(view, |r| r.home_team.as_str()).map(|(t, _)| t)),
    );
    m.insert(
        key::TOP_ROLE,
        Scalar::from_opt_text(group::best_group(view, |r| r.role.as_str()).map(|(t, _)| t)),
    );

    m
}

/// Mean points per season, seasons ascending as text.
pub fn season_trend<'a>(view: &FilteredView<'a>) -> Vec<(&'a str, f64)> {
    group::group_means(view, |r| r.season.as_str())
}

/// Mean points per (home team, away team).
pub fn home_away_pivot(view: &FilteredView) -> Pivot {
    Pivot::build(view, |r| r.home_team.as_str(), |r| r.away_team.as_str())
}
