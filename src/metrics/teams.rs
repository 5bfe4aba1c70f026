// src/metrics/teams.rs
//
// Team analytics. Team performance is the mean points of rows where the team
// is on the given side; improvement compares home-side means between the
// earliest and latest season in view.

use std::collections::BTreeMap;

use serde::Serialize;

use super::home::{self, HomeAdvantageMode};
use super::{Metrics, Pivot, Scalar, group, key, stats};
use crate::filter::FilteredView;

pub fn compute(view: &FilteredView, mode: HomeAdvantageMode) -> Metrics {
    let mut m = Metrics::new(view.len());

    m.insert(key::TEAMS_COMPARED, Scalar::Count(group::distinct_teams(view)));

    let home_best = group::best_group(view, |r| r.home_team.as_str());
    m.insert(key::STRONGEST_HOME, Scalar::from_opt_text(home_best.map(|(t, _)| t)));
    m.insert(key::STRONGEST_HOME_AVG, Scalar::from_opt_number(home_best.map(|(_, v)| v)));

    let away_best = group::best_group(view, |r| r.away_team.as_str());
    m.insert(key::BEST_AWAY, Scalar::from_opt_text(away_best.map(|(t, _)| t)));
    m.insert(key::BEST_AWAY_AVG, Scalar::from_opt_number(away_best.map(|(_, v)| v)));

    let improved = most_improved(view);
    m.insert(
        key::MOST_IMPROVED,
        Scalar::from_opt_text(improved.as_ref().map(|i| i.team.as_str())),
    );
    m.insert(
        key::IMPROVEMENT_PCT,
        Scalar::number(improved.map(|i| i.pct).unwrap_or(0.0)),
    );

    // N/A when no comparison exists; 0.0 when the away mean is not positive.
    let pct = home::home_away(view, mode).map(|ha| ha.pct_of_away());
    m.insert(key::HOME_ADVANTAGE_PCT, Scalar::from_opt_number(pct));

    m
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Improvement {
    pub team: String,
    pub first: f64,
    pub last: f64,
    pub pct: f64,
}

/// Home-side percent change from the first to the last season (by season
/// text). Teams missing from either season, or with a zero first mean, are
/// left out. Empty when fewer than two seasons are in view.
pub fn improvements(view: &FilteredView) -> Vec<Improvement> {
    let seasons = group::group_counts(view, |r| r.season.as_str());
    let (Some((&first, _)), Some((&last, _))) = (seasons.first_key_value(), seasons.last_key_value())
    else {
        return Vec::new();
    };
    if first == last {
        return Vec::new();
    }

    let first_means: BTreeMap<&str, f64> =
        group::group_means(&view.retain(|r| r.season == first), |r| r.home_team.as_str())
            .into_iter()
            .collect();
    let last_means = group::group_means(&view.retain(|r| r.season == last), |r| r.home_team.as_str());

    last_means
        .into_iter()
        .filter_map(|(team, last)| {
            let first = *first_means.get(team)?;
            let pct = stats::percent_change(first, last)?;
            Some(Improvement { team: s!(team), first, last, pct })
        })
        .collect()
}

/// Largest improvement, ties to the first team name.
pub fn most_improved(view: &FilteredView) -> Option<Improvement> {
    let all = improvements(view);
    let (ix, _) = stats::argmax_first(all.iter().enumerate().map(|(i, imp)| (i, imp.pct)))?;
    all.into_iter().nth(ix)
}

/// Mean points per (home team, venue).
pub fn team_venue_pivot(view: &FilteredView) -> Pivot {
    Pivot::build(view, |r| r.home_team.as_str(), |r| r.venue.as_str())
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SideSplit {
    pub team: String,
    /// `None` when the team never appears on that side.
    pub home: Option<f64>,
    pub away: Option<f64>,
}

/// Home and away means per team, outer join on team name, ascending.
pub fn home_vs_away(view: &FilteredView) -> Vec<SideSplit> {
    let mut split: BTreeMap<&str, (Option<f64>, Option<f64>)> = BTreeMap::new();
    for (team, m) in group::group_means(view, |r| r.home_team.as_str()) {
        split.entry(team).or_default().0 = Some(m);
    }
    for (team, m) in group::group_means(view, |r| r.away_team.as_str()) {
        split.entry(team).or_default().1 = Some(m);
    }
    split
        .into_iter()
        .map(|(team, (home, away))| SideSplit { team: s!(team), home, away })
        .collect()
}
