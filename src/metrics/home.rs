// src/metrics/home.rs
//
// Home-vs-away comparison.
//
// Known discrepancy: `FirstFixture` compares rows of the first record's home
// team against rows of the first record's away team, a single arbitrary
// fixture, while the insight text reads it as a general home advantage. It
// stays the default so published figures do not move. `League` compares home
// and away means across all teams.

use serde::{Deserialize, Serialize};

use super::{group, stats};
use crate::filter::FilteredView;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum HomeAdvantageMode {
    /// Teams of the first record in the view only.
    #[default]
    FirstFixture,
    /// Per-team home and away means, averaged over teams seen on both sides.
    League,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HomeAway {
    pub home: f64,
    pub away: f64,
}

impl HomeAway {
    pub fn delta(&self) -> f64 {
        self.home - self.away
    }

    /// Delta as a percentage of the away mean; 0.0 when that mean is not
    /// positive.
    pub fn pct_of_away(&self) -> f64 {
        stats::ratio_or(Some(self.delta() * 100.0), Some(self.away), 0.0)
    }
}

pub fn home_away(view: &FilteredView, mode: HomeAdvantageMode) -> Option<HomeAway> {
    match mode {
        HomeAdvantageMode::FirstFixture => first_fixture(view),
        HomeAdvantageMode::League => league(view),
    }
}

fn first_fixture(view: &FilteredView) -> Option<HomeAway> {
    let first = view.first()?;
    let home = stats::mean(
        view.iter()
            .filter(|r| r.home_team == first.home_team)
            .map(|r| r.total_fp),
    )?;
    let away = stats::mean(
        view.iter()
            .filter(|r| r.away_team == first.away_team)
            .map(|r| r.total_fp),
    )?;
    Some(HomeAway { home, away })
}

fn league(view: &FilteredView) -> Option<HomeAway> {
    let home = group::group_means(view, |r| r.home_team.as_str());
    let away = group::group_means(view, |r| r.away_team.as_str());

    let mut home_means = Vec::new();
    let mut away_means = Vec::new();
    for (team, h) in &home {
        if let Ok(ix) = away.binary_search_by(|(t, _)| t.cmp(team)) {
            home_means.push(*h);
            away_means.push(away[ix].1);
        }
    }
    Some(HomeAway {
        home: stats::mean(home_means)?,
        away: stats::mean(away_means)?,
    })
}
