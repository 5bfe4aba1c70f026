// src/metrics/mod.rs
//! # Aggregator
//!
//! Per-page statistics over a [`FilteredView`](crate::filter::FilteredView).
//!
//! Every metric is a pure function of the view. Undefined results (empty
//! view, zero denominators, single-sample deviations) resolve to a sentinel
//! chosen per metric: `Scalar::NotAvailable` ("N/A") for lookups and means,
//! `0.0` for ratios and percentages. NaN and infinities never leave this
//! module.
//!
//! ## Layout
//! - `stats`: mean, sample std, CV, argmax/argmin with first-wins ties.
//! - `group`: group-by means/counts with ascending key order, pivots.
//! - `home`: home-vs-away comparison (two modes, see [`HomeAdvantageMode`]).
//! - one module per analytical page, each exposing `compute(view, ..)` for the
//!   KPI/narrative scalars plus functions for the chart series.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

pub mod group;
pub mod home;
pub mod matches;
pub mod overview;
pub mod players;
pub mod stats;
pub mod strategy;
pub mod teams;

pub use group::Pivot;
pub use home::HomeAdvantageMode;

use crate::config::consts::NOT_AVAILABLE;

/// One metric value.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Count(usize),
    Number(f64),
    Text(String),
    NotAvailable,
}

impl Scalar {
    /// Non-finite numbers collapse to `NotAvailable`.
    pub fn number(v: f64) -> Self {
        if v.is_finite() { Scalar::Number(v) } else { Scalar::NotAvailable }
    }

    pub fn from_opt_number(v: Option<f64>) -> Self {
        v.map(Scalar::number).unwrap_or(Scalar::NotAvailable)
    }

    pub fn from_opt_text<S: Into<String>>(v: Option<S>) -> Self {
        v.map(|s| Scalar::Text(s.into())).unwrap_or(Scalar::NotAvailable)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Count(n) => Some(*n as f64),
            Scalar::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, Scalar::NotAvailable)
    }
}

/// Counts print as integers, numbers with one decimal.
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Count(n) => write!(f, "{n}"),
            Scalar::Number(v) => write!(f, "{v:.1}"),
            Scalar::Text(s) => f.write_str(s),
            Scalar::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Count(n) => s.serialize_u64(*n as u64),
            Scalar::Number(v) => s.serialize_f64(*v),
            Scalar::Text(t) => s.serialize_str(t),
            Scalar::NotAvailable => s.serialize_none(),
        }
    }
}

/// Named metric values for one page, in insertion order, plus the size of
/// the view they were computed from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metrics {
    rows: usize,
    values: Vec<(&'static str, Scalar)>,
}

static MISSING: Scalar = Scalar::NotAvailable;

impl Metrics {
    pub fn new(rows: usize) -> Self {
        Self { rows, values: Vec::new() }
    }

    /// Insert or replace.
    pub fn insert(&mut self, key: &'static str, value: Scalar) {
        match self.values.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.values.push((key, value)),
        }
    }

    /// Missing keys read as `NotAvailable`.
    pub fn get(&self, key: &str) -> &Scalar {
        self.values
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
            .unwrap_or(&MISSING)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).as_f64()
    }

    /// Number or `fallback`; used where a sentinel of 0.0 is documented.
    pub fn number_or(&self, key: &str, fallback: f64) -> f64 {
        self.number(key).unwrap_or(fallback)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).as_text()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The view these metrics came from had no records.
    pub fn is_empty_view(&self) -> bool {
        self.rows == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Scalar)> + '_ {
        self.values.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for Metrics {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let mut map = s.serialize_map(Some(self.values.len() + 1))?;
        map.serialize_entry("rows", &self.rows)?;
        for (k, v) in &self.values {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Metric names shared by pages, narrative and presentation.
pub mod key {
    // Overview
    pub const TOTAL_MATCHES: &str = "total_matches";
    pub const ACTIVE_PLAYERS: &str = "active_players";
    pub const AVG_FANTASY_POINTS: &str = "avg_fantasy_points";
    pub const TOP_PERFORMER: &str = "top_performer";
    pub const SEASONS: &str = "seasons";
    pub const TOP_HOME_TEAM: &str = "top_home_team";
    pub const TOP_ROLE: &str = "top_role";

    // Match analysis
    pub const MATCHES_ANALYZED: &str = "matches_analyzed";
    pub const AVG_POINTS_PER_MATCH: &str = "avg_points_per_match";
    pub const HIGHEST_SCORING_VENUE: &str = "highest_scoring_venue";
    pub const TOP_VENUE_AVG: &str = "top_venue_avg";
    pub const CLOSEST_MARGIN: &str = "closest_margin";
    pub const HOME_ADVANTAGE: &str = "home_advantage";

    // Player hub
    pub const PLAYERS_ANALYZED: &str = "players_analyzed";
    pub const TOP_SCORER: &str = "top_scorer";
    pub const TOP_SCORER_POINTS: &str = "top_scorer_points";
    pub const MOST_CONSISTENT: &str = "most_consistent";
    pub const ROLE_LEADER: &str = "role_leader";
    pub const TOP_ROLE_AVG: &str = "top_role_avg";

    // Team analytics
    pub const TEAMS_COMPARED: &str = "teams_compared";
    pub const STRONGEST_HOME: &str = "strongest_home";
    pub const STRONGEST_HOME_AVG: &str = "strongest_home_avg";
    pub const BEST_AWAY: &str = "best_away";
    pub const BEST_AWAY_AVG: &str = "best_away_avg";
    pub const MOST_IMPROVED: &str = "most_improved";
    pub const IMPROVEMENT_PCT: &str = "improvement_pct";
    pub const HOME_ADVANTAGE_PCT: &str = "home_advantage_pct";

    // Strategy lab
    pub const DREAM_TEAM_MATCHES: &str = "dream_team_matches";
    pub const CAPTAINCY_IMPACT: &str = "captaincy_impact";
    pub const VICE_CAPTAINCY_IMPACT: &str = "vice_captaincy_impact";
    pub const OPTIMAL_POINTS: &str = "optimal_points";
    pub const TOP_DREAM_PLAYER: &str = "top_dream_player";
    pub const TOP_DREAM_COUNT: &str = "top_dream_count";
    pub const TOP_DREAM_ROLE: &str = "top_dream_role";
    pub const TOP_DREAM_ROLE_PCT: &str = "top_dream_role_pct";
}
