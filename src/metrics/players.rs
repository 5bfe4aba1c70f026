// src/metrics/players.rs
//
// Player performance hub.

use serde::Serialize;

use super::{Metrics, Scalar, group, key, stats};
use crate::filter::FilteredView;

pub fn compute(view: &FilteredView) -> Metrics {
    let mut m = Metrics::new(view.len());
    let top = group::top_record(view);

    m.insert(key::PLAYERS_ANALYZED, Scalar::Count(group::distinct_players(view)));
    m.insert(key::TOP_SCORER, Scalar::from_opt_text(top.map(|r| r.fullname.as_str())));
    m.insert(
        key::MOST_CONSISTENT,
        Scalar::from_opt_text(most_consistent(view).map(|(p, _)| p)),
    );
    m.insert(key::ROLE_LEADER, Scalar::from_opt_text(role_leader(view)));

    // Narrative only
    m.insert(key::TOP_SCORER_POINTS, Scalar::from_opt_number(top.map(|r| r.total_fp)));
    let top_role = group::best_group(view, |r| r.role.as_str());
    m.insert(key::TOP_ROLE, Scalar::from_opt_text(top_role.map(|(r, _)| r)));
    m.insert(key::TOP_ROLE_AVG, Scalar::from_opt_number(top_role.map(|(_, avg)| avg)));

    m
}

/// Player with the lowest coefficient of variation. Players with a single
/// record (no sample deviation) or a zero mean are not ranked.
pub fn most_consistent<'a>(view: &FilteredView<'a>) -> Option<(&'a str, f64)> {
    let cvs = group::group_points(view, |r| r.fullname.as_str())
        .into_iter()
        .filter_map(|(p, pts)| stats::coefficient_of_variation(&pts).map(|cv| (p, cv)));
    stats::argmin_first(cvs)
}

/// Best player (by mean) within the best role (by mean).
pub fn role_leader<'a>(view: &FilteredView<'a>) -> Option<&'a str> {
    let (role, _) = group::best_group(view, |r| r.role.as_str())?;
    let in_role = view.retain(|r| r.role == role);
    group::best_group(&in_role, |r| r.fullname.as_str()).map(|(p, _)| p)
}

/// One scatter point per record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerPoint {
    pub fullname: String,
    pub role: String,
    pub batting_innings: u32,
    pub bowling_innings: u32,
    pub total_fp: f64,
    /// Marker size: |points|, at least 1.
    pub size: f64,
}

pub fn distribution(view: &FilteredView) -> Vec<PlayerPoint> {
    view.iter()
        .map(|r| PlayerPoint {
            fullname: r.fullname.clone(),
            role: r.role.clone(),
            batting_innings: r.batting_innings,
            bowling_innings: r.bowling_innings,
            total_fp: r.total_fp,
            size: marker_size(r.total_fp),
        })
        .collect()
}

pub fn marker_size(points: f64) -> f64 {
    let size = points.abs();
    if size > 0.0 { size } else { 1.0 }
}

/// Box-plot summary for one role.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoleStats {
    pub role: String,
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub median: f64,
    pub max: f64,
}

/// Roles ascending.
pub fn role_stats(view: &FilteredView) -> Vec<RoleStats> {
    group::group_points(view, |r| r.role.as_str())
        .into_iter()
        .filter_map(|(role, pts)| {
            Some(RoleStats {
                role: s!(role),
                count: pts.len(),
                mean: stats::mean(pts.iter().copied())?,
                min: pts.iter().copied().fold(f64::INFINITY, f64::min),
                median: stats::median(&pts)?,
                max: pts.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            })
        })
        .collect()
}
