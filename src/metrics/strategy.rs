// src/metrics/strategy.rs
//
// Fantasy strategy lab: dream team make-up and captaincy multipliers.
//
// "Regular" rows are those that are neither captain nor vice-captain; both
// multipliers divide by the regular mean and fall back to 0.0 when that mean
// is missing or not positive.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{Metrics, Scalar, group, key, stats};
use crate::filter::FilteredView;

pub fn compute(view: &FilteredView) -> Metrics {
    let mut m = Metrics::new(view.len());
    let dream = view.retain(|r| r.dream_team);

    m.insert(key::DREAM_TEAM_MATCHES, Scalar::Count(group::distinct_matches(&dream)));
    m.insert(key::CAPTAINCY_IMPACT, Scalar::number(captaincy_impact(view)));
    m.insert(key::VICE_CAPTAINCY_IMPACT, Scalar::number(vice_captaincy_impact(view)));
    m.insert(key::OPTIMAL_POINTS, Scalar::from_opt_number(group::mean_points(&dream)));

    // Narrative only
    let top_player = composition(view).into_iter().next();
    m.insert(
        key::TOP_DREAM_PLAYER,
        Scalar::from_opt_text(top_player.as_ref().map(|(p, _)| p.as_str())),
    );
    m.insert(key::TOP_DREAM_COUNT, Scalar::Count(top_player.map(|(_, n)| n).unwrap_or(0)));

    let top_role = dream_role_shares(view).into_iter().next();
    m.insert(
        key::TOP_DREAM_ROLE,
        Scalar::from_opt_text(top_role.as_ref().map(|(r, _)| r.as_str())),
    );
    m.insert(
        key::TOP_DREAM_ROLE_PCT,
        Scalar::number(top_role.map(|(_, pct)| pct).unwrap_or(0.0)),
    );

    m
}

fn regular_mean(view: &FilteredView) -> Option<f64> {
    stats::mean(view.iter().filter(|r| r.is_regular()).map(|r| r.total_fp))
}

pub fn captaincy_impact(view: &FilteredView) -> f64 {
    let captain = stats::mean(view.iter().filter(|r| r.captain).map(|r| r.total_fp));
    stats::ratio_or(captain, regular_mean(view), 0.0)
}

pub fn vice_captaincy_impact(view: &FilteredView) -> f64 {
    let vice = stats::mean(view.iter().filter(|r| r.vice_captain).map(|r| r.total_fp));
    stats::ratio_or(vice, regular_mean(view), 0.0)
}

/// Dream team appearances per player, most frequent first, then by name.
pub fn composition(view: &FilteredView) -> Vec<(String, usize)> {
    let counts = group::group_counts(&view.retain(|r| r.dream_team), |r| r.fullname.as_str());
    let mut out: Vec<(String, usize)> = counts.into_iter().map(|(p, n)| (s!(p), n)).collect();
    // Stable: equal counts stay in name order.
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

/// Share of dream team rows per role (percent), largest first.
pub fn dream_role_shares(view: &FilteredView) -> Vec<(String, f64)> {
    let dream = view.retain(|r| r.dream_team);
    let total = dream.len() as f64;
    if dream.is_empty() {
        return Vec::new();
    }
    let mut out: Vec<(String, f64)> = group::group_counts(&dream, |r| r.role.as_str())
        .into_iter()
        .map(|(role, n)| (s!(role), n as f64 / total * 100.0))
        .collect();
    out.sort_by(|a, b| b.1.total_cmp(&a.1));
    out
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoleSuccess {
    pub role: String,
    pub total: usize,
    pub dream: usize,
    /// Percent of the role's rows that made the dream team.
    pub rate: f64,
}

/// Roles ascending.
pub fn role_success(view: &FilteredView) -> Vec<RoleSuccess> {
    let totals = group::group_counts(view, |r| r.role.as_str());
    let dream: BTreeMap<&str, usize> =
        group::group_counts(&view.retain(|r| r.dream_team), |r| r.role.as_str());
    totals
        .into_iter()
        .map(|(role, total)| {
            let picked = dream.get(role).copied().unwrap_or(0);
            RoleSuccess {
                role: s!(role),
                total,
                dream: picked,
                rate: picked as f64 / total as f64 * 100.0,
            }
        })
        .collect()
}
