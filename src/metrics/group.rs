// src/metrics/group.rs
//
// Group-by helpers over a FilteredView. Groups iterate in ascending key
// order, which is what makes argmax tie-breaks reproducible.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::stats;
use crate::filter::FilteredView;
use crate::record::Record;

/// `total_fp` values per key, keys ascending, values in view order.
pub fn group_points<'a, K, F>(view: &FilteredView<'a>, key: F) -> BTreeMap<K, Vec<f64>>
where
    K: Ord,
    F: Fn(&'a Record) -> K,
{
    let mut groups: BTreeMap<K, Vec<f64>> = BTreeMap::new();
    for r in view.iter() {
        groups.entry(key(r)).or_default().push(r.total_fp);
    }
    groups
}

/// Mean `total_fp` per key, keys ascending.
pub fn group_means<'a, K, F>(view: &FilteredView<'a>, key: F) -> Vec<(K, f64)>
where
    K: Ord,
    F: Fn(&'a Record) -> K,
{
    group_points(view, key)
        .into_iter()
        .filter_map(|(k, vs)| stats::mean(vs).map(|m| (k, m)))
        .collect()
}

/// Record count per key, keys ascending.
pub fn group_counts<'a, K, F>(view: &FilteredView<'a>, key: F) -> BTreeMap<K, usize>
where
    K: Ord,
    F: Fn(&'a Record) -> K,
{
    let mut counts: BTreeMap<K, usize> = BTreeMap::new();
    for r in view.iter() {
        *counts.entry(key(r)).or_default() += 1;
    }
    counts
}

/// Key of the highest group mean, ties to the ascending-first key.
pub fn best_group<'a, K, F>(view: &FilteredView<'a>, key: F) -> Option<(K, f64)>
where
    K: Ord,
    F: Fn(&'a Record) -> K,
{
    stats::argmax_first(group_means(view, key))
}

pub fn distinct_count<'a, K, F>(view: &FilteredView<'a>, key: F) -> usize
where
    K: Ord,
    F: Fn(&'a Record) -> K,
{
    view.iter().map(key).collect::<BTreeSet<K>>().len()
}

pub fn distinct_matches(view: &FilteredView) -> usize {
    distinct_count(view, |r| r.match_id)
}

pub fn distinct_players(view: &FilteredView) -> usize {
    distinct_count(view, |r| r.fullname.as_str())
}

/// Union of home and away sides.
pub fn distinct_teams(view: &FilteredView) -> usize {
    let mut teams: BTreeSet<&str> = BTreeSet::new();
    for r in view.iter() {
        teams.insert(&r.home_team);
        teams.insert(&r.away_team);
    }
    teams.len()
}

pub fn mean_points(view: &FilteredView) -> Option<f64> {
    stats::mean(view.iter().map(|r| r.total_fp))
}

/// Row with the highest `total_fp`; first occurrence wins.
pub fn top_record<'a>(view: &FilteredView<'a>) -> Option<&'a Record> {
    stats::argmax_first(view.iter().map(|r| (r, r.total_fp))).map(|(r, _)| r)
}

/// Dense mean matrix over (row key, column key). Combinations with no
/// records stay `None`, which is not the same as a 0.0 mean.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Pivot {
    pub row_keys: Vec<String>,
    pub col_keys: Vec<String>,
    pub cells: Vec<Vec<Option<f64>>>,
}

impl Pivot {
    pub fn build<'a, R, C>(view: &FilteredView<'a>, row_key: R, col_key: C) -> Self
    where
        R: Fn(&'a Record) -> &'a str,
        C: Fn(&'a Record) -> &'a str,
    {
        let means = group_means(view, |r| (row_key(r), col_key(r)));
        let row_keys: Vec<&str> = means.iter().map(|((r, _), _)| *r).collect::<BTreeSet<_>>().into_iter().collect();
        let col_keys: Vec<&str> = means.iter().map(|((_, c), _)| *c).collect::<BTreeSet<_>>().into_iter().collect();

        let mut cells = vec![vec![None; col_keys.len()]; row_keys.len()];
        for ((r, c), m) in &means {
            // Both keys came from `means`, so the searches always hit.
            if let (Ok(ri), Ok(ci)) = (row_keys.binary_search(r), col_keys.binary_search(c)) {
                cells[ri][ci] = Some(*m);
            }
        }

        Self {
            row_keys: row_keys.into_iter().map(|s| s!(s)).collect(),
            col_keys: col_keys.into_iter().map(|s| s!(s)).collect(),
            cells,
        }
    }

    pub fn get(&self, row: &str, col: &str) -> Option<f64> {
        let ri = self.row_keys.iter().position(|k| k == row)?;
        let ci = self.col_keys.iter().position(|k| k == col)?;
        self.cells[ri][ci]
    }

    pub fn is_empty(&self) -> bool {
        self.row_keys.is_empty()
    }
}
