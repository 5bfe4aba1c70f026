// src/filter.rs
//
// Filter Engine.
//
// - FilterSpec: per-dimension inclusion sets chosen in the sidebar.
// - FilteredView: zero-copy projection of the store (row indexes only).
//
// An absent or empty selection means "no restriction" for that dimension,
// and a dimension whose column the file never carried is skipped.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::record::{Column, Record};
use crate::store::RecordStore;

/// Filterable dimensions. `Team` spans both `home_team` and `away_team`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Season,
    Team,
    Venue,
    Role,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Season,
        Dimension::Team,
        Dimension::Venue,
        Dimension::Role,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Dimension::Season => "Season",
            Dimension::Team => "Team",
            Dimension::Venue => "Venue",
            Dimension::Role => "Role",
        }
    }

    pub fn columns(self) -> &'static [Column] {
        match self {
            Dimension::Season => &[Column::Season],
            Dimension::Team => &[Column::HomeTeam, Column::AwayTeam],
            Dimension::Venue => &[Column::Venue],
            Dimension::Role => &[Column::Role],
        }
    }

    /// Sorted distinct values the store offers for this dimension.
    pub fn choices(self, store: &RecordStore) -> Vec<String> {
        match self {
            Dimension::Team => store.teams(),
            _ => store.distinct(self.columns()[0]),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    selections: BTreeMap<Dimension, BTreeSet<String>>,
}

impl FilterSpec {
    /// No restriction on any dimension.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every dimension set to every observed value (the filter UI default).
    pub fn all_observed(store: &RecordStore) -> Self {
        let mut spec = Self::new();
        for dim in Dimension::ALL {
            let values = dim.choices(store);
            if !values.is_empty() {
                spec.set(dim, values);
            }
        }
        spec
    }

    /// Builder form of `set`.
    pub fn with<I, S>(mut self, dim: Dimension, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(dim, values);
        self
    }

    pub fn set<I, S>(&mut self, dim: Dimension, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selections.insert(dim, values.into_iter().map(Into::into).collect());
    }

    pub fn clear(&mut self, dim: Dimension) {
        self.selections.remove(&dim);
    }

    /// Add or remove a single value; returns whether it is now selected.
    pub fn toggle(&mut self, dim: Dimension, value: &str) -> bool {
        let set = self.selections.entry(dim).or_default();
        if set.remove(value) {
            false
        } else {
            set.insert(s!(value));
            true
        }
    }

    pub fn selection(&self, dim: Dimension) -> Option<&BTreeSet<String>> {
        self.selections.get(&dim)
    }

    pub fn is_selected(&self, dim: Dimension, value: &str) -> bool {
        self.selections.get(&dim).is_some_and(|s| s.contains(value))
    }

    /// Drop selections for dimensions a page does not recognize.
    pub fn restricted_to(&self, dims: &[Dimension]) -> Self {
        let selections = self
            .selections
            .iter()
            .filter(|(d, _)| dims.contains(d))
            .map(|(d, s)| (*d, s.clone()))
            .collect();
        Self { selections }
    }

    /// True when no dimension carries a non-empty selection.
    pub fn is_unrestricted(&self) -> bool {
        self.selections.values().all(|s| s.is_empty())
    }
}

/// One active predicate: a dimension's selection plus the columns it tests.
struct Predicate<'s> {
    columns: Vec<Column>,
    values: &'s BTreeSet<String>,
}

impl Predicate<'_> {
    /// OR across the dimension's columns (home OR away for teams).
    fn matches(&self, r: &Record) -> bool {
        self.columns
            .iter()
            .filter_map(|c| r.text(*c))
            .any(|v| self.values.contains(v))
    }
}

fn predicates<'s>(store: &RecordStore, spec: &'s FilterSpec) -> Vec<Predicate<'s>> {
    let schema = store.schema();
    let mut out = Vec::new();
    for (dim, values) in &spec.selections {
        if values.is_empty() {
            continue;
        }
        let columns: Vec<Column> = dim.columns().iter().copied().filter(|c| schema.has(*c)).collect();
        if columns.is_empty() {
            debug!("Filter: skipping {:?}, column absent", dim);
            continue;
        }
        out.push(Predicate { columns, values });
    }
    out
}

/// Apply a spec to the whole store.
pub fn apply<'a>(store: &'a RecordStore, spec: &FilterSpec) -> FilteredView<'a> {
    FilteredView::all(store).refine(spec)
}

/// Zero-copy filtered view. Holds row indexes into the store, in store order.
#[derive(Clone, Debug)]
pub struct FilteredView<'a> {
    row_ix: Vec<usize>,
    store: &'a RecordStore,
}

impl<'a> FilteredView<'a> {
    /// Unfiltered view over every record.
    pub fn all(store: &'a RecordStore) -> Self {
        Self { row_ix: (0..store.len()).collect(), store }
    }

    /// Apply `spec` on top of this view (AND with what it already keeps).
    pub fn refine(&self, spec: &FilterSpec) -> FilteredView<'a> {
        let preds = predicates(self.store, spec);
        if preds.is_empty() {
            return self.clone();
        }
        let row_ix = self
            .row_ix
            .iter()
            .copied()
            .filter(|&ix| {
                let r = &self.store.records()[ix];
                preds.iter().all(|p| p.matches(r))
            })
            .collect();
        Self { row_ix, store: self.store }
    }

    /// Keep only rows passing `keep`. Used for sub-views (e.g. one role).
    pub fn retain<F>(&self, keep: F) -> FilteredView<'a>
    where
        F: Fn(&Record) -> bool,
    {
        let row_ix = self
            .row_ix
            .iter()
            .copied()
            .filter(|&ix| keep(&self.store.records()[ix]))
            .collect();
        Self { row_ix, store: self.store }
    }

    pub fn len(&self) -> usize {
        self.row_ix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_ix.is_empty()
    }

    pub fn row_indices(&self) -> &[usize] {
        &self.row_ix
    }

    pub fn store(&self) -> &'a RecordStore {
        self.store
    }

    /// Borrow a record by projected position.
    pub fn record(&self, i: usize) -> Option<&'a Record> {
        let store = self.store;
        self.row_ix.get(i).and_then(|&ix| store.get(ix))
    }

    pub fn first(&self) -> Option<&'a Record> {
        self.record(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        let records = self.store.records();
        self.row_ix.iter().map(move |&ix| &records[ix])
    }

    /// Materialize owned records (export/test boundaries).
    pub fn to_owned_records(&self) -> Vec<Record> {
        self.iter().cloned().collect()
    }
}

impl PartialEq for FilteredView<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.store, other.store) && self.row_ix == other.row_ix
    }
}
