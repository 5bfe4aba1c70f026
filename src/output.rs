// src/output.rs
//! What a page hands to the presentation layer.
//!
//! - `Kpi`: one headline tile (label + display value).
//! - `TableData`: one chart series as plain headers + rows of display text.
//! - `RenderedOutput`: everything a page produced for one filter state.
//!
//! Frontends (GUI tiles/tables, CLI text/JSON, CSV export) only read these;
//! none of them look at records or recompute anything.

use std::fmt::Write;

use serde::Serialize;

use crate::config::consts::{NO_DATA_SOURCE, TILE_MAX_CHARS};
use crate::metrics::{Metrics, Pivot, Scalar};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Kpi {
    pub label: String,
    /// Display text, truncated for the tile.
    pub value: String,
    pub raw: Scalar,
}

impl Kpi {
    pub fn new(label: &str, raw: Scalar) -> Self {
        Self { label: s!(label), value: truncate_tile(&raw.to_string()), raw }
    }

    /// Append a unit to the display value ("1.5x"). N/A stays bare.
    pub fn with_unit(mut self, unit: &str) -> Self {
        if self.raw.is_available() {
            self.value = truncate_tile(&format!("{}{unit}", self.raw));
        }
        self
    }
}

/// Long names get cut to the tile width with a trailing "...".
pub fn truncate_tile(text: &str) -> String {
    if text.chars().count() > TILE_MAX_CHARS {
        let head: String = text.chars().take(TILE_MAX_CHARS).collect();
        format!("{head}...")
    } else {
        s!(text)
    }
}

/// A chart series as a table.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TableData {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn new(title: &str, headers: &[&str]) -> Self {
        Self {
            title: s!(title),
            headers: headers.iter().map(|h| s!(*h)).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ncols(&self) -> usize {
        self.headers.len()
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// Pivot with row keys in the first column. Missing combinations are
    /// left blank so they cannot be read as a zero mean.
    pub fn from_pivot(title: &str, corner: &str, pivot: &Pivot) -> Self {
        let mut headers = vec![s!(corner)];
        headers.extend(pivot.col_keys.iter().cloned());
        let rows = pivot
            .row_keys
            .iter()
            .zip(&pivot.cells)
            .map(|(key, cells)| {
                let mut row = vec![key.clone()];
                row.extend(cells.iter().map(|c| fmt_opt(*c)));
                row
            })
            .collect();
        Self { title: s!(title), headers, rows }
    }
}

/// One decimal, the precision every page displays.
pub fn fmt1(v: f64) -> String {
    format!("{v:.1}")
}

pub fn fmt_opt(v: Option<f64>) -> String {
    v.map(fmt1).unwrap_or_default()
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RenderedOutput {
    pub title: String,
    /// Load errors and "no data" banners.
    pub notice: Option<String>,
    /// Static pages carry prose here instead of metrics.
    pub body: Vec<String>,
    pub kpis: Vec<Kpi>,
    pub tables: Vec<TableData>,
    pub insight: Option<String>,
    pub metrics: Option<Metrics>,
}

impl RenderedOutput {
    pub fn new(title: &str) -> Self {
        Self { title: s!(title), ..Self::default() }
    }

    /// Analytical page over an empty store.
    pub fn no_data(title: &str) -> Self {
        Self { notice: Some(s!(NO_DATA_SOURCE)), ..Self::new(title) }
    }

    pub fn kpi(&self, label: &str) -> Option<&Kpi> {
        self.kpis.iter().find(|k| k.label == label)
    }

    pub fn table(&self, title: &str) -> Option<&TableData> {
        self.tables.iter().find(|t| t.title == title)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Plain-text rendering for terminals: title, notice, prose, KPI lines,
    /// tables with ` | ` separators, then the insight.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "== {} ==", self.title);
        if let Some(n) = &self.notice {
            let _ = writeln!(out, "{n}");
        }
        for p in &self.body {
            let _ = writeln!(out, "{p}");
        }
        if !self.kpis.is_empty() {
            out.push('\n');
            for k in &self.kpis {
                let _ = writeln!(out, "{}: {}", k.label, k.value);
            }
        }
        for t in &self.tables {
            let _ = writeln!(out, "\n-- {} --", t.title);
            let _ = writeln!(out, "{}", t.headers.join(" | "));
            for row in &t.rows {
                let _ = writeln!(out, "{}", row.join(" | "));
            }
        }
        if let Some(i) = self.insight.as_deref().filter(|i| !i.is_empty()) {
            let _ = writeln!(out, "\n{i}");
        }
        out
    }
}
