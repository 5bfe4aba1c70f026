// src/config/options.rs
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::consts::*;
use crate::metrics::HomeAdvantageMode;

/// Every dashboard page. Order here is tab order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum PageKind {
    Home,
    Overview,
    MatchAnalysis,
    PlayerHub,
    TeamAnalytics,
    StrategyLab,
    AboutUs,
}

impl PageKind {
    pub const ALL: [PageKind; 7] = [
        PageKind::Home,
        PageKind::Overview,
        PageKind::MatchAnalysis,
        PageKind::PlayerHub,
        PageKind::TeamAnalytics,
        PageKind::StrategyLab,
        PageKind::AboutUs,
    ];

    /// Stable slug, used for export directories and the CLI.
    pub fn slug(self) -> &'static str {
        match self {
            PageKind::Home => "home",
            PageKind::Overview => "overview",
            PageKind::MatchAnalysis => "match-analysis",
            PageKind::PlayerHub => "player-hub",
            PageKind::TeamAnalytics => "team-analytics",
            PageKind::StrategyLab => "strategy-lab",
            PageKind::AboutUs => "about-us",
        }
    }

    pub fn index(self) -> usize {
        PageKind::ALL.iter().position(|k| *k == self).unwrap_or(0)
    }
}

/// Knobs that change what the aggregator computes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    pub home_advantage: HomeAdvantageMode,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub data_path: PathBuf,
    pub page: PageKind,
    pub analysis: AnalysisOptions,
    pub format: OutputFormat,
    pub export_dir: PathBuf,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            data_path: resolve_data_path(None),
            page: PageKind::Overview,
            analysis: AnalysisOptions::default(),
            format: OutputFormat::Text,
            export_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl AppOptions {
    /// Export directory for one page: `<export_dir>/<page slug>`.
    pub fn export_dir_for(&self, kind: PageKind) -> PathBuf {
        self.export_dir.join(kind.slug())
    }
}

/// Data file precedence: explicit path, then `$IPL_DATA`, then
/// `ipl_data.csv` in the working directory.
pub fn resolve_data_path(explicit: Option<&Path>) -> PathBuf {
    data_path_from(explicit, env::var_os(DATA_ENV_VAR))
}

/// Same precedence with the environment value passed in. An empty value
/// counts as unset.
pub fn data_path_from(explicit: Option<&Path>, env_value: Option<OsString>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }
    match env_value {
        Some(v) if !v.is_empty() => PathBuf::from(v),
        _ => PathBuf::from(DEFAULT_DATA_FILE),
    }
}
