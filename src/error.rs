// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading the record table or writing exports.
///
/// Pages never see these: the loader absorbs them into an empty store
/// plus a message (see `store::LoadOutcome`).
#[derive(Debug, Error)]
pub enum InsightsError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("header row has none of the expected columns (first cell: {first:?})")]
    MissingHeader { first: Option<String> },
    #[error("export directory {0} exists but is not a directory")]
    NotADirectory(PathBuf),
}

pub type Result<T> = std::result::Result<T, InsightsError>;
