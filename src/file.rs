// src/file.rs
//
// CSV export of a page's tables, one file per table.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::core::sanitize::sanitize_filename;
use crate::error::{InsightsError, Result};
use crate::output::{RenderedOutput, TableData};

/// Write every table of `out` into `dir` as `<title>.csv`. Returns the
/// paths written, in table order.
pub fn export_tables(dir: &Path, out: &RenderedOutput) -> Result<Vec<PathBuf>> {
    ensure_directory(dir)?;

    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut written = Vec::with_capacity(out.tables.len());

    for (ix, table) in out.tables.iter().enumerate() {
        let stem = sanitize_filename(&table.title, ix);
        let path = resolve_filename(dir, &stem, &mut seen, "csv");
        write_table(&path, table)?;
        written.push(path);
    }

    info!("Export: wrote {} table(s) to {}", written.len(), dir.display());
    Ok(written)
}

/// Headers, then rows. Blank cells stay blank.
pub fn write_table(path: &Path, table: &TableData) -> Result<()> {
    let mut w = csv::Writer::from_path(path)?;
    w.write_record(&table.headers)?;
    for row in &table.rows {
        w.write_record(row)?;
    }
    w.flush().map_err(|source| InsightsError::Io { path: path.to_path_buf(), source })?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(InsightsError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| InsightsError::Io { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}

/// Duplicate handling only within this run.
pub fn resolve_filename(
    dir: &Path,
    stem: &str,                        // already sanitized, no extension
    seen_names: &mut HashMap<String, usize>,
    ext: &str,
) -> PathBuf {
    let count = seen_names.entry(stem.to_string()).or_insert(0);

    // First occurrence: "<stem>.ext"
    // Subsequent:       "<stem> (N).ext" with N starting at 2
    let filename = if *count == 0 {
        format!("{stem}.{ext}")
    } else {
        format!("{stem} ({}).{ext}", *count + 1)
    };

    *count += 1;
    dir.join(filename)
}
