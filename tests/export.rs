// tests/export.rs
mod common;

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use ipl_insights::config::consts::DEFAULT_DATA_FILE;
use ipl_insights::config::options::{AppOptions, PageKind, data_path_from, resolve_data_path};
use ipl_insights::core::sanitize::sanitize_filename;
use ipl_insights::error::InsightsError;
use ipl_insights::file::export_tables;
use ipl_insights::filter::FilterSpec;
use ipl_insights::output::{RenderedOutput, TableData};
use ipl_insights::pages::router;
use tempfile::tempdir;

#[test]
fn page_tables_become_csv_files() {
    let store = common::league();
    let out = router::page_for(PageKind::TeamAnalytics).render(&store, &FilterSpec::new());
    let dir = tempdir().unwrap();

    let written = export_tables(dir.path(), &out).unwrap();
    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["team_performance_matrix.csv", "home_vs_away_performance.csv"]);

    let split = fs::read_to_string(&written[1]).unwrap();
    let mut lines = split.lines();
    assert_eq!(lines.next(), Some("Team,Home Performance,Away Performance"));
    assert!(split.lines().any(|l| l == "Kolkata,,47.5"));
}

#[test]
fn duplicate_titles_get_numbered() {
    let mut out = RenderedOutput::new("x");
    for _ in 0..3 {
        let mut t = TableData::new("Venue Performance", &["Venue", "Avg"]);
        t.push(vec!["Chepauk".into(), "61.0".into()]);
        out.tables.push(t);
    }
    let dir = tempdir().unwrap();
    let written = export_tables(&dir.path().join("nested"), &out).unwrap();

    let names: Vec<_> = written.iter().map(|p| p.file_name().unwrap().to_owned()).collect();
    assert_eq!(names, vec![
        "venue_performance.csv",
        "venue_performance (2).csv",
        "venue_performance (3).csv",
    ]);
    assert!(written.iter().all(|p| p.exists()));
}

#[test]
fn export_into_a_file_path_fails() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("taken");
    fs::write(&file, "").unwrap();

    let mut out = RenderedOutput::new("x");
    out.tables.push(TableData::new("t", &["a"]));
    let err = export_tables(&file, &out).unwrap_err();
    assert!(matches!(err, InsightsError::NotADirectory(_)));
}

#[test]
fn sanitized_names() {
    assert_eq!(
        sanitize_filename("Team Performance Heatmap (Home vs Away)", 0),
        "team_performance_heatmap_home_vs_away"
    );
    assert_eq!(sanitize_filename("  Role   Success ", 1), "role_success");
    assert_eq!(sanitize_filename("???", 4), "table_4");
}

#[test]
fn explicit_data_path_wins() {
    let p = Path::new("/tmp/somewhere/else.csv");
    assert_eq!(resolve_data_path(Some(p)), p.to_path_buf());
}

#[test]
fn data_path_falls_back_to_env_then_default() {
    let explicit = Path::new("given.csv");
    let env = || Some(OsString::from("/data/from_env.csv"));

    assert_eq!(data_path_from(Some(explicit), env()), PathBuf::from("given.csv"));
    assert_eq!(data_path_from(None, env()), PathBuf::from("/data/from_env.csv"));
    assert_eq!(data_path_from(None, Some(OsString::new())), PathBuf::from(DEFAULT_DATA_FILE));
    assert_eq!(data_path_from(None, None), PathBuf::from("ipl_data.csv"));
}

#[test]
fn export_dir_is_per_page() {
    let opts = AppOptions::default();
    assert_eq!(opts.export_dir_for(PageKind::StrategyLab), Path::new("out").join("strategy-lab"));
}
