// tests/store_load.rs
use std::fs;
use std::io::Cursor;

use ipl_insights::error::InsightsError;
use ipl_insights::filter::{self, Dimension, FilterSpec};
use ipl_insights::record::Column;
use ipl_insights::store::RecordStore;
use tempfile::tempdir;

const HEADER: &str = "match_id,match_name,season,home_team,away_team,venue,fullname,role,\
batting_innings,bowling_innings,total_fp,captain,vice_captain,dream_team";

fn csv_of(rows: &[&str]) -> String {
    let mut s = String::from(HEADER);
    for r in rows {
        s.push('\n');
        s.push_str(r);
    }
    s.push('\n');
    s
}

#[test]
fn dataframe_style_cells_parse() {
    let data = csv_of(&[
        "101,CSK vs MI,2023,Chennai,Mumbai,Chepauk,MS Dhoni,wicket-keeper,1.0,0.0,54.5,True,False,True",
        "101,CSK vs MI,2023,Chennai,Mumbai,Chepauk,R Sharma,batter,1,0,12,False,False,False",
    ]);
    let store = RecordStore::from_reader(Cursor::new(data), b',').unwrap();
    assert_eq!(store.len(), 2);

    let r = store.get(0).unwrap();
    assert_eq!(r.match_id, 101);
    assert_eq!(r.season, "2023");
    assert_eq!(r.batting_innings, 1);
    assert_eq!(r.total_fp, 54.5);
    assert!(r.captain && r.dream_team && !r.vice_captain);
    assert!(!store.get(1).unwrap().captain);
}

#[test]
fn missing_column_is_recorded_and_its_filter_skipped() {
    let data = "match_id,season,home_team,away_team,fullname,role,total_fp\n\
                1,2022,A,B,p1,batter,10\n\
                2,2023,B,A,p2,bowler,20\n";
    let store = RecordStore::from_reader(Cursor::new(data), b',').unwrap();
    assert!(!store.schema().has(Column::Venue));
    assert!(store.schema().missing().contains(&Column::DreamTeam));
    assert!(store.distinct(Column::Venue).is_empty());

    let spec = FilterSpec::new().with(Dimension::Venue, ["Anywhere"]);
    assert_eq!(filter::apply(&store, &spec).len(), 2);
    assert!(!store.get(0).unwrap().dream_team);
}

#[test]
fn unrecognized_header_is_rejected() {
    let err = RecordStore::from_reader(Cursor::new("foo,bar\n1,2\n"), b',').unwrap_err();
    match err {
        InsightsError::MissingHeader { first } => assert_eq!(first.as_deref(), Some("foo")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn bad_flag_is_a_csv_error() {
    let data = csv_of(&["1,x,2023,A,B,V,p,batter,1,0,10,maybe,False,False"]);
    let err = RecordStore::from_reader(Cursor::new(data), b',').unwrap_err();
    assert!(matches!(err, InsightsError::Csv(_)));
}

#[test]
fn tsv_extension_switches_delimiter() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fantasy.tsv");
    fs::write(
        &path,
        "match_id\tseason\thome_team\taway_team\tvenue\tfullname\trole\ttotal_fp\n\
         7\t2024\tPunjab\tGujarat\tMohali\tp\tbatter\t33.0\n",
    )
    .unwrap();

    let store = RecordStore::load(&path).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(0).unwrap().venue, "Mohali");
}

#[test]
fn unreadable_source_degrades_to_empty_store() {
    let dir = tempdir().unwrap();
    let outcome = RecordStore::load_or_empty(&dir.path().join("nope.csv"));
    assert!(outcome.store.is_empty());
    let msg = outcome.error.unwrap();
    assert!(msg.starts_with("Error loading data:"), "{msg}");
}

#[test]
fn good_file_loads_without_message() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fantasy.csv");
    fs::write(&path, csv_of(&["1,x,2023,A,B,V,p,batter,1,0,10,False,False,False"])).unwrap();
    let outcome = RecordStore::load_or_empty(&path);
    assert!(outcome.error.is_none());
    assert_eq!(outcome.store.len(), 1);
}

#[test]
fn distinct_values_are_sorted_and_teams_are_unioned() {
    let data = csv_of(&[
        "1,x,2023,Mumbai,Chennai,Wankhede,p1,bowler,1,0,10,False,False,False",
        "2,y,2022,Delhi,Kolkata,Kotla,p2,batter,1,0,20,False,False,False",
        "3,z,2023,Chennai,Delhi,Chepauk,p3,batter,1,0,30,False,False,False",
    ]);
    let store = RecordStore::from_reader(Cursor::new(data), b',').unwrap();
    assert_eq!(store.distinct(Column::Season), vec!["2022", "2023"]);
    assert_eq!(store.distinct(Column::Role), vec!["batter", "bowler"]);
    assert_eq!(store.teams(), vec!["Chennai", "Delhi", "Kolkata", "Mumbai"]);
    assert!(store.distinct(Column::TotalFp).is_empty());
}

#[test]
fn blank_id_does_not_reject_the_file() {
    let data = "match_id,season,home_team,away_team,venue,fullname,role,total_fp,captain\n\
                1,2023,A,B,V,p1,batter,10,False\n\
                ,2023,A,B,V,p2,batter,20,False\n";
    let store = RecordStore::from_reader(Cursor::new(data), b',').unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.get(1).unwrap().match_id, 0);
    assert_eq!(store.get(1).unwrap().total_fp, 20.0);
}

#[test]
fn garbage_id_is_still_an_error() {
    let data = csv_of(&["abc,x,2023,A,B,V,p,batter,1,0,10,False,False,False"]);
    assert!(matches!(
        RecordStore::from_reader(Cursor::new(data), b',').unwrap_err(),
        InsightsError::Csv(_)
    ));
}
