// tests/common/mod.rs
//
// Record fixtures shared by the integration tests.
#![allow(dead_code)]

use ipl_insights::record::Record;
use ipl_insights::store::RecordStore;

/// One player row. Flags default to false, innings to 1/0.
pub fn rec(
    match_id: i64,
    season: &str,
    home: &str,
    away: &str,
    venue: &str,
    player: &str,
    role: &str,
    fp: f64,
) -> Record {
    Record {
        match_id,
        match_name: format!("{home} vs {away}"),
        season: season.into(),
        home_team: home.into(),
        away_team: away.into(),
        venue: venue.into(),
        fullname: player.into(),
        role: role.into(),
        batting_innings: 1,
        bowling_innings: 0,
        total_fp: fp,
        ..Record::default()
    }
}

pub fn captain(mut r: Record) -> Record {
    r.captain = true;
    r
}

pub fn vice(mut r: Record) -> Record {
    r.vice_captain = true;
    r
}

pub fn dream(mut r: Record) -> Record {
    r.dream_team = true;
    r
}

/// Two seasons, four teams, three venues.
pub fn league() -> RecordStore {
    RecordStore::from_records(vec![
        rec(1, "2022", "Chennai", "Mumbai", "Chepauk", "Dhoni", "wicket-keeper", 40.0),
        rec(1, "2022", "Chennai", "Mumbai", "Chepauk", "Rohit", "batter", 60.0),
        dream(rec(1, "2022", "Chennai", "Mumbai", "Chepauk", "Bumrah", "bowler", 90.0)),
        rec(2, "2022", "Delhi", "Kolkata", "Kotla", "Pant", "wicket-keeper", 20.0),
        dream(rec(2, "2022", "Delhi", "Kolkata", "Kotla", "Russell", "all-rounder", 75.0)),
        rec(3, "2023", "Mumbai", "Chennai", "Wankhede", "Rohit", "batter", 35.0),
        dream(captain(rec(3, "2023", "Mumbai", "Chennai", "Wankhede", "Bumrah", "bowler", 88.0))),
        vice(rec(3, "2023", "Mumbai", "Chennai", "Wankhede", "Dhoni", "wicket-keeper", 50.0)),
        rec(4, "2023", "Chennai", "Delhi", "Chepauk", "Dhoni", "wicket-keeper", 45.0),
        dream(rec(4, "2023", "Chennai", "Delhi", "Chepauk", "Pant", "wicket-keeper", 70.0)),
    ])
}
