// src/record.rs
//
// One row of the fantasy-points table: one player's performance in one match.
// Cells are parsed leniently because the table usually comes out of a
// dataframe export (True/False flags, "2.0" innings, numeric seasons).

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    #[serde(deserialize_with = "de::int")]
    pub match_id: i64,
    pub match_name: String,
    /// Kept as text even when the file stores it as a number.
    #[serde(deserialize_with = "de::text")]
    pub season: String,
    pub home_team: String,
    pub away_team: String,
    pub venue: String,
    pub fullname: String,
    pub role: String,
    #[serde(deserialize_with = "de::count")]
    pub batting_innings: u32,
    #[serde(deserialize_with = "de::count")]
    pub bowling_innings: u32,
    #[serde(deserialize_with = "de::points")]
    pub total_fp: f64,
    #[serde(deserialize_with = "de::flag")]
    pub captain: bool,
    #[serde(deserialize_with = "de::flag")]
    pub vice_captain: bool,
    #[serde(deserialize_with = "de::flag")]
    pub dream_team: bool,
}

/// Every column the table is expected to carry, in file order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    MatchId,
    MatchName,
    Season,
    HomeTeam,
    AwayTeam,
    Venue,
    Fullname,
    Role,
    BattingInnings,
    BowlingInnings,
    TotalFp,
    Captain,
    ViceCaptain,
    DreamTeam,
}

impl Column {
    pub const ALL: [Column; 14] = [
        Column::MatchId,
        Column::MatchName,
        Column::Season,
        Column::HomeTeam,
        Column::AwayTeam,
        Column::Venue,
        Column::Fullname,
        Column::Role,
        Column::BattingInnings,
        Column::BowlingInnings,
        Column::TotalFp,
        Column::Captain,
        Column::ViceCaptain,
        Column::DreamTeam,
    ];

    /// Header name as it appears in the file.
    pub fn name(self) -> &'static str {
        match self {
            Column::MatchId => "match_id",
            Column::MatchName => "match_name",
            Column::Season => "season",
            Column::HomeTeam => "home_team",
            Column::AwayTeam => "away_team",
            Column::Venue => "venue",
            Column::Fullname => "fullname",
            Column::Role => "role",
            Column::BattingInnings => "batting_innings",
            Column::BowlingInnings => "bowling_innings",
            Column::TotalFp => "total_fp",
            Column::Captain => "captain",
            Column::ViceCaptain => "vice_captain",
            Column::DreamTeam => "dream_team",
        }
    }

    pub fn from_name(name: &str) -> Option<Column> {
        let name = name.trim();
        Column::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl Record {
    /// Column-based lookup for the text columns. Numeric and flag columns
    /// return `None`.
    pub fn text(&self, col: Column) -> Option<&str> {
        match col {
            Column::MatchName => Some(&self.match_name),
            Column::Season => Some(&self.season),
            Column::HomeTeam => Some(&self.home_team),
            Column::AwayTeam => Some(&self.away_team),
            Column::Venue => Some(&self.venue),
            Column::Fullname => Some(&self.fullname),
            Column::Role => Some(&self.role),
            _ => None,
        }
    }

    /// Neither captain nor vice-captain.
    pub fn is_regular(&self) -> bool {
        !self.captain && !self.vice_captain
    }
}

/// Lenient cell parsers used by the `Record` derive.
mod de {
    use serde::de::{Deserializer, Error};
    use serde::Deserialize;

    fn raw<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(String::deserialize(d)?.trim().to_string())
    }

    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        raw(d)
    }

    pub fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        let cell = raw(d)?;
        match cell.to_ascii_lowercase().as_str() {
            "true" | "t" | "yes" | "y" | "1" | "1.0" => Ok(true),
            "" | "false" | "f" | "no" | "n" | "0" | "0.0" => Ok(false),
            other => Err(D::Error::custom(format!("not a boolean: {other:?}"))),
        }
    }

    pub fn count<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
        let cell = raw(d)?;
        if cell.is_empty() {
            return Ok(0);
        }
        if let Ok(n) = cell.parse::<u32>() {
            return Ok(n);
        }
        match cell.parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= u32::MAX as f64 => {
                Ok(v as u32)
            }
            _ => Err(D::Error::custom(format!("not a non-negative count: {cell:?}"))),
        }
    }

    /// Empty cells read as id 0, like the other numeric columns.
    pub fn int<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
        let cell = raw(d)?;
        if cell.is_empty() {
            return Ok(0);
        }
        if let Ok(n) = cell.parse::<i64>() {
            return Ok(n);
        }
        match cell.parse::<f64>() {
            Ok(v) if v.is_finite() && v.fract() == 0.0 => Ok(v as i64),
            _ => Err(D::Error::custom(format!("not an integer id: {cell:?}"))),
        }
    }

    /// Empty cells count as zero points.
    pub fn points<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        let cell = raw(d)?;
        if cell.is_empty() {
            return Ok(0.0);
        }
        match cell.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(D::Error::custom(format!("not a finite number: {cell:?}"))),
        }
    }
}
