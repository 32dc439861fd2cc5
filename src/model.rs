use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rendered between the two halves of a score pair ("2:1").
pub const SCORE_SEPARATOR: char = ':';
/// Rendered in place of a score that is not known or not filled in.
pub const NO_RESULT: &str = "-";
/// Rendered between team names in a fixture label ("BRA - DEU").
pub const TEAMS_SEPARATOR: &str = "-";

/// Lifecycle of a match. The serialized strings are a wire contract:
/// callers' persistence must store these exact values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Live,
    Finished,
}

impl MatchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::Live => "live",
            MatchStatus::Finished => "finished",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    #[serde(rename = "group")]
    Group,
    #[serde(rename = "round_16")]
    Round16,
    #[serde(rename = "quarter")]
    Quarter,
    #[serde(rename = "semi")]
    Semi,
    #[serde(rename = "final")]
    Final,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    /// Canonical 3-letter code, the stable join key across the pool.
    pub code: String,
    /// Group letter during the group stage, absent in the knockouts.
    pub group: Option<char>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: u32,
    /// Stable ordering key, unique per competition.
    pub match_number: u32,
    pub home_team: Team,
    pub away_team: Team,
    pub match_date: DateTime<Utc>,
    pub stage: Stage,
    pub status: MatchStatus,
    pub home_score: Option<u8>,
    pub away_score: Option<u8>,
}

impl Match {
    /// Both scores, once an official result has been recorded.
    pub fn result(&self) -> Option<(u8, u8)> {
        match (self.home_score, self.away_score) {
            (Some(home), Some(away)) => Some((home, away)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: u32,
    /// Unique display key; sheet parsing matches against this.
    pub name: String,
    pub email: Option<String>,
}

/// One participant's guess for one match. Composite-unique on
/// (participant_id, match_id); `points` is derived and re-established by
/// recalculation whenever the match result changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub participant_id: u32,
    pub match_id: u32,
    pub home_score: u8,
    pub away_score: u8,
    pub points: u8,
}

/// Day and month as written on a score sheet. Sheets carry no year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetDate {
    pub day: u8,
    pub month: u8,
}

impl fmt::Display for SheetDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}.{:02}", self.day, self.month)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetTime {
    pub hour: u8,
    pub minute: u8,
}

impl fmt::Display for SheetTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// One candidate prediction extracted from sheet text. Team fields hold the
/// canonical code when resolution succeeded, otherwise the raw token so a
/// reviewer can fix it. A `None` score is a box the participant left blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedPrediction {
    pub match_number: Option<u32>,
    pub date: Option<SheetDate>,
    pub time: Option<SheetTime>,
    pub group: Option<char>,
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub home_score: Option<u8>,
    pub away_score: Option<u8>,
}

/// Best-effort parse of one sheet. `raw_text` is the unmodified input so a
/// human can review whatever the line patterns did not pick up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSheet {
    pub participant_name: String,
    pub raw_text: String,
    pub predictions: Vec<ParsedPrediction>,
}

/// Per-participant aggregate counts, the leaderboard's scoring input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantTotals {
    pub participant_id: u32,
    pub name: String,
    pub total_points: u32,
    pub exact_scores: u32,
    pub correct_outcomes: u32,
    pub predictions_count: u32,
}

/// A participant's prediction for one previewed match; both scores are
/// `None` when nothing was submitted, never an omitted column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionSlot {
    pub match_id: u32,
    pub home_score: Option<u8>,
    pub away_score: Option<u8>,
}

/// What the UI needs to label a preview column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPreview {
    pub match_id: u32,
    pub match_number: u32,
    pub home_code: String,
    pub away_code: String,
    pub status: MatchStatus,
}

/// One ranked leaderboard row. Derived output, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub participant_id: u32,
    pub name: String,
    /// Medal emoji for ranks 1-3, numeric string beyond.
    pub rank: String,
    pub total_points: u32,
    pub exact_scores: u32,
    pub correct_outcomes: u32,
    pub predictions_count: u32,
    pub next_predictions: Vec<PredictionSlot>,
    pub next_matches: Vec<MatchPreview>,
}

/// "2:1", "2:-", "-:-". Missing sides render as [`NO_RESULT`].
pub fn format_score(home: Option<u8>, away: Option<u8>) -> String {
    let cell = |side: Option<u8>| match side {
        Some(value) => value.to_string(),
        None => NO_RESULT.to_string(),
    };
    format!("{}{SCORE_SEPARATOR}{}", cell(home), cell(away))
}
