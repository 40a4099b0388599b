//! Score records and the ranked leaderboard

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default number of entries kept on a locally merged leaderboard
pub const DEFAULT_LEADERBOARD_CAPACITY: usize = 10;

/// Message shown when there is nothing to rank
pub const EMPTY_LEADERBOARD_MESSAGE: &str = "Be the first to score!";

/// A finished game's result. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub score: u32,
    pub date: String,
}

impl ScoreRecord {
    pub fn new(name: impl Into<String>, score: u32, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            score,
            date: format_score_date(date),
        }
    }
}

/// Render a date the way score records carry it: `M/D/YYYY`
pub fn format_score_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Ranked list of score records
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<ScoreRecord>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a list as-is. Server-returned lists are authoritative for
    /// ordering and are never re-sorted.
    pub fn from_ranked(entries: Vec<ScoreRecord>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ScoreRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge a record locally.
    ///
    /// The record goes before the first entry with a strictly lower score, so
    /// the list stays sorted descending and equal scores keep insertion order.
    /// The list is then truncated to `capacity`. Returns the 0-based rank, or
    /// `None` if the record fell off the end.
    pub fn insert(&mut self, record: ScoreRecord, capacity: usize) -> Option<usize> {
        let position = self
            .entries
            .iter()
            .position(|existing| record.score > existing.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(position, record);
        self.entries.truncate(capacity);
        (position < self.entries.len()).then_some(position)
    }

    /// Whether scores are in non-increasing order
    pub fn is_ranked(&self) -> bool {
        self.entries.windows(2).all(|w| w[0].score >= w[1].score)
    }
}

/// What the score indicator currently shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScoreDisplay {
    /// Shown while a new game is being set up
    Placeholder,
    /// Completed rounds of the current game
    Value(u32),
}

impl fmt::Display for ScoreDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreDisplay::Placeholder => f.write_str("--"),
            ScoreDisplay::Value(score) => write!(f, "{}", score),
        }
    }
}

/// One rendered leaderboard row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardRow {
    /// 1-based rank
    pub position: usize,
    pub name: String,
    pub score: u32,
    pub date: String,
}

/// Read-only projection of a leaderboard for display
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LeaderboardView {
    Empty,
    Ranked(Vec<LeaderboardRow>),
}

impl LeaderboardView {
    pub fn project(board: &Leaderboard) -> Self {
        if board.is_empty() {
            return LeaderboardView::Empty;
        }
        LeaderboardView::Ranked(
            board
                .entries()
                .iter()
                .enumerate()
                .map(|(i, record)| LeaderboardRow {
                    position: i + 1,
                    name: record.name.clone(),
                    score: record.score,
                    date: record.date.clone(),
                })
                .collect(),
        )
    }
}
