use serde::{Deserialize, Serialize};

use crate::leaderboard::constants::LEADERBOARD_CAPACITY;

/// One finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub score: u32,
}

impl ScoreRecord {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Best scores, highest first. Ties keep insertion order and only the top
/// `LEADERBOARD_CAPACITY` records are retained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    records: Vec<ScoreRecord>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rank already-ordered records. Earlier entries win ties.
    pub fn from_records(records: Vec<ScoreRecord>) -> Self {
        let mut board = Self { records };
        board.rank();
        board
    }

    /// Add a record and return its 1-based position, or `None` when it did
    /// not make the cut
    pub fn insert(&mut self, record: ScoreRecord) -> Option<usize> {
        // a new record goes below existing records with the same score
        let position = self.records.partition_point(|r| r.score >= record.score);
        if position >= LEADERBOARD_CAPACITY {
            return None;
        }
        self.records.insert(position, record);
        self.records.truncate(LEADERBOARD_CAPACITY);
        Some(position + 1)
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<ScoreRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn rank(&mut self) {
        self.records.sort_by(|a, b| b.score.cmp(&a.score));
        self.records.truncate(LEADERBOARD_CAPACITY);
    }
}
