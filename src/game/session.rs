use std::time::Duration;

use log::warn;
use rand::Rng;

use crate::deal::Deal;
use crate::game::constants::ROUNDS_PER_GAME;
use crate::game::round::{Round, RoundResult};
use crate::leaderboard::ScoreRecord;

/// Running state of one player's game
#[derive(Debug, Clone)]
pub struct Session {
    player: String,
    results: Vec<RoundResult>,
    total: u32,
}

impl Session {
    pub fn new(player: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            results: Vec::with_capacity(ROUNDS_PER_GAME),
            total: 0,
        }
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn total_score(&self) -> u32 {
        self.total
    }

    pub fn results(&self) -> &[RoundResult] {
        &self.results
    }

    pub fn rounds_played(&self) -> usize {
        self.results.len()
    }

    pub fn is_finished(&self) -> bool {
        self.rounds_played() >= ROUNDS_PER_GAME
    }

    /// Deal the next round, or `None` once every round has been recorded
    pub fn next_round<R: Rng + ?Sized>(&self, rng: &mut R, time_limit: Duration) -> Option<Round> {
        if self.is_finished() {
            return None;
        }
        Some(Round::new(
            self.rounds_played() + 1,
            Deal::random(rng),
            time_limit,
        ))
    }

    /// Add a round's points and return the new total. A result for a round
    /// that is already recorded leaves the session unchanged.
    pub fn record(&mut self, result: RoundResult) -> u32 {
        if self.results.iter().any(|r| r.round == result.round) {
            warn!("Round {} already recorded, ignoring", result.round);
            return self.total;
        }
        self.total += result.points;
        self.results.push(result);
        self.total
    }

    pub fn to_record(&self) -> ScoreRecord {
        ScoreRecord::new(self.player.clone(), self.total)
    }
}
