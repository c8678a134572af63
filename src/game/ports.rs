use std::time::Duration;

use crate::deal::Deal;
use crate::game::round::RoundResult;
use crate::leaderboard::ScoreRecord;

/// Everything the game shows to, or reads from, the player
pub trait Presenter {
    fn display_deal(&mut self, round: usize, deal: &Deal);

    fn display_timer(&mut self, seconds_remaining: u64);

    /// Wait up to `wait` for the player's answer: `NO` or an expression
    fn poll_submission(&mut self, wait: Duration) -> Option<String>;

    fn display_round_result(&mut self, result: &RoundResult, total: u32);

    fn display_final_score(&mut self, name: &str, total: u32);

    fn display_leaderboard(&mut self, records: &[ScoreRecord]);

    /// Non-fatal problems such as a failed leaderboard save
    fn display_warning(&mut self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Click,
    Correct,
    Wrong,
}

/// Fire-and-forget sound effects. Implementations swallow their own errors.
pub trait AudioCue {
    fn play_cue(&self, cue: Cue);
}

/// Plays nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl AudioCue for Silent {
    fn play_cue(&self, _cue: Cue) {}
}
