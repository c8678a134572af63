use std::time::Instant;

use log::{info, warn};
use rand::Rng;

use crate::game::config::GameConfig;
use crate::game::ports::{AudioCue, Cue, Presenter};
use crate::game::round::{Round, RoundResult, Tick};
use crate::game::session::Session;
use crate::leaderboard::{Leaderboard, LeaderboardStore, ScoreRecord};

/// What a finished game left behind
#[derive(Debug, Clone, PartialEq)]
pub struct GameSummary {
    pub record: ScoreRecord,
    pub results: Vec<RoundResult>,
    /// 1-based leaderboard position, if the score made the board
    pub rank: Option<usize>,
    pub saved: bool,
}

/// Runs rounds against a presenter and files the final score
pub struct GameController<P, A, S> {
    config: GameConfig,
    presenter: P,
    audio: A,
    store: S,
}

impl<P, A, S> GameController<P, A, S>
where
    P: Presenter,
    A: AudioCue,
    S: LeaderboardStore,
{
    pub fn new(config: GameConfig, presenter: P, audio: A, store: S) -> Self {
        Self {
            config,
            presenter,
            audio,
            store,
        }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Play a full game for `player` and record the score
    pub fn play<R: Rng + ?Sized>(&mut self, player: &str, rng: &mut R) -> GameSummary {
        info!("Starting game for '{}'", player);
        let mut session = Session::new(player);

        while let Some(round) = session.next_round(&mut *rng, self.config.time_limit) {
            let number = round.number();
            match self.play_round(round) {
                Some(result) => {
                    self.audio.play_cue(if result.outcome.is_success() {
                        Cue::Correct
                    } else {
                        Cue::Wrong
                    });
                    let total = session.record(result.clone());
                    self.presenter.display_round_result(&result, total);
                }
                None => {
                    warn!("Round {} ended without a result", number);
                    break;
                }
            }
        }

        self.finish(&session)
    }

    /// Show the stored leaderboard
    pub fn show_leaderboard(&mut self) {
        let records = self.store.load();
        self.audio.play_cue(Cue::Click);
        self.presenter.display_leaderboard(&records);
    }

    fn play_round(&mut self, mut round: Round) -> Option<RoundResult> {
        self.presenter.display_deal(round.number(), round.deal());
        let started = Instant::now();
        round.start();

        loop {
            match round.tick(started.elapsed()) {
                Tick::Running { remaining_secs } => self.presenter.display_timer(remaining_secs),
                Tick::Finished(result) => return Some(result),
                Tick::Idle => return None,
            }

            if let Some(input) = self.presenter.poll_submission(self.config.tick_interval) {
                self.audio.play_cue(Cue::Click);
                if let Some(result) = round.submit(&input, started.elapsed()) {
                    return Some(result);
                }
            }
        }
    }

    fn finish(&mut self, session: &Session) -> GameSummary {
        let record = session.to_record();
        self.audio.play_cue(Cue::Click);
        self.presenter
            .display_final_score(&record.name, record.score);

        let mut board = Leaderboard::from_records(self.store.load());
        let rank = board.insert(record.clone());

        let saved = match self.store.save(board.records()) {
            Ok(()) => true,
            Err(e) => {
                warn!("Leaderboard save failed: {}", e);
                self.presenter
                    .display_warning(&format!("Could not save the leaderboard: {}", e));
                false
            }
        };

        self.presenter.display_leaderboard(board.records());

        GameSummary {
            record,
            results: session.results().to_vec(),
            rank,
            saved,
        }
    }
}
