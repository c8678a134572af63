use std::time::Duration;

use log::{debug, info};

use crate::deal::Deal;
use crate::game::constants::NO_ANSWER;
use crate::game::scoring::{declaration_points, speed_points};
use crate::solver::Solver;
use crate::validator::{ValidationError, validate};

/// How a round ended
#[derive(Debug, Clone, PartialEq)]
pub enum RoundOutcome {
    Solved {
        expression: String,
        elapsed: Duration,
    },
    /// A legal expression that does not make 24
    Incorrect {
        expression: String,
        value: f64,
    },
    /// The player answered `NO`; `solution` is set when one existed
    DeclaredUnsolvable {
        correct: bool,
        solution: Option<String>,
    },
    TimedOut,
    InvalidSubmission(ValidationError),
}

impl RoundOutcome {
    pub fn points(&self) -> u32 {
        match self {
            RoundOutcome::Solved { elapsed, .. } => speed_points(*elapsed),
            RoundOutcome::DeclaredUnsolvable { correct, .. } => declaration_points(*correct),
            RoundOutcome::Incorrect { .. }
            | RoundOutcome::TimedOut
            | RoundOutcome::InvalidSubmission(_) => 0,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(
            self,
            RoundOutcome::Solved { .. } | RoundOutcome::DeclaredUnsolvable { correct: true, .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoundResult {
    pub round: usize,
    pub deal: Deal,
    pub outcome: RoundOutcome,
    pub points: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Dealt,
    AwaitingSubmission,
    Closed,
}

/// What a timer tick observed
#[derive(Debug, Clone, PartialEq)]
pub enum Tick {
    Running { remaining_secs: u64 },
    /// The limit passed on this tick and the round closed as timed out
    Finished(RoundResult),
    /// Not started yet, or already closed
    Idle,
}

/// One deal and the player's single chance to answer it.
///
/// A round produces its [`RoundResult`] exactly once: after it closes, every
/// further submission or tick is ignored.
#[derive(Debug, Clone)]
pub struct Round {
    number: usize,
    deal: Deal,
    time_limit: Duration,
    solver: Solver,
    state: RoundState,
}

impl Round {
    pub fn new(number: usize, deal: Deal, time_limit: Duration) -> Self {
        Self {
            number,
            deal,
            time_limit,
            solver: Solver::new(),
            state: RoundState::Dealt,
        }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn deal(&self) -> &Deal {
        &self.deal
    }

    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.state == RoundState::Closed
    }

    /// Open the round for answers
    pub fn start(&mut self) {
        if self.state == RoundState::Dealt {
            self.state = RoundState::AwaitingSubmission;
        }
    }

    /// Judge an answer given `elapsed` after the round started. Answers that
    /// arrive at or past the limit count as a timeout.
    pub fn submit(&mut self, input: &str, elapsed: Duration) -> Option<RoundResult> {
        if self.state != RoundState::AwaitingSubmission {
            debug!(
                "Ignoring submission for round {} in state {:?}",
                self.number, self.state
            );
            return None;
        }

        if elapsed >= self.time_limit {
            return Some(self.close(RoundOutcome::TimedOut));
        }

        let input = input.trim();
        let outcome = if input.eq_ignore_ascii_case(NO_ANSWER) {
            let solution = self.solver.find_solution(&self.deal);
            RoundOutcome::DeclaredUnsolvable {
                correct: solution.is_none(),
                solution: solution.map(|expr| expr.to_string()),
            }
        } else {
            match validate(input, &self.deal) {
                Ok(value) if self.solver.matches(value) => RoundOutcome::Solved {
                    expression: input.to_string(),
                    elapsed,
                },
                Ok(value) => RoundOutcome::Incorrect {
                    expression: input.to_string(),
                    value,
                },
                Err(e) => RoundOutcome::InvalidSubmission(e),
            }
        };

        Some(self.close(outcome))
    }

    pub fn tick(&mut self, elapsed: Duration) -> Tick {
        if self.state != RoundState::AwaitingSubmission {
            return Tick::Idle;
        }

        match self.time_limit.checked_sub(elapsed) {
            Some(remaining) if !remaining.is_zero() => Tick::Running {
                remaining_secs: remaining.as_secs_f64().ceil() as u64,
            },
            _ => Tick::Finished(self.close(RoundOutcome::TimedOut)),
        }
    }

    fn close(&mut self, outcome: RoundOutcome) -> RoundResult {
        self.state = RoundState::Closed;
        let points = outcome.points();
        info!(
            "Round {} closed with {:?} for {} points",
            self.number, outcome, points
        );
        RoundResult {
            round: self.number,
            deal: self.deal,
            outcome,
            points,
        }
    }
}
