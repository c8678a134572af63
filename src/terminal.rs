use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, unbounded};
use log::debug;

use game24::Deal;
use game24::game::{AudioCue, Cue, Presenter, RoundOutcome, RoundResult};
use game24::leaderboard::ScoreRecord;

const BELL: &str = "\x07";

/// Line-based terminal front-end. Stdin is read on a background thread so
/// the game loop can wait for input with a timeout.
pub struct TerminalPresenter {
    lines: Receiver<String>,
    time_limit_secs: u64,
}

impl TerminalPresenter {
    pub fn spawn(time_limit_secs: u64) -> Self {
        let (tx, rx) = unbounded();
        thread::spawn(move || {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        debug!("Stopped reading stdin: {}", e);
                        break;
                    }
                }
            }
        });

        Self {
            lines: rx,
            time_limit_secs,
        }
    }

    /// Ask a question and block for the answer. `None` once stdin closes.
    pub fn ask(&mut self, question: &str) -> Option<String> {
        print!("{}", question);
        let _ = io::stdout().flush();
        self.lines.recv().ok().map(|line| line.trim().to_string())
    }

    /// Keep asking until a non-empty name arrives
    pub fn ask_name(&mut self) -> Option<String> {
        loop {
            let name = self.ask("Player name: ")?;
            if !name.is_empty() {
                return Some(name);
            }
            println!("Please enter a player name.");
        }
    }

    fn announce_time(&self, seconds_remaining: u64) -> bool {
        seconds_remaining == self.time_limit_secs
            || seconds_remaining <= 3
            || seconds_remaining % 5 == 0
    }
}

impl Presenter for TerminalPresenter {
    fn display_deal(&mut self, round: usize, deal: &Deal) {
        // drop anything typed between rounds
        while self.lines.try_recv().is_ok() {}

        println!();
        println!("=== Round {} ===", round);
        let cards: Vec<String> = deal.values().iter().map(|v| format!("[{:>2}]", v)).collect();
        println!("    {}", cards.join(" "));
        println!(
            "Type an expression that makes 24, or NO ({}s limit).",
            self.time_limit_secs
        );
    }

    fn display_timer(&mut self, seconds_remaining: u64) {
        if self.announce_time(seconds_remaining) {
            println!("  {}s left", seconds_remaining);
        }
    }

    fn poll_submission(&mut self, wait: Duration) -> Option<String> {
        match self.lines.recv_timeout(wait) {
            Ok(line) => Some(line),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => {
                thread::sleep(wait);
                None
            }
        }
    }

    fn display_round_result(&mut self, result: &RoundResult, total: u32) {
        match &result.outcome {
            RoundOutcome::Solved {
                expression,
                elapsed,
            } => println!(
                "Correct! {} in {:.1}s: +{} points.",
                expression,
                elapsed.as_secs_f64(),
                result.points
            ),
            RoundOutcome::Incorrect { expression, value } => {
                println!("{} = {}, not 24. 0 points.", expression, value)
            }
            RoundOutcome::DeclaredUnsolvable { correct: true, .. } => {
                println!("Right, there is no 24 here! +{} points.", result.points)
            }
            RoundOutcome::DeclaredUnsolvable {
                correct: false,
                solution,
            } => match solution {
                Some(solution) => println!("Wrong, 24 = {}. 0 points.", solution),
                None => println!("Wrong. 0 points."),
            },
            RoundOutcome::TimedOut => println!("Time's up! 0 points."),
            RoundOutcome::InvalidSubmission(e) => println!("Invalid answer: {}. 0 points.", e),
        }
        println!("Total: {}", total);
    }

    fn display_final_score(&mut self, name: &str, total: u32) {
        println!();
        println!("Game over. {} scored {}.", name, total);
    }

    fn display_leaderboard(&mut self, records: &[ScoreRecord]) {
        println!();
        print_leaderboard(records);
    }

    fn display_warning(&mut self, message: &str) {
        eprintln!("Warning: {}", message);
    }
}

pub fn print_leaderboard(records: &[ScoreRecord]) {
    if records.is_empty() {
        println!("No records yet.");
        return;
    }
    println!("Leaderboard");
    for (i, record) in records.iter().enumerate() {
        println!("{:>3}. {:<20} {:>4}", i + 1, record.name, record.score);
    }
}

/// Rings the terminal bell for right and wrong answers
#[derive(Debug, Clone, Copy)]
pub struct TerminalBell {
    enabled: bool,
}

impl TerminalBell {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl AudioCue for TerminalBell {
    fn play_cue(&self, cue: Cue) {
        if !self.enabled || cue == Cue::Click {
            return;
        }
        let mut out = io::stdout();
        let _ = out.write_all(BELL.as_bytes()).and_then(|()| out.flush());
    }
}
