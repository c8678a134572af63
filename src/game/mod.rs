//! Round sequencing, scoring and the game loop

mod config;
pub mod constants;
mod controller;
mod ports;
mod round;
mod scoring;
mod session;

pub use config::GameConfig;
pub use controller::{GameController, GameSummary};
pub use ports::{AudioCue, Cue, Presenter, Silent};
pub use round::{Round, RoundOutcome, RoundResult, RoundState, Tick};
pub use scoring::{declaration_points, speed_points};
pub use session::Session;
