//! Top-ten score list and its JSON file store

mod board;
pub mod constants;
mod errors;
mod store;

pub use board::{Leaderboard, ScoreRecord};
pub use errors::LeaderboardError;
pub use store::{JsonFileStore, LeaderboardStore};

#[cfg(test)]
mod tests;
