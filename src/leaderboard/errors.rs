use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while persisting the leaderboard
#[derive(Error, Debug)]
pub enum LeaderboardError {
    #[error("Cannot create leaderboard directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot write leaderboard {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot serialize leaderboard: {0}")]
    Serialize(#[from] serde_json::Error),
}
