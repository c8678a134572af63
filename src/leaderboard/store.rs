use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::{debug, info, warn};

use crate::leaderboard::board::{Leaderboard, ScoreRecord};
use crate::leaderboard::constants::LEADERBOARD_FILE;
use crate::leaderboard::errors::LeaderboardError;

/// Persistence for the ranked score list
pub trait LeaderboardStore {
    /// Never fails: a missing or unreadable store is an empty list
    fn load(&self) -> Vec<ScoreRecord>;

    /// # Errors
    ///
    /// Returns an error if the records cannot be written out.
    fn save(&self, records: &[ScoreRecord]) -> Result<(), LeaderboardError>;
}

/// Leaderboard kept as a pretty-printed JSON array on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Per-user data directory, or the working directory when no home
    /// directory can be determined
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("", "", "game24")
            .map(|dirs| dirs.data_dir().join(LEADERBOARD_FILE))
            .unwrap_or_else(|| PathBuf::from(LEADERBOARD_FILE))
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

impl LeaderboardStore for JsonFileStore {
    fn load(&self) -> Vec<ScoreRecord> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No leaderboard at {}", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                warn!("Cannot read leaderboard {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<ScoreRecord>>(&contents) {
            Ok(records) => {
                debug!("Loaded {} leaderboard records", records.len());
                Leaderboard::from_records(records).into_records()
            }
            Err(e) => {
                warn!(
                    "Ignoring corrupt leaderboard {}: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    fn save(&self, records: &[ScoreRecord]) -> Result<(), LeaderboardError> {
        let board = Leaderboard::from_records(records.to_vec());

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| LeaderboardError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(board.records())?;
        fs::write(&self.path, json).map_err(|source| LeaderboardError::Write {
            path: self.path.clone(),
            source,
        })?;

        info!(
            "Saved {} leaderboard records to {}",
            board.len(),
            self.path.display()
        );
        Ok(())
    }
}
