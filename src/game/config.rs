use std::time::Duration;

use crate::game::constants::{DEFAULT_TIME_LIMIT_SECS, TICK_INTERVAL_MILLIS};

/// Pacing for a game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub time_limit: Duration,
    pub tick_interval: Duration,
}

impl GameConfig {
    pub fn with_time_limit(time_limit: Duration) -> Self {
        Self {
            time_limit,
            ..Self::default()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(DEFAULT_TIME_LIMIT_SECS),
            tick_interval: Duration::from_millis(TICK_INTERVAL_MILLIS),
        }
    }
}
