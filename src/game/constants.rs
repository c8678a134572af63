// Scoring and pacing rules for one game
pub const ROUNDS_PER_GAME: usize = 3;
pub const DEFAULT_TIME_LIMIT_SECS: u64 = 20;
pub const TICK_INTERVAL_MILLIS: u64 = 1000;
pub const NO_REWARD: u32 = 10;
pub const SPEED_BASE: u32 = 30;
pub const NO_ANSWER: &str = "NO";
