pub const LEADERBOARD_CAPACITY: usize = 10;
pub const LEADERBOARD_FILE: &str = "rank.json";
