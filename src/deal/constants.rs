pub const DEAL_SIZE: usize = 4;
pub const MIN_CARD: u32 = 1;
pub const MAX_CARD: u32 = 10;
