// Parenthesis nesting accepted by the parser before it gives up
pub const MAX_NESTING_DEPTH: usize = 64;
