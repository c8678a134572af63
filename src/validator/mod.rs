//! Legality checks and evaluation for player-submitted expressions

mod core;
mod errors;

pub use self::core::{check_characters, check_usage, is_allowed_char, number_tokens, validate};
pub use errors::{UsageMismatch, ValidationError};

#[cfg(test)]
mod tests;
