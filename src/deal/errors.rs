use thiserror::Error;

/// Errors that can occur when building a deal
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DealError {
    #[error("A deal needs exactly {expected} numbers, got {actual}")]
    WrongCount { expected: usize, actual: usize },
    #[error("Not a card value: '{0}'")]
    InvalidValue(String),
}
