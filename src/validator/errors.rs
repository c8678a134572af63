use std::fmt;

use thiserror::Error;

use crate::expression::ExpressionError;

/// Why a submitted expression was turned away
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("illegal character '{ch}' at position {position}")]
    IllegalCharacter { ch: char, position: usize },
    #[error("uses a number not dealt, or reuses a number ({0})")]
    NumberUsageMismatch(UsageMismatch),
    #[error("evaluation error: {0}")]
    Evaluation(#[from] ExpressionError),
}

impl ValidationError {
    /// Short player-facing reason
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::IllegalCharacter { .. } => "illegal character",
            ValidationError::NumberUsageMismatch(_) => {
                "uses a number not dealt, or reuses a number"
            }
            ValidationError::Evaluation(_) => "evaluation error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UsageMismatch {
    /// A number token with no remaining dealt card to consume
    NotAvailable(String),
    /// Dealt cards left over after every token was consumed
    Unused(Vec<u32>),
}

impl fmt::Display for UsageMismatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UsageMismatch::NotAvailable(token) => write!(f, "{} is not available", token),
            UsageMismatch::Unused(values) => {
                let values: Vec<String> = values.iter().map(u32::to_string).collect();
                write!(f, "{} left unused", values.join(", "))
            }
        }
    }
}
