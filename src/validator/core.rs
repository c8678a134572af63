use log::{debug, warn};

use crate::deal::Deal;
use crate::expression::Expression;
use crate::validator::errors::{UsageMismatch, ValidationError};

#[inline]
pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '(' | ')') || c.is_whitespace()
}

/// # Errors
///
/// Returns the first character outside digits, `+ - * /`, parentheses and
/// whitespace.
pub fn check_characters(expr: &str) -> Result<(), ValidationError> {
    match expr.char_indices().find(|&(_, c)| !is_allowed_char(c)) {
        Some((position, ch)) => {
            warn!("Illegal character '{}' at {} in '{}'", ch, position, expr);
            Err(ValidationError::IllegalCharacter { ch, position })
        }
        None => Ok(()),
    }
}

/// Maximal runs of ASCII digits, in order of appearance
pub fn number_tokens(expr: &str) -> Vec<&str> {
    expr.split(|c: char| !c.is_ascii_digit())
        .filter(|token| !token.is_empty())
        .collect()
}

/// # Errors
///
/// Fails when a number token has no unconsumed dealt card left to match, or
/// when dealt cards remain after every token is consumed. Tokens with a
/// leading zero such as `08` never match.
pub fn check_usage(expr: &str, deal: &Deal) -> Result<(), ValidationError> {
    let mut remaining = deal.values().to_vec();

    for token in number_tokens(expr) {
        debug!("Consuming number token '{}' from {:?}", token, remaining);

        let matched = if token.len() > 1 && token.starts_with('0') {
            None
        } else {
            token
                .parse::<u32>()
                .ok()
                .and_then(|n| remaining.iter().position(|&v| v == n))
        };

        match matched {
            Some(index) => {
                remaining.swap_remove(index);
            }
            None => {
                warn!("Number '{}' is not available in deal [{}]", token, deal);
                return Err(ValidationError::NumberUsageMismatch(
                    UsageMismatch::NotAvailable(token.to_string()),
                ));
            }
        }
    }

    if remaining.is_empty() {
        Ok(())
    } else {
        remaining.sort_unstable();
        warn!("Expression '{}' leaves {:?} unused", expr, remaining);
        Err(ValidationError::NumberUsageMismatch(UsageMismatch::Unused(
            remaining,
        )))
    }
}

/// Check `expr` against `deal` and evaluate it.
///
/// Character set first, then exact usage of the dealt numbers, then
/// evaluation. The caller decides whether the value counts as 24.
///
/// # Errors
///
/// Returns the first failed check; parse failures and division by zero come
/// back as [`ValidationError::Evaluation`].
pub fn validate(expr: &str, deal: &Deal) -> Result<f64, ValidationError> {
    debug!("Validating '{}' against deal [{}]", expr, deal);

    check_characters(expr)?;
    check_usage(expr, deal)?;

    let value = Expression::parse(expr)?.evaluate()?;
    debug!("'{}' evaluates to {}", expr, value);
    Ok(value)
}
