//! game24 - the 24-point arithmetic game
//!
//! Each round deals four numbers. The player either writes an expression that
//! uses every number exactly once and evaluates to 24, or answers `NO` when
//! no such expression exists. This crate provides the exhaustive
//! reachability solver, the submission validator, and the round, scoring and
//! leaderboard logic that a front-end drives.

pub mod deal;
pub mod expression;
pub mod game;
pub mod leaderboard;
pub mod solver;
pub mod validator;

// Re-export the main public API
pub use deal::{Deal, DealError};
pub use expression::{Expression, ExpressionError};
pub use game::{GameConfig, GameController, RoundOutcome, RoundResult};
pub use leaderboard::{JsonFileStore, Leaderboard, LeaderboardStore, ScoreRecord};
pub use solver::Solver;
pub use validator::{ValidationError, validate};

/// Whether some arrangement of `deal` with `+ - * /` and parentheses
/// evaluates to 24
///
/// Tries every ordering of the four numbers, every operator in each of the
/// three slots and all five ways to parenthesize, skipping any combination
/// that divides by zero.
///
/// # Examples
///
/// ```
/// use game24::is_reachable_24;
///
/// assert!(is_reachable_24([4, 1, 8, 7]));
/// assert!(!is_reachable_24([1, 1, 1, 1]));
/// ```
pub fn is_reachable_24(deal: impl Into<Deal>) -> bool {
    Solver::new().is_reachable(&deal.into())
}

/// One expression over `deal` that makes 24, if any
///
/// # Examples
///
/// ```
/// use game24::solve_24;
///
/// if let Some(expr) = solve_24([3, 3, 8, 8]) {
///     println!("{}", expr);
/// }
/// ```
pub fn solve_24(deal: impl Into<Deal>) -> Option<Expression> {
    Solver::new().find_solution(&deal.into())
}
