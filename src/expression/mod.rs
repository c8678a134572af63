//! Expression module split into submodules for clarity

mod ast;
pub mod constants;
mod display;
mod errors;
mod eval;
mod parser;

pub use ast::Expression;
pub use errors::ExpressionError;
pub(crate) use eval::is_zero;
