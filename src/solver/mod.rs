pub mod constants;
mod core;
mod operator;
mod permutations;
mod shape;
mod survey;

pub use self::core::Solver;
pub use operator::Operator;
pub use permutations::permutations;
pub use shape::Shape;
pub use survey::SurveyReport;
