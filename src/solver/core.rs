use log::{debug, info};

use crate::deal::Deal;
use crate::expression::Expression;
use crate::solver::constants::{EPSILON, TARGET};
use crate::solver::operator::Operator;
use crate::solver::permutations::permutations;
use crate::solver::shape::Shape;

/// Exhaustive searcher over every ordering, operator triple and tree shape
/// of a deal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solver {
    target: f64,
    tolerance: f64,
}

impl Solver {
    /// Solver for the standard game: target 24, tolerance 1e-6
    pub fn new() -> Self {
        Self {
            target: TARGET,
            tolerance: EPSILON,
        }
    }

    pub fn with_target(target: f64) -> Self {
        Self {
            target,
            ..Self::new()
        }
    }

    pub fn with_tolerance(self, tolerance: f64) -> Self {
        Self { tolerance, ..self }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Whether `value` counts as hitting the target
    #[inline]
    pub fn matches(&self, value: f64) -> bool {
        (value - self.target).abs() < self.tolerance
    }

    /// First expression over `deal` that reaches the target, in the order
    /// permutation, then operator triple, then shape.
    ///
    /// 24 permutations x 64 operator triples x 5 shapes = 7680 candidates at
    /// most. Candidates that divide by zero are skipped.
    pub fn find_solution(&self, deal: &Deal) -> Option<Expression> {
        debug!("Searching deal [{}] for {}", deal, self.target);

        for leaves in permutations(deal.as_f64()) {
            for op1 in Operator::ALL {
                for op2 in Operator::ALL {
                    for op3 in Operator::ALL {
                        let ops = [op1, op2, op3];
                        for shape in Shape::ALL {
                            if let Some(value) = shape.evaluate(leaves, ops)
                                && self.matches(value)
                            {
                                let expr = shape.build(leaves, ops);
                                info!("Found match for [{}]: {}", deal, expr);
                                return Some(expr);
                            }
                        }
                    }
                }
            }
        }

        debug!("No expression over [{}] reaches {}", deal, self.target);
        None
    }

    pub fn is_reachable(&self, deal: &Deal) -> bool {
        self.find_solution(deal).is_some()
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}
