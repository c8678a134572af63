use crate::expression::Expression;
use crate::solver::operator::Operator;

/// The five full binary trees over four ordered leaves `a b c d` with
/// operator slots `op1 op2 op3`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `((a op1 b) op2 c) op3 d`
    LeftChain,
    /// `(a op1 (b op2 c)) op3 d`
    InnerLeft,
    /// `a op1 ((b op2 c) op3 d)`
    InnerRight,
    /// `a op1 (b op2 (c op3 d))`
    RightChain,
    /// `(a op1 b) op2 (c op3 d)`
    Balanced,
}

impl Shape {
    pub const ALL: [Shape; 5] = [
        Shape::LeftChain,
        Shape::InnerLeft,
        Shape::InnerRight,
        Shape::RightChain,
        Shape::Balanced,
    ];

    /// Returns `None` if any step divides by zero
    #[inline]
    pub fn evaluate(self, leaves: [f64; 4], ops: [Operator; 3]) -> Option<f64> {
        let [a, b, c, d] = leaves;
        let [op1, op2, op3] = ops;
        match self {
            Shape::LeftChain => op3.apply(op2.apply(op1.apply(a, b)?, c)?, d),
            Shape::InnerLeft => op3.apply(op1.apply(a, op2.apply(b, c)?)?, d),
            Shape::InnerRight => op1.apply(a, op3.apply(op2.apply(b, c)?, d)?),
            Shape::RightChain => op1.apply(a, op2.apply(b, op3.apply(c, d)?)?),
            Shape::Balanced => op2.apply(op1.apply(a, b)?, op3.apply(c, d)?),
        }
    }

    pub fn build(self, leaves: [f64; 4], ops: [Operator; 3]) -> Expression {
        let [a, b, c, d] = leaves.map(Expression::Number);
        let [op1, op2, op3] = ops;
        match self {
            Shape::LeftChain => op3.combine(op2.combine(op1.combine(a, b), c), d),
            Shape::InnerLeft => op3.combine(op1.combine(a, op2.combine(b, c)), d),
            Shape::InnerRight => op1.combine(a, op3.combine(op2.combine(b, c), d)),
            Shape::RightChain => op1.combine(a, op2.combine(b, op3.combine(c, d))),
            Shape::Balanced => op2.combine(op1.combine(a, b), op3.combine(c, d)),
        }
    }
}
