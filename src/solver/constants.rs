pub const TARGET: f64 = 24.0;
pub const EPSILON: f64 = 1e-6;
