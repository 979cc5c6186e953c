//! Shared textbook problems for the integration tests.

use nlroots_core::{Matrix, Pair};

/// The real root of [`f`].
pub const CUBIC_ROOT: f64 = 1.365_230_013_414_096_8;

/// `f(x) = x³ + 4x² − 10`, with a single real root near 1.365.
pub fn f(x: f64) -> f64 {
    x.powi(3) + 4.0 * x.powi(2) - 10.0
}

/// Closed-form derivative of [`f`].
pub fn f_derivative(x: f64) -> f64 {
    3.0 * x.powi(2) + 8.0 * x
}

/// `F(x_1, x_2) = [x_1² − 2x_1 − x_2 + 0.5, x_1² + 4x_2² − 4]`.
pub fn residuals(x: &Pair) -> Pair {
    [
        x[0].powi(2) - 2.0 * x[0] - x[1] + 0.5,
        x[0].powi(2) + 4.0 * x[1].powi(2) - 4.0,
    ]
}

/// Fixed-point form `G` of [`residuals`]: `x = G(x)` exactly when `F(x) = 0`.
pub fn substitution(x: &Pair) -> Pair {
    [
        (x[0].powi(2) - x[1] + 0.5) / 2.0,
        (-x[0].powi(2) - 4.0 * x[1].powi(2) + 8.0 * x[1] + 4.0) / 8.0,
    ]
}

/// Jacobian of [`residuals`].
pub fn jacobian(x: &Pair) -> Matrix {
    [[2.0 * x[0] - 2.0, -1.0], [2.0 * x[0], 8.0 * x[1]]]
}
