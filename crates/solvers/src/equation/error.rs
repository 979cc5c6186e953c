use thiserror::Error;

/// Errors that can occur while solving a single equation.
///
/// Running out of iterations is not an error; see
/// [`Status::MaxIters`](crate::Status::MaxIters).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// The starting interval does not bracket a root, or `f` is NaN at an
    /// endpoint.
    #[error(
        "invalid starting interval: f(x_k) and f(x_s) do not change sign: \
         f({x_k}) = {f_k}, f({x_s}) = {f_s}"
    )]
    InvalidInterval {
        x_k: f64,
        x_s: f64,
        f_k: f64,
        f_s: f64,
    },

    /// The derivative vanished, so the Newton step is undefined.
    #[error("derivative is zero at x = {x}")]
    ZeroDerivative { x: f64 },

    /// Both points have the same function value, so the secant line has no root.
    #[error("secant slope is zero: f({x_1}) = f({x_2})")]
    ZeroSecantSlope { x_1: f64, x_2: f64 },

    /// Regula falsi produced an infinite or NaN iterate from the bracket.
    #[error("non-finite iterate from bracket x_k = {x_k}, x_s = {x_s}")]
    NonFiniteIterate { x_k: f64, x_s: f64 },
}
