/// Event emitted by the single-equation solvers for each recorded iterate.
///
/// Seeds and the final confirming record are not reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter at the time the iterate was recorded.
    pub iter: usize,

    /// The iterate.
    pub x: f64,

    /// `f(x)` at the iterate.
    pub residual: f64,
}
