use nlroots_core::Pair;

/// Event emitted by the two-variable solvers for each recorded iterate.
///
/// The starting point and the final confirming record are not reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter at the time the iterate was recorded.
    pub iter: usize,

    /// The iterate.
    pub x: Pair,

    /// `F(x)` at the iterate.
    pub residuals: Pair,
}
