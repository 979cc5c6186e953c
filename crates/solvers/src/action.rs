/// Control actions an observer can return to any nlroots solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver after the current iterate.
    ///
    /// The iterate that triggered the action is already in the trajectory.
    StopEarly,
}
