use nlroots_core::Trajectory;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Successive iterates agreed within the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a solver run.
///
/// `X` is the estimate type (`f64` or a pair) and `C` the number of columns
/// recorded per iterate.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<X, const C: usize> {
    /// Final solver status.
    pub status: Status,

    /// Most recent iterate computed by the solver.
    ///
    /// This is the root when `status` is [`Status::Converged`], and only the
    /// last unconfirmed estimate otherwise.
    pub last: X,

    /// Iteration count when the solver finished.
    pub iters: usize,

    /// Every recorded iterate, seeds included.
    pub trajectory: Trajectory<C>,
}

impl<X: Copy, const C: usize> Solution<X, C> {
    /// Returns the root if the solver converged.
    ///
    /// `None` means the solver could not determine a root, which is
    /// distinguishable from a root at zero.
    #[must_use]
    pub fn root(&self) -> Option<X> {
        self.is_converged().then_some(self.last)
    }

    /// Returns true if the solver converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    pub(crate) fn converged(last: X, iters: usize, trajectory: Trajectory<C>) -> Self {
        tracing::debug!(iters, records = trajectory.len(), "converged");
        Self {
            status: Status::Converged,
            last,
            iters,
            trajectory,
        }
    }

    pub(crate) fn max_iters(last: X, max_iters: usize, trajectory: Trajectory<C>) -> Self {
        tracing::warn!(
            max_iters,
            "calculation was stopped: the max number of iterations was reached"
        );
        Self {
            status: Status::MaxIters,
            last,
            iters: max_iters,
            trajectory,
        }
    }

    pub(crate) fn stopped_by_observer(last: X, iters: usize, trajectory: Trajectory<C>) -> Self {
        tracing::debug!(iters, "stopped by observer");
        Self {
            status: Status::StoppedByObserver,
            last,
            iters,
            trajectory,
        }
    }
}
