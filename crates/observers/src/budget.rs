use nlroots_core::Observer;

use crate::traits::CanStopEarly;

/// Stops a solver once it has reported a fixed number of iterates.
///
/// The capped solvers already end at their configured `max_iters`; this
/// observer adds the same kind of bound to solvers that have none, such as
/// regula falsi. Unlike a cap, hitting the budget ends the run with
/// `Status::StoppedByObserver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationBudget {
    limit: usize,
    seen: usize,
}

impl IterationBudget {
    /// Creates a budget that stops the solver at the `limit`-th iterate.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self { limit, seen: 0 }
    }

    /// Returns how many iterates have been observed so far.
    #[must_use]
    pub fn seen(&self) -> usize {
        self.seen
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for IterationBudget {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.seen += 1;
        (self.seen >= self.limit).then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use nlroots_solvers::{Action, Status, equation::regula_falsi};

    #[test]
    fn stops_at_the_limit() {
        let mut budget = IterationBudget::new(2);
        let first: Option<Action> = budget.observe(&());
        let second: Option<Action> = budget.observe(&());

        assert_eq!(first, None);
        assert_eq!(second, Some(Action::StopEarly));
        assert_eq!(budget.seen(), 2);
    }

    #[test]
    fn bounds_regula_falsi() {
        // Converges, but only after hundreds of iterations.
        let f = |x: f64| x.powi(11) - 1.0;
        let config = regula_falsi::Config::new(1e-9).expect("valid config");

        let solution = regula_falsi::solve(&f, [0.0, 1.5], &config, IterationBudget::new(25))
            .expect("valid bracket");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 25);
        assert_eq!(solution.trajectory.len(), 27);
    }
}
