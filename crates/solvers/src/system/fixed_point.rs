//! Fixed-point (iterative substitution) method for two equations.
//!
//! # Algorithm
//!
//! The caller rewrites `F(x) = 0` as `x = G(x)` and the solver applies `G`
//! until two successive iterates agree component-wise within the tolerance.
//! Convergence relies on `G` being a contraction near the root; when it is
//! not, the run ends at the iteration cap.
//!
//! `F` is only evaluated for the trajectory, never to drive the iteration.

use nlroots_core::{Deviation, Observer, Pair, System, Trajectory};

use crate::{Action, Solution};

use super::{COLUMNS, Config, Event, record};

/// Finds a fixed point of `g`, recording the residuals of `f` along the way.
///
/// The observer receives an [`Event`] for every iterate recorded inside the
/// loop and may return [`Action::StopEarly`].
///
/// There is no error case: `G` is applied as given, and failure to converge
/// is reported through the solution's status.
pub fn solve<F, G, Obs>(
    f: &F,
    g: &G,
    x: Pair,
    config: &Config,
    mut observer: Obs,
) -> Solution<Pair, 4>
where
    F: System,
    G: System,
    Obs: Observer<Event, Action>,
{
    tracing::debug!(?x, "starting fixed-point iteration");

    let mut trajectory = Trajectory::new(COLUMNS);
    trajectory.push(record(&x, &f.value(&x)));

    let mut x = x;
    let mut iter = 1;
    let mut next_x = g.value(&x);

    while !next_x.within(&x, config.tolerance()) {
        let residuals = f.value(&next_x);
        trajectory.push(record(&next_x, &residuals));
        tracing::trace!(iter, x = ?next_x, residuals = ?residuals, "iterate");

        let event = Event {
            iter,
            x: next_x,
            residuals,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Solution::stopped_by_observer(next_x, iter, trajectory);
        }

        if iter >= config.max_iters() {
            return Solution::max_iters(next_x, config.max_iters(), trajectory);
        }

        iter += 1;
        x = next_x;
        next_x = g.value(&x);
    }

    trajectory.push(record(&next_x, &f.value(&next_x)));

    Solution::converged(next_x, iter, trajectory)
}

/// Finds a fixed point of `g` without observation.
pub fn solve_unobserved<F, G>(f: &F, g: &G, x: Pair, config: &Config) -> Solution<Pair, 4>
where
    F: System,
    G: System,
{
    solve(f, g, x, config, ())
}
