//! Newton's method for two equations.
//!
//! # Algorithm
//!
//! Each step linearizes `F` at the current iterate with the caller-supplied
//! Jacobian `J` and solves
//!
//! ```text
//! J(x) · delta = -F(x)
//! next = x + delta
//! ```
//!
//! by LU decomposition. Iteration stops when every component of two
//! successive iterates agrees within the tolerance.
//!
//! # Limitations
//!
//! A singular Jacobian is reported as [`Error::SingularJacobian`]; there is
//! no regularization or line search.

use nlroots_core::{Deviation, Jacobian, Observer, Pair, System, Trajectory};

use crate::{Action, Solution};

use super::{COLUMNS, Config, Error, Event, linear, record};

/// Finds a root of `f` with Newton's method, starting from `x`.
///
/// The observer receives an [`Event`] for every iterate recorded inside the
/// loop and may return [`Action::StopEarly`].
///
/// # Errors
///
/// Returns [`Error::SingularJacobian`] if `j` cannot be solved at an iterate.
pub fn solve<F, J, Obs>(
    f: &F,
    j: &J,
    x: Pair,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<Pair, 4>, Error>
where
    F: System,
    J: Jacobian,
    Obs: Observer<Event, Action>,
{
    tracing::debug!(?x, "starting newton's method for a system");

    let mut residuals = f.value(&x);
    let mut trajectory = Trajectory::new(COLUMNS);
    trajectory.push(record(&x, &residuals));

    let mut x = x;
    let mut iter = 1;
    let mut next_x = step(j, &x, &residuals)?;

    while !next_x.within(&x, config.tolerance()) {
        residuals = f.value(&next_x);
        trajectory.push(record(&next_x, &residuals));
        tracing::trace!(iter, x = ?next_x, residuals = ?residuals, "iterate");

        let event = Event {
            iter,
            x: next_x,
            residuals,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::stopped_by_observer(next_x, iter, trajectory));
        }

        if iter >= config.max_iters() {
            return Ok(Solution::max_iters(next_x, config.max_iters(), trajectory));
        }

        iter += 1;
        x = next_x;
        next_x = step(j, &x, &residuals)?;
    }

    trajectory.push(record(&next_x, &f.value(&next_x)));

    Ok(Solution::converged(next_x, iter, trajectory))
}

/// Finds a root of `f` with Newton's method without observation.
///
/// # Errors
///
/// Returns [`Error::SingularJacobian`] if `j` cannot be solved at an iterate.
pub fn solve_unobserved<F, J>(
    f: &F,
    j: &J,
    x: Pair,
    config: &Config,
) -> Result<Solution<Pair, 4>, Error>
where
    F: System,
    J: Jacobian,
{
    solve(f, j, x, config, ())
}

/// Computes the Newton update `x + delta` with `J(x) · delta = -F(x)`.
///
/// `residuals` must be `F(x)`.
///
/// # Errors
///
/// Returns [`Error::SingularJacobian`] if `J(x)` is singular.
pub fn step(j: &impl Jacobian, x: &Pair, residuals: &Pair) -> Result<Pair, Error> {
    let rhs = [-residuals[0], -residuals[1]];
    let delta = linear::solve(&j.value(x), &rhs).ok_or(Error::SingularJacobian { x: *x })?;
    Ok([x[0] + delta[0], x[1] + delta[1]])
}
