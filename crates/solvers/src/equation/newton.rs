//! Newton's method for a single equation.
//!
//! # Algorithm
//!
//! Newton's method rewrites `f(x) = 0` as the fixed-point problem
//! `x = g(x)` with
//!
//! ```text
//! g(x) = x - f(x) / f'(x)
//! ```
//!
//! and applies `g` until two successive iterates agree within the tolerance.
//! The derivative is supplied by the caller in closed form.
//!
//! # Trajectory
//!
//! Columns are `x`, `f_x`, `g_x`. The starting point is recorded first, then
//! every iterate that failed the deviation test. On convergence the last of
//! those iterates is recorded once more, so a run that took `k` updates holds
//! `k + 1` records. The returned root is the final `g(x)`.
//!
//! # Limitations
//!
//! A zero derivative at any iterate makes the step undefined and is reported
//! as [`Error::ZeroDerivative`]; there is no damping or fallback.

use nlroots_core::{Deviation, Equation, Observer, Trajectory};

use crate::{Action, Solution};

use super::{Config, Error, Event};

/// Column labels recorded by Newton's method.
pub const COLUMNS: [&str; 3] = ["x", "f_x", "g_x"];

/// Finds a root of `f` with Newton's method, starting from `x`.
///
/// The observer receives an [`Event`] for every iterate recorded inside the
/// loop and may return [`Action::StopEarly`].
///
/// # Errors
///
/// Returns [`Error::ZeroDerivative`] if `df` is zero at an iterate.
pub fn solve<F, D, Obs>(
    f: &F,
    df: &D,
    x: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<f64, 3>, Error>
where
    F: Equation,
    D: Equation,
    Obs: Observer<Event, Action>,
{
    tracing::debug!(x, "starting newton's method");

    let mut trajectory = Trajectory::new(COLUMNS);
    let mut x = x;

    let mut next_x = step(f, df, x)?;
    trajectory.push([x, f.value(x), next_x]);

    let mut iter = 1;

    while !next_x.within(&x, config.tolerance()) {
        let residual = f.value(next_x);
        let after = step(f, df, next_x)?;
        trajectory.push([next_x, residual, after]);
        tracing::trace!(iter, x = next_x, residual, "iterate");

        let event = Event {
            iter,
            x: next_x,
            residual,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::stopped_by_observer(next_x, iter, trajectory));
        }

        if iter >= config.max_iters() {
            return Ok(Solution::max_iters(next_x, config.max_iters(), trajectory));
        }

        iter += 1;
        x = next_x;
        next_x = after;
    }

    trajectory.push([x, f.value(x), next_x]);

    Ok(Solution::converged(next_x, iter, trajectory))
}

/// Finds a root of `f` with Newton's method without observation.
///
/// # Errors
///
/// Returns [`Error::ZeroDerivative`] if `df` is zero at an iterate.
pub fn solve_unobserved<F, D>(
    f: &F,
    df: &D,
    x: f64,
    config: &Config,
) -> Result<Solution<f64, 3>, Error>
where
    F: Equation,
    D: Equation,
{
    solve(f, df, x, config, ())
}

/// Evaluates the Newton map `g(x) = x - f(x) / f'(x)`.
///
/// # Errors
///
/// Returns [`Error::ZeroDerivative`] if `f'(x) == 0`.
pub fn step(f: &impl Equation, df: &impl Equation, x: f64) -> Result<f64, Error> {
    let slope = df.value(x);

    #[allow(clippy::float_cmp)]
    if slope == 0.0 {
        return Err(Error::ZeroDerivative { x });
    }

    Ok(x - f.value(x) / slope)
}
