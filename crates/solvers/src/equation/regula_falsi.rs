//! Regula falsi (false position) for a single equation.
//!
//! # Algorithm
//!
//! Regula falsi starts from a bracket `[x_k, x_s]` with `f(x_k)` and `f(x_s)`
//! of opposite sign and applies the secant update to it. After each update
//! the partner endpoint `x_s` is checked: if `f(next)` has the same sign as
//! `f(x_s)`, `x_s` is replaced by the current `x_k`. The advancing endpoint
//! `x_k` then moves to `next`.
//!
//! Convergence is tested between `x_k` and the new iterate.
//!
//! # No iteration cap
//!
//! Unlike the other solvers, regula falsi has no iteration limit and runs
//! until it converges. Observers can still end a run with
//! [`Action::StopEarly`]. An infinite or NaN iterate ends the run with
//! [`Error::NonFiniteIterate`], since it could never converge.
//!
//! # Trajectory
//!
//! Columns are `x`, `f_x`: both endpoints, every iterate that failed the
//! deviation test, then the converged estimate.

mod bracket;
mod config;

pub use config::Config;

use nlroots_core::{Deviation, Equation, Observer, Trajectory};

use crate::{Action, Solution};

use super::{Error, Event};

use bracket::Bracket;

/// Column labels recorded by regula falsi.
pub const COLUMNS: [&str; 2] = ["x", "f_x"];

/// Finds a root of `f` inside `[x_k, x_s]` with regula falsi.
///
/// The observer receives an [`Event`] for every iterate recorded inside the
/// loop and may return [`Action::StopEarly`].
///
/// # Errors
///
/// Returns [`Error::InvalidInterval`] if `f(x_k) * f(x_s) <= 0` does not
/// hold, before anything is recorded. Returns [`Error::ZeroSecantSlope`] if
/// the update becomes undefined and [`Error::NonFiniteIterate`] if it
/// overflows or turns NaN.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<f64, 2>, Error>
where
    F: Equation,
    Obs: Observer<Event, Action>,
{
    let [x_k, x_s] = bracket;
    let mut bracket = Bracket::new(f, x_k, x_s)?;
    tracing::debug!(x_k, x_s, "starting regula falsi");

    let mut trajectory = Trajectory::new(COLUMNS);
    trajectory.push([x_k, f.value(x_k)]);
    trajectory.push([x_s, f.value(x_s)]);

    let mut iter = 1;
    let mut next_x = bracket.next(f)?;

    while !next_x.within(&bracket.x_k(), config.tolerance()) {
        let residual = f.value(next_x);
        trajectory.push([next_x, residual]);
        tracing::trace!(iter, x = next_x, residual, x_s = bracket.x_s(), "iterate");

        let event = Event {
            iter,
            x: next_x,
            residual,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::stopped_by_observer(next_x, iter, trajectory));
        }

        iter += 1;
        bracket.advance(next_x);
        next_x = bracket.next(f)?;
    }

    trajectory.push([next_x, f.value(next_x)]);

    Ok(Solution::converged(next_x, iter, trajectory))
}

/// Finds a root of `f` inside `[x_k, x_s]` without observation.
///
/// # Errors
///
/// Returns [`Error::InvalidInterval`] for an invalid bracket, or
/// [`Error::ZeroSecantSlope`] or [`Error::NonFiniteIterate`] if the update
/// breaks down.
pub fn solve_unobserved<F: Equation>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<f64, 2>, Error> {
    solve(f, bracket, config, ())
}
