//! Secant method for a single equation.
//!
//! # Algorithm
//!
//! Starting from two points `x_1` and `x_2`, each step replaces the
//! derivative of Newton's method with the slope of the secant line:
//!
//! ```text
//! next = x_2 - (x_2 - x_1) / (f(x_2) - f(x_1)) * f(x_2)
//! ```
//!
//! then shifts the window `(x_1, x_2) <- (x_2, next)`. The starting points do
//! not need to bracket a root.
//!
//! # Trajectory
//!
//! Columns are `x`, `f_x`. Both starting points are recorded, then every
//! iterate that failed the deviation test, then the converged estimate.
//!
//! # Iteration count
//!
//! The counter starts at 2, so the two starting points count as the first
//! two iterations against the cap.

use nlroots_core::{Deviation, Equation, Observer, Trajectory};

use crate::{Action, Solution};

use super::{Config, Error, Event, two_point::secant_point};

/// Column labels recorded by the secant method.
pub const COLUMNS: [&str; 2] = ["x", "f_x"];

/// Finds a root of `f` with the secant method, starting from `[x_1, x_2]`.
///
/// The observer receives an [`Event`] for every iterate recorded inside the
/// loop and may return [`Action::StopEarly`].
///
/// # Errors
///
/// Returns [`Error::ZeroSecantSlope`] if two consecutive points have equal
/// function values.
pub fn solve<F, Obs>(
    f: &F,
    points: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<f64, 2>, Error>
where
    F: Equation,
    Obs: Observer<Event, Action>,
{
    let [mut x_1, mut x_2] = points;
    tracing::debug!(x_1, x_2, "starting secant method");

    let mut trajectory = Trajectory::new(COLUMNS);
    trajectory.push([x_1, f.value(x_1)]);
    trajectory.push([x_2, f.value(x_2)]);

    let mut iter = 2;
    let mut next_x = secant_point(f, x_1, x_2)?;

    while !next_x.within(&x_2, config.tolerance()) {
        let residual = f.value(next_x);
        trajectory.push([next_x, residual]);
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
        x_1 = x_2;
        x_2 = next_x;
        next_x = secant_point(f, x_1, x_2)?;
    }

    trajectory.push([next_x, f.value(next_x)]);

    Ok(Solution::converged(next_x, iter, trajectory))
}

/// Finds a root of `f` with the secant method without observation.
///
/// # Errors
///
/// Returns [`Error::ZeroSecantSlope`] if two consecutive points have equal
/// function values.
pub fn solve_unobserved<F: Equation>(
    f: &F,
    points: [f64; 2],
    config: &Config,
) -> Result<Solution<f64, 2>, Error> {
    solve(f, points, config, ())
}
