//! Solvers for a system of two nonlinear equations `F(x_1, x_2) = 0`.
//!
//! # Solvers
//!
//! - [`fixed_point`] — repeated substitution `x <- G(x)` through a
//!   caller-supplied reformulation `G`; converges linearly when `G` is a
//!   contraction near the root
//! - [`newton`] — solves `J(x) delta = -F(x)` each step using the
//!   hand-supplied Jacobian; converges quadratically near a simple root
//!
//! Both stop when every component of two successive iterates differs by at
//! most the configured tolerance, [`DEFAULT_TOLERANCE`] unless overridden.
//!
//! # Trajectory
//!
//! Both solvers record `x_1`, `x_2`, `f_1`, `f_2`: the starting point, every
//! iterate that failed the deviation test, then the converged estimate.

use nlroots_core::Pair;

mod config;
mod error;
mod event;
mod linear;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;

pub mod fixed_point;
pub mod newton;

/// Default deviation tolerance for two-variable solvers.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default iteration cap for two-variable solvers.
pub const DEFAULT_MAX_ITERS: usize = 100;

/// Column labels recorded by both two-variable solvers.
pub const COLUMNS: [&str; 4] = ["x_1", "x_2", "f_1", "f_2"];

/// Builds a trajectory record from an iterate and its residuals.
fn record(x: &Pair, residuals: &Pair) -> [f64; 4] {
    [x[0], x[1], residuals[0], residuals[1]]
}
