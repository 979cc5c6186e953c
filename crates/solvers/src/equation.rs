//! Solvers for a single nonlinear equation `f(x) = 0`.
//!
//! # Solvers
//!
//! - [`newton`] — iterates `g(x) = x - f(x) / f'(x)` from one starting point
//!   using a hand-supplied derivative
//! - [`secant`] — replaces the derivative with the slope through the two most
//!   recent iterates; needs two starting points but no bracket
//! - [`regula_falsi`] — the secant update restricted to a sign-changing
//!   bracket; has no iteration cap
//!
//! All three stop when two successive iterates differ by at most the
//! configured tolerance, [`DEFAULT_TOLERANCE`] unless overridden.

mod config;
mod error;
mod event;
mod two_point;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;

pub mod newton;
pub mod regula_falsi;
pub mod secant;

/// Default deviation tolerance for single-equation solvers.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default iteration cap for the capped single-equation solvers.
pub const DEFAULT_MAX_ITERS: usize = 100;
