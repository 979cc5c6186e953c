//! Classical root-finding solvers.
//!
//! - [`equation`] — one nonlinear equation `f(x) = 0`: Newton's method, the
//!   secant method, and regula falsi
//! - [`system`] — two nonlinear equations `F(x_1, x_2) = 0`: fixed-point
//!   iteration and Newton's method
//!
//! Every solver returns a [`Solution`] that owns the full [`Trajectory`] of
//! the run. Running out of iterations is not an error: the solution comes
//! back with [`Status::MaxIters`] and no root. Errors are reserved for invalid
//! input and for arithmetic breakdowns such as a zero derivative.
//!
//! [`Trajectory`]: nlroots_core::Trajectory

mod action;
mod solution;

pub mod equation;
pub mod system;

pub use action::Action;
pub use solution::{Solution, Status};
