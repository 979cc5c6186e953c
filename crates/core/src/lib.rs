//! Core traits and types for the nlroots solvers.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Equation`], [`System`], [`Jacobian`] — caller-supplied functions that
//!   describe the problem being solved
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`Trajectory`] — the ordered, column-labeled record of a solver's iterates
//! - [`Deviation`] — the convergence predicate between successive iterates

mod deviation;
mod functions;
mod observer;
mod trajectory;

pub use deviation::Deviation;
pub use functions::{Equation, Jacobian, Matrix, Pair, System};
pub use observer::Observer;
pub use trajectory::Trajectory;
