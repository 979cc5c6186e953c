//! Reusable observers for the nlroots solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across every solver in [`nlroots_solvers`].
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasIteration`], [`HasResidual`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`IterationBudget`] — stops a solver after a fixed number of iterates,
//!   useful for regula falsi, which has no cap of its own
//! - [`TraceObserver`] — logs every iterate through `tracing`
//!
//! [`Observer`]: nlroots_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod budget;
mod trace;

pub use budget::IterationBudget;
pub use trace::TraceObserver;
