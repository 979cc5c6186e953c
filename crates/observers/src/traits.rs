//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasIteration`] — events that carry the solver's iteration counter
//! - [`HasResidual`] — events that carry a residual magnitude
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use nlroots_core::Observer;
//! use nlroots_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use nlroots_solvers::{Action, equation, system};

/// An event that carries the solver's iteration counter.
pub trait HasIteration {
    /// Returns the iteration counter at the time of the event.
    fn iteration(&self) -> usize;
}

/// An event that carries a residual.
pub trait HasResidual {
    /// Returns the residual magnitude for this event.
    ///
    /// For systems this is the largest absolute component.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- equation::Event ---

impl HasIteration for equation::Event {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl HasResidual for equation::Event {
    fn residual(&self) -> f64 {
        self.residual.abs()
    }
}

// --- system::Event ---

impl HasIteration for system::Event {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl HasResidual for system::Event {
    fn residual(&self) -> f64 {
        self.residuals[0].abs().max(self.residuals[1].abs())
    }
}

// --- CanStopEarly ---

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
