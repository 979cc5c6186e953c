use thiserror::Error;

use nlroots_core::Pair;

/// Errors that can occur while solving a two-variable system.
///
/// Running out of iterations is not an error; see
/// [`Status::MaxIters`](crate::Status::MaxIters).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// The Jacobian could not be solved against the residuals.
    #[error("jacobian is singular at x = {x:?}")]
    SingularJacobian { x: Pair },
}
