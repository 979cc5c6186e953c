use crate::equation::{ConfigError, DEFAULT_TOLERANCE, config::validate_tolerance};

/// Configuration for the regula falsi solver.
///
/// Regula falsi runs until successive iterates agree, so the only setting is
/// the tolerance. To bound a run, attach an observer that returns
/// [`Action::StopEarly`](crate::Action::StopEarly).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or non-finite.
    pub fn new(tolerance: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            tolerance: validate_tolerance(tolerance)?,
        })
    }

    /// Returns the deviation tolerance between successive iterates.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}
