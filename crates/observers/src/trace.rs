use nlroots_core::Observer;

use crate::traits::{HasIteration, HasResidual};

/// Logs every reported iterate at debug level and never intervenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceObserver {
    label: &'static str,
}

impl TraceObserver {
    /// Creates an observer whose log lines carry `label` as the solver name.
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self { label }
    }
}

impl<E, A> Observer<E, A> for TraceObserver
where
    E: HasIteration + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        tracing::debug!(
            solver = self.label,
            iter = event.iteration(),
            residual = event.residual(),
            "iterate"
        );
        None
    }
}
