/// A hook that sees each iterate a solver records and may end the run.
///
/// `E` is the solver family's event, emitted once per record added to the
/// [`Trajectory`](crate::Trajectory) inside the loop. Seeds and the final
/// confirming record produce no event.
///
/// Returning `Some(action)` asks the solver to act, typically to stop with
/// the estimate it has so far. Returning `None` lets it carry on.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` observes
/// nothing.
pub trait Observer<E, A> {
    /// Inspects one event and optionally requests an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive<O>(mut observer: O, events: &[usize]) -> Vec<&'static str>
    where
        O: Observer<usize, &'static str>,
    {
        events.iter().filter_map(|e| observer.observe(e)).collect()
    }

    #[test]
    fn unit_observer_never_acts() {
        assert!(drive((), &[1, 2, 3]).is_empty());
    }

    #[test]
    fn closure_observer_sees_every_event() {
        let mut seen = Vec::new();
        let actions = drive(
            |event: &usize| {
                seen.push(*event);
                (*event == 2).then_some("stop")
            },
            &[1, 2, 3],
        );

        assert_eq!(actions, vec!["stop"]);
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn struct_observer_keeps_state() {
        struct StopAfter {
            remaining: usize,
        }
        impl Observer<usize, &'static str> for StopAfter {
            fn observe(&mut self, _event: &usize) -> Option<&'static str> {
                self.remaining = self.remaining.saturating_sub(1);
                (self.remaining == 0).then_some("stop")
            }
        }

        let actions = drive(StopAfter { remaining: 2 }, &[1, 2, 3]);
        assert_eq!(actions, vec!["stop", "stop"]);
    }
}
