use crate::{Action, Event};

/// Watches an enumeration one combination at a time.
///
/// Returning `None` lets the walk continue; `Some(Action::StopEarly)` ends it
/// after the combination in `event`.
///
/// Any `FnMut(&Event) -> Option<Action>` closure is an observer, and `()`
/// observes nothing and never stops the walk.
pub trait Observer {
    fn observe(&mut self, event: &Event) -> Option<Action>;
}

impl<F> Observer for F
where
    F: FnMut(&Event) -> Option<Action>,
{
    fn observe(&mut self, event: &Event) -> Option<Action> {
        self(event)
    }
}

impl Observer for () {
    fn observe(&mut self, _event: &Event) -> Option<Action> {
        None
    }
}
