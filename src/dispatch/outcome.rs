//! Transition signals and dispatch results.

/// What a handler tells the dispatcher once it returns.
///
/// This is the transition signal, returned instead of thrown: a handler
/// that forwards control simply returns, so nothing after the forward point
/// runs, and the remaining handlers in the stack are skipped.
#[must_use = "a Flow must be returned from the handler to take effect"]
#[derive(Clone, Debug, PartialEq)]
pub enum Flow<E, A> {
    /// No transition; the next handler in the stack runs.
    Continue,

    /// Dynamic invocation: dispatch `E` with the given arguments, then
    /// unwind to the enclosing boundary.
    Forward(E, A),

    /// Raw transition signal naming `E` without dispatching it.
    Signal(E),
}

impl<E, A> Flow<E, A> {
    /// The event this flow transitions to, if any.
    pub fn target(&self) -> Option<&E> {
        match self {
            Flow::Continue => None,
            Flow::Forward(target, _) | Flow::Signal(target) => Some(target),
        }
    }
}

/// Payload of a transition signal that reached a dispatch boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct Signal<E, R> {
    /// The event control was forwarded to
    pub target: E,
    /// Result the forwarded chain finished with
    pub value: Option<R>,
}

/// Result of a dispatch or guarded transition.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<E, R> {
    /// Handlers ran to completion; carries the perform hook's value, if any.
    Completed(Option<R>),

    /// A handler transitioned out of the dispatched event.
    Transitioned(Signal<E, R>),
}

impl<E, R> Outcome<E, R> {
    pub fn is_transition(&self) -> bool {
        matches!(self, Outcome::Transitioned(_))
    }

    /// The event this dispatch transitioned to, if it did.
    pub fn target(&self) -> Option<&E> {
        match self {
            Outcome::Completed(_) => None,
            Outcome::Transitioned(signal) => Some(&signal.target),
        }
    }

    pub fn value(&self) -> Option<&R> {
        match self {
            Outcome::Completed(value) => value.as_ref(),
            Outcome::Transitioned(signal) => signal.value.as_ref(),
        }
    }

    /// Consume the outcome, keeping only the result value.
    pub fn into_value(self) -> Option<R> {
        match self {
            Outcome::Completed(value) => value,
            Outcome::Transitioned(signal) => signal.value,
        }
    }
}
