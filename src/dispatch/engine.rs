//! Engine owning a registry and its dispatch history.

use crate::builder::BuildError;
use crate::core::{Event, EventHistory, Guard};
use crate::dispatch::context::Context;
use crate::dispatch::error::EngineError;
use crate::dispatch::outcome::{Flow, Outcome};
use crate::dispatch::registry::Registry;

/// Event-driven control-flow engine.
///
/// Owns the handler registry and the dispatch history for its lifetime.
/// Handlers and hooks are registered up front; dispatching borrows the
/// engine mutably, so registration cannot interleave with a running
/// dispatch.
///
/// `E` names events, `A` is the argument type passed to handlers and hooks,
/// `R` is the perform hooks' result type.
///
/// # Example
///
/// ```rust
/// use relayline::{Engine, EngineError};
///
/// let mut engine: Engine<String, Vec<i32>, &'static str> = Engine::new();
/// engine.on("foo".to_string(), |cx, _| cx.forward("bar".to_string(), vec![1, 2, 3]));
/// engine.declare("bar".to_string());
/// engine.set_perform_hook("bar".to_string(), |args| {
///     assert_eq!(args, &vec![1, 2, 3]);
///     "hi"
/// }).unwrap();
///
/// let result = engine.transition("foo".to_string(), vec!["bar".to_string()], Vec::new());
/// assert_eq!(result.unwrap().into_value(), Some("hi"));
///
/// let result = engine.transition("foo".to_string(), vec!["baz".to_string()], Vec::new());
/// assert!(matches!(result, Err(EngineError::IllegalTransition { .. })));
/// ```
pub struct Engine<E: Event, A = (), R = ()> {
    registry: Registry<E, A, R>,
    history: EventHistory<E>,
}

impl<E: Event, A, R> Default for Engine<E, A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event, A, R> Engine<E, A, R> {
    /// Create an engine with no events and an empty history.
    pub fn new() -> Self {
        Self::with_registry(Registry::new())
    }

    pub(crate) fn with_registry(registry: Registry<E, A, R>) -> Self {
        Self {
            registry,
            history: EventHistory::new(),
        }
    }

    /// Register a handler for `event`.
    ///
    /// Handlers for the same event run in reverse registration order.
    pub fn on<F>(&mut self, event: E, handler: F) -> &mut Self
    where
        F: Fn(&mut Context<'_, E, A, R>, &A) -> Result<Flow<E, A>, EngineError> + 'static,
    {
        self.registry.register(event, handler);
        self
    }

    /// Make `event` known with no handlers.
    pub fn declare(&mut self, event: E) -> &mut Self {
        self.registry.declare(event);
        self
    }

    /// Set the perform hook for `event`. At most one per event.
    pub fn set_perform_hook<F>(&mut self, event: E, hook: F) -> Result<&mut Self, BuildError>
    where
        F: Fn(&A) -> R + 'static,
    {
        self.registry.set_perform_hook(event, hook)?;
        Ok(self)
    }

    /// Fire `event`: run its handlers last-on first-off, then its perform
    /// hook unless a handler transitioned away.
    ///
    /// Fails with `UnknownEvent` before anything runs if `event` has no
    /// handler stack.
    ///
    /// Forward cycles are not detected. A chain that forwards back into
    /// itself (`a -> a`, or `a -> b -> a` with no exit) never returns, and
    /// each hop appends a record to the history.
    pub fn dispatch(&mut self, event: E, args: A) -> Result<Outcome<E, R>, EngineError> {
        Context::new(&self.registry, &mut self.history, None, event.clone(), 0)
            .drive(event, args)
    }

    /// Dispatch `from` while only allowing transitions to the events in
    /// `allowed`.
    ///
    /// Any forward or signal naming an event outside the whitelist fails
    /// with `IllegalTransition` before the target runs.
    pub fn transition<G>(
        &mut self,
        from: E,
        allowed: G,
        args: A,
    ) -> Result<Outcome<E, R>, EngineError>
    where
        G: Into<Guard<E>>,
    {
        let guard = allowed.into();
        Context::new(
            &self.registry,
            &mut self.history,
            Some(&guard),
            from.clone(),
            0,
        )
        .drive(from, args)
    }

    /// Whether `event` has been dispatched at least once.
    pub fn performed(&self, event: &E) -> bool {
        self.history.performed(event)
    }

    pub fn history(&self) -> &EventHistory<E> {
        &self.history
    }

    pub fn registry(&self) -> &Registry<E, A, R> {
        &self.registry
    }
}
