//! Handler-side view of a running dispatch.

use crate::core::{Event, EventHistory, Guard};
use crate::dispatch::error::EngineError;
use crate::dispatch::outcome::{Flow, Outcome};
use crate::dispatch::registry::Registry;

/// Context handed to every handler while its event is being dispatched.
///
/// The context is how a handler moves the pipeline forward. `forward`
/// produces the tail transition: the handler returns the flow it gets back
/// and never resumes. `dispatch` and `transition` open a nested boundary
/// instead, returning the nested outcome to the handler so it can carry on.
///
/// # Example
///
/// ```rust
/// use relayline::Engine;
///
/// let mut engine: Engine<String, u32, u32> = Engine::new();
/// engine.on("double".to_string(), |cx, n| cx.forward("report".to_string(), n * 2));
/// engine.declare("report".to_string());
/// engine.set_perform_hook("report".to_string(), |n| *n).unwrap();
///
/// let outcome = engine.dispatch("double".to_string(), 21).unwrap();
/// assert_eq!(outcome.target(), Some(&"report".to_string()));
/// assert_eq!(outcome.into_value(), Some(42));
/// ```
pub struct Context<'a, E: Event, A, R> {
    pub(super) registry: &'a Registry<E, A, R>,
    pub(super) history: &'a mut EventHistory<E>,
    pub(super) guard: Option<&'a Guard<E>>,
    pub(super) event: E,
    pub(super) depth: usize,
}

impl<'a, E: Event, A, R> Context<'a, E, A, R> {
    pub(crate) fn new(
        registry: &'a Registry<E, A, R>,
        history: &'a mut EventHistory<E>,
        guard: Option<&'a Guard<E>>,
        event: E,
        depth: usize,
    ) -> Self {
        Self {
            registry,
            history,
            guard,
            event,
            depth,
        }
    }

    /// The event whose handlers are currently running.
    pub fn event(&self) -> &E {
        &self.event
    }

    /// Nesting level of the enclosing dispatch boundary.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The whitelist installed by the enclosing guarded transition, if any.
    pub fn guard(&self) -> Option<&Guard<E>> {
        self.guard
    }

    pub fn performed(&self, event: &E) -> bool {
        self.history.performed(event)
    }

    pub fn history(&self) -> &EventHistory<E> {
        self.history
    }

    /// Invoke `target` by name and transition to it.
    ///
    /// Validates the target against the active whitelist and the registry,
    /// then returns the flow the handler must return. The dispatcher runs
    /// `target` with `args` once the handler has returned; no further
    /// handlers of the current event run.
    ///
    /// The returned flow only takes effect when the handler returns it.
    /// Dropping it discards the forward: the handler's trailing code runs
    /// and `target` is never dispatched. Write `return cx.forward(..)` or
    /// make the call the handler's tail expression.
    pub fn forward(&self, target: E, args: A) -> Result<Flow<E, A>, EngineError> {
        self.check_guard(&target)?;
        self.registry.handlers_for(&target)?;
        Ok(Flow::Forward(target, args))
    }

    /// Dispatch `event` at a nested boundary and hand the outcome back.
    ///
    /// The active whitelist, if any, still applies inside the nested dispatch.
    pub fn dispatch(&mut self, event: E, args: A) -> Result<Outcome<E, R>, EngineError> {
        let mut nested = Context::new(
            self.registry,
            &mut *self.history,
            self.guard,
            event.clone(),
            self.depth + 1,
        );
        nested.drive(event, args)
    }

    /// Guarded dispatch at a nested boundary.
    ///
    /// The given whitelist replaces the active one until the nested dispatch
    /// returns.
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
        let mut nested = Context::new(
            self.registry,
            &mut *self.history,
            Some(&guard),
            from.clone(),
            self.depth + 1,
        );
        nested.drive(from, args)
    }
}
