//! Builder for constructing engines.

use crate::builder::error::BuildError;
use crate::core::Event;
use crate::dispatch::{Context, Engine, EngineError, Flow, Handler, PerformHook, Registry};

/// Builder for setting up an engine with a fluent API.
///
/// Collects handlers, declarations and hooks, then validates them all at
/// once in `build`.
///
/// # Example
///
/// ```
/// use relayline::builder::EngineBuilder;
/// use relayline::event_enum;
///
/// event_enum! {
///     enum Step {
///         Receive,
///         Deliver,
///     }
/// }
///
/// let mut engine = EngineBuilder::<Step, (), &'static str>::new()
///     .on(Step::Receive, |cx, _| cx.forward(Step::Deliver, ()))
///     .declare(Step::Deliver)
///     .perform(Step::Deliver, |_| "200 OK")
///     .build()
///     .unwrap();
///
/// let outcome = engine.dispatch(Step::Receive, ()).unwrap();
/// assert_eq!(outcome.into_value(), Some("200 OK"));
/// ```
pub struct EngineBuilder<E: Event, A = (), R = ()> {
    handlers: Vec<(E, Handler<E, A, R>)>,
    declared: Vec<E>,
    hooks: Vec<(E, PerformHook<A, R>)>,
}

impl<E: Event, A, R> EngineBuilder<E, A, R> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            declared: Vec::new(),
            hooks: Vec::new(),
        }
    }

    /// Add a handler for `event`. Later handlers run first.
    pub fn on<F>(mut self, event: E, handler: F) -> Self
    where
        F: Fn(&mut Context<'_, E, A, R>, &A) -> Result<Flow<E, A>, EngineError> + 'static,
    {
        self.handlers.push((event, Box::new(handler)));
        self
    }

    /// Declare `event` so it can be dispatched without handlers.
    pub fn declare(mut self, event: E) -> Self {
        self.declared.push(event);
        self
    }

    /// Set the perform hook for `event`.
    pub fn perform<F>(mut self, event: E, hook: F) -> Self
    where
        F: Fn(&A) -> R + 'static,
    {
        self.hooks.push((event, Box::new(hook)));
        self
    }

    /// Build the engine.
    /// Returns an error if no event was defined or a hook was set twice.
    pub fn build(self) -> Result<Engine<E, A, R>, BuildError> {
        if self.handlers.is_empty() && self.declared.is_empty() {
            return Err(BuildError::NoEvents);
        }

        let mut registry = Registry::new();
        for (event, handler) in self.handlers {
            registry.register_boxed(event, handler);
        }
        for event in self.declared {
            registry.declare(event);
        }
        for (event, hook) in self.hooks {
            registry.set_boxed_hook(event, hook)?;
        }

        Ok(Engine::with_registry(registry))
    }
}

impl<E: Event, A, R> Default for EngineBuilder<E, A, R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{Outcome, Signal};
    use serde::{Deserialize, Serialize};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestEvent {
        Lookup,
        Fetch,
        Store,
    }

    impl Event for TestEvent {
        fn name(&self) -> &str {
            match self {
                Self::Lookup => "lookup",
                Self::Fetch => "fetch",
                Self::Store => "store",
            }
        }
    }

    #[test]
    fn builder_requires_events() {
        let result = EngineBuilder::<TestEvent>::new().build();

        assert!(matches!(result, Err(BuildError::NoEvents)));
    }

    #[test]
    fn hooks_alone_do_not_count_as_events() {
        let result = EngineBuilder::<TestEvent, (), u8>::new()
            .perform(TestEvent::Store, |_| 1)
            .build();

        assert!(matches!(result, Err(BuildError::NoEvents)));
    }

    #[test]
    fn builder_rejects_duplicate_hooks() {
        let result = EngineBuilder::<TestEvent, (), u8>::new()
            .declare(TestEvent::Store)
            .perform(TestEvent::Store, |_| 1)
            .perform(TestEvent::Store, |_| 2)
            .build();

        assert!(matches!(
            result,
            Err(BuildError::DuplicatePerformHook { event }) if event == "store"
        ));
    }

    #[test]
    fn builder_keeps_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let first = Rc::clone(&log);
        let second = Rc::clone(&log);

        let mut engine = EngineBuilder::<TestEvent>::new()
            .on(TestEvent::Lookup, move |_, _| {
                first.borrow_mut().push("first");
                Ok(Flow::Continue)
            })
            .on(TestEvent::Lookup, move |_, _| {
                second.borrow_mut().push("second");
                Ok(Flow::Continue)
            })
            .build()
            .unwrap();

        engine.dispatch(TestEvent::Lookup, ()).unwrap();
        assert_eq!(*log.borrow(), vec!["second", "first"]);
    }

    #[test]
    fn fluent_api_builds_engine() {
        let mut engine = EngineBuilder::<TestEvent, (), &'static str>::new()
            .on(TestEvent::Lookup, |cx, _| cx.forward(TestEvent::Fetch, ()))
            .on(TestEvent::Fetch, |cx, _| cx.forward(TestEvent::Store, ()))
            .declare(TestEvent::Store)
            .perform(TestEvent::Store, |_| "stored")
            .build()
            .unwrap();

        let outcome = engine
            .transition(TestEvent::Lookup, [TestEvent::Fetch, TestEvent::Store], ())
            .unwrap();

        assert_eq!(outcome.target(), Some(&TestEvent::Fetch));
        assert_eq!(
            outcome,
            Outcome::Transitioned(Signal {
                target: TestEvent::Fetch,
                value: Some("stored"),
            })
        );
        assert!(engine.performed(&TestEvent::Store));
    }
}
