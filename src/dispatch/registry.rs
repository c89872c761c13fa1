//! Event registry: handler stacks and perform hooks.

use crate::builder::BuildError;
use crate::core::Event;
use crate::dispatch::context::Context;
use crate::dispatch::error::EngineError;
use crate::dispatch::outcome::Flow;
use std::collections::HashMap;

/// Type alias for registered handlers.
///
/// A handler runs for its side effects and reports, through the returned
/// `Flow`, whether it transitions out of the current event.
pub type Handler<E, A, R> =
    Box<dyn Fn(&mut Context<'_, E, A, R>, &A) -> Result<Flow<E, A>, EngineError>>;

/// Type alias for perform hooks, whose value becomes the dispatch result.
pub type PerformHook<A, R> = Box<dyn Fn(&A) -> R>;

/// Mapping from event name to its handler stack and optional perform hook.
///
/// A name with no stack is unknown; a declared name may have an empty
/// stack. Handler stacks keep registration order, the dispatcher walks
/// them in reverse.
pub struct Registry<E: Event, A, R> {
    handlers: HashMap<E, Vec<Handler<E, A, R>>>,
    hooks: HashMap<E, PerformHook<A, R>>,
}

impl<E: Event, A, R> Default for Registry<E, A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event, A, R> Registry<E, A, R> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            hooks: HashMap::new(),
        }
    }

    /// Push a handler onto the stack for `event`, creating the stack if absent.
    pub fn register<F>(&mut self, event: E, handler: F)
    where
        F: Fn(&mut Context<'_, E, A, R>, &A) -> Result<Flow<E, A>, EngineError> + 'static,
    {
        self.handlers
            .entry(event)
            .or_default()
            .push(Box::new(handler));
    }

    pub(crate) fn register_boxed(&mut self, event: E, handler: Handler<E, A, R>) {
        self.handlers.entry(event).or_default().push(handler);
    }

    /// Make `event` known without adding a handler.
    pub fn declare(&mut self, event: E) {
        self.handlers.entry(event).or_default();
    }

    /// Associate the perform hook for `event`.
    ///
    /// Each event has at most one hook; a second one is rejected.
    pub fn set_perform_hook<F>(&mut self, event: E, hook: F) -> Result<(), BuildError>
    where
        F: Fn(&A) -> R + 'static,
    {
        self.set_boxed_hook(event, Box::new(hook))
    }

    pub(crate) fn set_boxed_hook(
        &mut self,
        event: E,
        hook: PerformHook<A, R>,
    ) -> Result<(), BuildError> {
        if self.hooks.contains_key(&event) {
            return Err(BuildError::DuplicatePerformHook {
                event: event.name().to_string(),
            });
        }
        self.hooks.insert(event, hook);
        Ok(())
    }

    /// Get the handler stack for `event` in registration order.
    pub fn handlers_for(&self, event: &E) -> Result<&[Handler<E, A, R>], EngineError> {
        self.handlers
            .get(event)
            .map(Vec::as_slice)
            .ok_or_else(|| EngineError::UnknownEvent {
                event: event.name().to_string(),
            })
    }

    /// Run the perform hook for `event`, if one is set.
    pub fn perform(&self, event: &E, args: &A) -> Option<R> {
        self.hooks.get(event).map(|hook| hook(args))
    }

    pub fn is_known(&self, event: &E) -> bool {
        self.handlers.contains_key(event)
    }

    pub fn has_perform_hook(&self, event: &E) -> bool {
        self.hooks.contains_key(event)
    }

    /// Number of handlers registered for `event`, or `None` if unknown.
    pub fn handler_count(&self, event: &E) -> Option<usize> {
        self.handlers.get(event).map(Vec::len)
    }

    /// All known event names, in no particular order.
    pub fn events(&self) -> impl Iterator<Item = &E> {
        self.handlers.keys()
    }
}
