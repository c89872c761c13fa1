//! The dispatch loop.
//!
//! Runs an event's handler stack last-on first-off, then either completes
//! through the perform hook or follows the transition the stack raised.
//! Forwards are followed iteratively rather than recursively, so a long
//! chain of forwarding events does not grow the call stack.

use crate::core::Event;
use crate::dispatch::context::Context;
use crate::dispatch::error::EngineError;
use crate::dispatch::outcome::{Flow, Outcome, Signal};
use crate::dispatch::registry::Handler;
use tracing::{debug, debug_span, trace, warn};

impl<'a, E: Event, A, R> Context<'a, E, A, R> {
    /// Dispatch `event` as one boundary, following forwards until a stack
    /// completes or raises a bare signal.
    pub(crate) fn drive(&mut self, event: E, args: A) -> Result<Outcome<E, R>, EngineError> {
        let registry = self.registry;
        let mut current = event;
        let mut args = args;
        let mut first_target: Option<E> = None;

        loop {
            let handlers = registry.handlers_for(&current)?;

            let span = debug_span!("dispatch", event = current.name(), depth = self.depth);
            let _entered = span.enter();
            self.event = current.clone();

            let flow = self.run_stack(handlers, &args).and_then(|flow| {
                if let Some(target) = flow.target() {
                    self.check_guard(target)?;
                }
                if let Flow::Forward(target, _) = &flow {
                    registry.handlers_for(target)?;
                }
                Ok(flow)
            });

            let forwarded_to = flow.as_ref().ok().and_then(Flow::target).cloned();
            self.history.record(current.clone(), forwarded_to, self.depth);

            match flow? {
                Flow::Continue => {
                    let value = registry.perform(&current, &args);
                    debug!(hook = registry.has_perform_hook(&current), "event completed");
                    return Ok(match first_target {
                        None => Outcome::Completed(value),
                        Some(target) => Outcome::Transitioned(Signal { target, value }),
                    });
                }
                Flow::Signal(target) => {
                    debug!(to = target.name(), "transition signal raised");
                    return Ok(Outcome::Transitioned(Signal {
                        target: first_target.unwrap_or(target),
                        value: None,
                    }));
                }
                Flow::Forward(target, next_args) => {
                    debug!(to = target.name(), "forwarding");
                    if first_target.is_none() {
                        first_target = Some(target.clone());
                    }
                    current = target;
                    args = next_args;
                }
            }
        }
    }

    /// Run handlers most-recently-registered first, stopping at the first
    /// one that transitions or fails.
    fn run_stack(
        &mut self,
        handlers: &[Handler<E, A, R>],
        args: &A,
    ) -> Result<Flow<E, A>, EngineError> {
        for (index, handler) in handlers.iter().enumerate().rev() {
            trace!(handler = index, "running handler");
            match handler(self, args)? {
                Flow::Continue => {}
                flow => return Ok(flow),
            }
        }
        Ok(Flow::Continue)
    }

    pub(super) fn check_guard(&self, target: &E) -> Result<(), EngineError> {
        match self.guard {
            Some(guard) if !guard.permits(target) => {
                warn!(
                    from = self.event.name(),
                    to = target.name(),
                    "transition rejected by guard"
                );
                Err(EngineError::IllegalTransition {
                    from: self.event.name().to_string(),
                    to: target.name().to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}
