//! Builder API for ergonomic engine setup.
//!
//! This module provides a fluent builder, a macro for declaring event
//! enums, and constructors for the most common handler shapes.

pub mod engine;
pub mod error;
pub mod macros;

pub use engine::EngineBuilder;
pub use error::BuildError;

use crate::core::Event;
use crate::dispatch::{Context, EngineError, Flow};

/// Create a handler that forwards to `target` with the arguments it was
/// given.
///
/// # Example
///
/// ```
/// use relayline::builder::forward_to;
/// use relayline::Engine;
///
/// let mut engine: Engine<String, u8, u8> = Engine::new();
/// engine.on("pass".to_string(), forward_to("fetch".to_string()));
/// engine.declare("fetch".to_string());
/// engine.set_perform_hook("fetch".to_string(), |n| *n).unwrap();
///
/// let outcome = engine.dispatch("pass".to_string(), 7).unwrap();
/// assert_eq!(outcome.into_value(), Some(7));
/// ```
pub fn forward_to<E, A, R>(
    target: E,
) -> impl Fn(&mut Context<'_, E, A, R>, &A) -> Result<Flow<E, A>, EngineError>
where
    E: Event + 'static,
    A: Clone + 'static,
    R: 'static,
{
    move |cx: &mut Context<'_, E, A, R>, args: &A| cx.forward(target.clone(), args.clone())
}

/// Create a handler that raises a bare transition signal to `target`
/// without dispatching it.
///
/// # Example
///
/// ```
/// use relayline::builder::signal_to;
/// use relayline::Engine;
///
/// let mut engine: Engine<String> = Engine::new();
/// engine.on("foo".to_string(), signal_to("bar".to_string()));
///
/// let outcome = engine.dispatch("foo".to_string(), ()).unwrap();
/// assert_eq!(outcome.target(), Some(&"bar".to_string()));
/// assert!(!engine.performed(&"bar".to_string()));
/// ```
pub fn signal_to<E, A, R>(
    target: E,
) -> impl Fn(&mut Context<'_, E, A, R>, &A) -> Result<Flow<E, A>, EngineError>
where
    E: Event + 'static,
    A: 'static,
    R: 'static,
{
    move |_cx: &mut Context<'_, E, A, R>, _args: &A| Ok(Flow::Signal(target.clone()))
}
