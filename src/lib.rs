//! Relayline: a small event-driven control-flow engine
//!
//! Relayline registers named handlers, fires them in a defined order,
//! chains them into guarded transitions to the next named step, and records
//! which steps have run. It is the control-flow core a request pipeline
//! (receive, lookup, fetch, store, deliver, ...) is built on; what each step
//! does is up to the embedder.
//!
//! # Core Concepts
//!
//! - **Event**: a named step, via the `Event` trait or `event_enum!`
//! - **Handler**: side-effecting closure; an event's handlers run last-on, first-off
//! - **Perform hook**: optional computation whose value becomes the dispatch result
//! - **Forward**: a handler invokes another event by name and never resumes
//! - **Transition**: a dispatch restricted to a whitelist of forward targets
//! - **History**: which events have been dispatched
//!
//! # Example
//!
//! ```rust
//! use relayline::{event_enum, Engine, Flow};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! event_enum! {
//!     enum Step {
//!         Foo,
//!         Bar,
//!     }
//! }
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let mut engine: Engine<Step> = Engine::new();
//!
//! let foo_log = Rc::clone(&log);
//! engine.on(Step::Foo, move |cx, _| {
//!     foo_log.borrow_mut().push("in foo, before transitioning to bar");
//!     cx.forward(Step::Bar, ())
//! });
//!
//! let bar_log = Rc::clone(&log);
//! engine.on(Step::Bar, move |_, _| {
//!     bar_log.borrow_mut().push("in bar");
//!     Ok(Flow::Continue)
//! });
//!
//! let outcome = engine.dispatch(Step::Foo, ()).unwrap();
//! assert_eq!(outcome.target(), Some(&Step::Bar));
//! assert_eq!(
//!     *log.borrow(),
//!     vec!["in foo, before transitioning to bar", "in bar"]
//! );
//! assert!(engine.performed(&Step::Foo));
//! assert!(engine.performed(&Step::Bar));
//! ```

pub mod builder;
pub mod core;
pub mod dispatch;

// Re-export commonly used types
pub use crate::builder::{BuildError, EngineBuilder};
pub use crate::core::{DispatchRecord, Event, EventHistory, Guard};
pub use crate::dispatch::{Context, Engine, EngineError, Flow, Outcome, Signal};
