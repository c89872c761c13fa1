//! Event dispatch: registry, handler context and the engine.
//!
//! This module is the imperative shell around `core`. It runs handlers,
//! follows the transition signals they return and records what ran.
//!
//! # Key Concepts
//!
//! - **Registry**: handler stacks (run last-on first-off) and perform hooks
//! - **Flow**: the signal a handler returns: continue, forward or bare signal
//! - **Context**: what a handler sees; `forward` is the name-as-action call
//! - **Engine**: `dispatch` and guarded `transition` entry points

mod context;
mod dispatcher;
mod engine;
mod error;
mod outcome;
mod registry;

pub use context::Context;
pub use engine::Engine;
pub use error::EngineError;
pub use outcome::{Flow, Outcome, Signal};
pub use registry::{Handler, PerformHook, Registry};
