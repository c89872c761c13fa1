//! Core engine value types.
//!
//! This module contains the pure pieces the dispatcher is built from:
//! - Event names via the `Event` trait
//! - Transition guards (whitelists of forward targets)
//! - Append-only dispatch history
//!
//! Nothing in here runs handlers; see `dispatch` for that.

mod event;
mod guard;
mod history;

pub use event::Event;
pub use guard::Guard;
pub use history::{DispatchRecord, EventHistory};
