//! Dispatch-time errors.

use thiserror::Error;

/// Errors that can occur while dispatching events.
///
/// Both kinds are raised before the offending event's handlers run and are
/// returned to the embedder unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Unknown event '{event}': no handlers registered")]
    UnknownEvent { event: String },

    #[error("Illegal transition from '{from}' to '{to}'")]
    IllegalTransition { from: String, to: String },
}
