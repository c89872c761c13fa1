//! Build errors for engine setup.

use thiserror::Error;

/// Errors that can occur while setting up an engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Perform hook for '{event}' already set. Each event takes at most one hook")]
    DuplicatePerformHook { event: String },

    #[error("No events defined. Register a handler or declare an event")]
    NoEvents,
}
