//! Core Event trait for named pipeline steps.
//!
//! Every step an engine can dispatch is identified by a value implementing
//! this trait. Enums are the usual choice (see `event_enum!`), but plain
//! `String` names work too.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for event names.
///
/// An event name is an interned identifier: cheap to clone, comparable,
/// hashable so it can key the handler registry and the history set.
///
/// # Required Traits
///
/// - `Clone`: names are copied into history records and signals
/// - `Eq` + `Hash`: names key the registry and the history set
/// - `Debug`: names appear in diagnostics
/// - `Serialize` + `Deserialize`: history can be serialized by the embedder
///
/// # Example
///
/// ```rust
/// use relayline::core::Event;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Step {
///     Receive,
///     Lookup,
///     Deliver,
/// }
///
/// impl Event for Step {
///     fn name(&self) -> &str {
///         match self {
///             Self::Receive => "receive",
///             Self::Lookup => "lookup",
///             Self::Deliver => "deliver",
///         }
///     }
/// }
///
/// assert_eq!(Step::Lookup.name(), "lookup");
/// ```
pub trait Event: Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> {
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}

impl Event for String {
    fn name(&self) -> &str {
        self
    }
}
