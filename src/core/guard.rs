//! Transition guards.
//!
//! A guard is the whitelist installed by a guarded transition: the set of
//! event names a dispatch is allowed to forward control to.

use super::event::Event;

/// Whitelist of events a guarded dispatch may forward to.
///
/// Guards are pure values; checking one has no side effects. They convert
/// from arrays, vectors and iterators of event names, so callers rarely
/// build one explicitly.
///
/// # Example
///
/// ```rust
/// use relayline::core::Guard;
///
/// let guard: Guard<String> = Guard::allowing(["pass".to_string(), "lookup".to_string()]);
///
/// assert!(guard.permits(&"lookup".to_string()));
/// assert!(!guard.permits(&"store".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Guard<E: Event> {
    allowed: Vec<E>,
}

impl<E: Event> Guard<E> {
    /// Create a guard permitting exactly the given events.
    pub fn allowing<I>(allowed: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let mut unique: Vec<E> = Vec::new();
        for event in allowed {
            if !unique.contains(&event) {
                unique.push(event);
            }
        }
        Guard { allowed: unique }
    }

    /// Check whether forwarding to `target` is permitted.
    pub fn permits(&self, target: &E) -> bool {
        self.allowed.contains(target)
    }

    /// The permitted events, in the order they were first given.
    pub fn allowed(&self) -> &[E] {
        &self.allowed
    }
}

impl<E: Event> From<Vec<E>> for Guard<E> {
    fn from(allowed: Vec<E>) -> Self {
        Guard::allowing(allowed)
    }
}

impl<E: Event, const N: usize> From<[E; N]> for Guard<E> {
    fn from(allowed: [E; N]) -> Self {
        Guard::allowing(allowed)
    }
}

impl<E: Event> From<&[E]> for Guard<E> {
    fn from(allowed: &[E]) -> Self {
        Guard::allowing(allowed.iter().cloned())
    }
}

impl<E: Event> FromIterator<E> for Guard<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Guard::allowing(iter)
    }
}
