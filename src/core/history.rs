//! Dispatch history tracking.
//!
//! Records which events have been dispatched, in order, and answers the
//! `performed` query. History only ever grows.

use super::event::Event;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::time::Duration;

/// Record of a single completed dispatch hop.
///
/// One record is written each time an event's handler stack has run,
/// whether the stack finished, forwarded, or failed part-way.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct DispatchRecord<E: Event> {
    /// The event whose handlers ran
    pub event: E,
    /// The event control was forwarded to, if a handler raised a transition
    pub forwarded_to: Option<E>,
    /// Nesting level of the dispatch boundary (0 for the embedder's own call)
    pub depth: usize,
    /// When the hop finished
    pub timestamp: DateTime<Utc>,
}

/// Ordered, append-only log of dispatched events.
///
/// # Example
///
/// ```rust
/// use relayline::Engine;
///
/// let mut engine: Engine<String> = Engine::new();
/// engine.declare("foo".to_string());
///
/// assert!(!engine.history().performed(&"foo".to_string()));
/// engine.dispatch("foo".to_string(), ()).unwrap();
/// assert!(engine.history().performed(&"foo".to_string()));
/// assert_eq!(engine.history().len(), 1);
/// ```
#[derive(Clone, Debug, Serialize)]
#[serde(bound = "")]
pub struct EventHistory<E: Event> {
    records: Vec<DispatchRecord<E>>,
    #[serde(skip_serializing)]
    performed: HashSet<E>,
}

/// Serialized form of a history. The performed set is rebuilt from the
/// records so the two can never disagree.
#[derive(Deserialize)]
#[serde(bound = "")]
struct RecordLog<E: Event> {
    records: Vec<DispatchRecord<E>>,
}

impl<'de, E: Event> Deserialize<'de> for EventHistory<E> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let RecordLog { records }: RecordLog<E> = RecordLog::deserialize(deserializer)?;
        let performed = records.iter().map(|r| r.event.clone()).collect();
        Ok(Self { records, performed })
    }
}

impl<E: Event> Default for EventHistory<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event> EventHistory<E> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            performed: HashSet::new(),
        }
    }

    pub(crate) fn record(&mut self, event: E, forwarded_to: Option<E>, depth: usize) {
        self.performed.insert(event.clone());
        self.records.push(DispatchRecord {
            event,
            forwarded_to,
            depth,
            timestamp: Utc::now(),
        });
    }

    /// Whether `event` has been dispatched at least once.
    pub fn performed(&self, event: &E) -> bool {
        self.performed.contains(event)
    }

    /// Number of times `event` has been dispatched.
    pub fn count(&self, event: &E) -> usize {
        self.records.iter().filter(|r| &r.event == event).count()
    }

    /// Get all records in dispatch order.
    pub fn records(&self) -> &[DispatchRecord<E>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the events in the order their handler stacks finished.
    pub fn path(&self) -> Vec<&E> {
        self.records.iter().map(|r| &r.event).collect()
    }

    /// Get the transition edges actually taken, as `(from, to)` pairs.
    pub fn forwards(&self) -> Vec<(&E, &E)> {
        self.records
            .iter()
            .filter_map(|r| r.forwarded_to.as_ref().map(|to| (&r.event, to)))
            .collect()
    }

    /// Time between the first and last record.
    ///
    /// Returns `None` when nothing has been dispatched yet.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestEvent {
        Receive,
        Lookup,
        Deliver,
    }

    impl Event for TestEvent {
        fn name(&self) -> &str {
            match self {
                Self::Receive => "receive",
                Self::Lookup => "lookup",
                Self::Deliver => "deliver",
            }
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: EventHistory<TestEvent> = EventHistory::new();
        assert!(history.is_empty());
        assert!(history.path().is_empty());
        assert!(history.duration().is_none());
        assert!(!history.performed(&TestEvent::Receive));
    }

    #[test]
    fn record_marks_event_performed() {
        let mut history = EventHistory::new();
        history.record(TestEvent::Receive, None, 0);

        assert!(history.performed(&TestEvent::Receive));
        assert!(!history.performed(&TestEvent::Lookup));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn repeated_dispatches_are_counted() {
        let mut history = EventHistory::new();
        history.record(TestEvent::Lookup, None, 0);
        history.record(TestEvent::Lookup, None, 0);

        assert_eq!(history.count(&TestEvent::Lookup), 2);
        assert_eq!(history.count(&TestEvent::Deliver), 0);
    }

    #[test]
    fn path_and_forwards_follow_record_order() {
        let mut history = EventHistory::new();
        history.record(TestEvent::Receive, Some(TestEvent::Lookup), 0);
        history.record(TestEvent::Lookup, Some(TestEvent::Deliver), 0);
        history.record(TestEvent::Deliver, None, 0);

        assert_eq!(
            history.path(),
            vec![&TestEvent::Receive, &TestEvent::Lookup, &TestEvent::Deliver]
        );
        assert_eq!(
            history.forwards(),
            vec![
                (&TestEvent::Receive, &TestEvent::Lookup),
                (&TestEvent::Lookup, &TestEvent::Deliver),
            ]
        );
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let mut history = EventHistory::new();
        history.record(TestEvent::Receive, None, 0);
        std::thread::sleep(Duration::from_millis(10));
        history.record(TestEvent::Deliver, None, 0);

        let duration = history.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= Duration::from_millis(10));
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = EventHistory::new();
        history.record(TestEvent::Receive, Some(TestEvent::Lookup), 0);
        history.record(TestEvent::Lookup, None, 1);

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: EventHistory<TestEvent> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.records(), history.records());
        assert!(deserialized.performed(&TestEvent::Lookup));
    }

    #[test]
    fn deserialized_history_rebuilds_performed_from_records() {
        let json = r#"{
            "records": [
                {"event": "Lookup", "forwarded_to": null, "depth": 0, "timestamp": "2024-05-01T12:00:00Z"}
            ],
            "performed": ["Deliver"]
        }"#;

        let history: EventHistory<TestEvent> = serde_json::from_str(json).unwrap();

        assert!(history.performed(&TestEvent::Lookup));
        assert!(!history.performed(&TestEvent::Deliver));
        assert_eq!(history.len(), 1);
    }
}
