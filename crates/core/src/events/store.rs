//! In-memory event store
//!
//! The store is the sole owner of the canonical event list. It is an
//! explicitly owned value passed by reference to every consumer; there is no
//! global singleton. A write is a single atomic replace-or-append of the
//! collection, which is kept ascending by `start` after every mutation.

use chrono::NaiveDate;
use timeflow_domain::Event;

/// Ordered collection of the user's scheduled events.
#[derive(Debug, Default, Clone)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the given events, sorted by start time.
    pub fn with_events(mut events: Vec<Event>) -> Self {
        events.sort_by_key(|e| e.start);
        Self { events }
    }

    /// Read-only snapshot of the full event list.
    pub fn list(&self) -> Vec<Event> {
        self.events.clone()
    }

    /// Look up one event by id.
    pub fn get(&self, id: &str) -> Option<Event> {
        self.events.iter().find(|e| e.id == id).cloned()
    }

    /// Replace-or-append keyed by id, then re-sort ascending by start.
    ///
    /// Overlapping events are permitted; no conflict check happens here.
    pub fn put(&mut self, event: Event) {
        match self.events.iter_mut().find(|e| e.id == event.id) {
            Some(existing) => *existing = event,
            None => self.events.push(event),
        }
        self.events.sort_by_key(|e| e.start);
    }

    /// Events starting on the given calendar day (UTC).
    pub fn events_on(&self, date: NaiveDate) -> Vec<Event> {
        self.events.iter().filter(|e| e.start.date_naive() == date).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
