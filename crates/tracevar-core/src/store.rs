//! Deduplicating trace storage

use std::collections::HashMap;

use crate::event::{Event, EventCode};
use crate::trace::Trace;

/// Unique traces in first-seen order, with a hash index on the code sequence
///
/// No two stored traces have the same event sequence. Sequences sharing a
/// code sequence but differing in names share one index bucket.
#[derive(Debug, Clone, Default)]
pub struct TraceStore {
    traces: Vec<Trace>,
    index: HashMap<Vec<EventCode>, Vec<usize>>,
}

impl TraceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, events: &[Event]) -> Option<usize> {
        let key: Vec<EventCode> = events.iter().map(Event::code).collect();
        self.index
            .get(&key)?
            .iter()
            .copied()
            .find(|&idx| self.traces[idx].events() == events)
    }

    /// Find the stored trace with exactly this event sequence
    pub fn get_trace(&self, events: &[Event]) -> Option<&Trace> {
        self.position(events).map(|idx| &self.traces[idx])
    }

    /// Record one observed case
    ///
    /// Inserts a new trace with frequency 1, or bumps the frequency of the
    /// matching stored trace. Returns the stored trace.
    pub fn record(&mut self, events: Vec<Event>) -> &Trace {
        let idx = match self.position(&events) {
            Some(idx) => {
                self.traces[idx].increment();
                idx
            }
            None => {
                let idx = self.traces.len();
                self.index
                    .entry(events.iter().map(Event::code).collect())
                    .or_default()
                    .push(idx);
                self.traces.push(Trace::new(events));
                idx
            }
        };
        &self.traces[idx]
    }

    /// Trace at insertion position `idx`
    pub fn get(&self, idx: usize) -> Option<&Trace> {
        self.traces.get(idx)
    }

    /// The first trace ever inserted
    pub fn first(&self) -> Option<&Trace> {
        self.traces.first()
    }

    /// Stored traces in first-seen order
    pub fn iter(&self) -> std::slice::Iter<'_, Trace> {
        self.traces.iter()
    }

    /// Stored traces as a slice
    pub fn as_slice(&self) -> &[Trace] {
        &self.traces
    }

    /// Sum of all trace frequencies
    pub fn total_frequency(&self) -> u64 {
        self.traces.iter().map(Trace::frequency).sum()
    }

    /// Number of unique traces
    pub fn len(&self) -> usize {
        self.traces.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }
}

impl<'a> IntoIterator for &'a TraceStore {
    type Item = &'a Trace;
    type IntoIter = std::slice::Iter<'a, Trace>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
