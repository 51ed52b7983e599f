//! Trace values: an event sequence plus how many cases share it

use std::fmt::Display;
use std::hash::{Hash, Hasher};

use crate::event::{Event, EventCode};

/// A unique event sequence and its occurrence frequency
///
/// Equality and hashing consider the event sequence only, never the
/// frequency. The frequency can only be changed by the
/// [`TraceStore`](crate::TraceStore) that owns the trace.
#[derive(Debug, Clone)]
pub struct Trace {
    events: Vec<Event>,
    frequency: u64,
}

impl Trace {
    /// Create a trace observed once
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events,
            frequency: 1,
        }
    }

    /// The ordered event sequence
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Event codes in order
    pub fn codes(&self) -> impl Iterator<Item = EventCode> + '_ {
        self.events.iter().map(Event::code)
    }

    /// Number of cases sharing this sequence
    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    /// Trace length
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the trace has no events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All proper prefixes, shortest first
    ///
    /// Includes the empty prefix and excludes the full trace, so a trace of
    /// length `n` yields `n` prefixes.
    pub fn prefixes(&self) -> impl Iterator<Item = &[Event]> + '_ {
        (0..self.events.len()).map(move |end| &self.events[..end])
    }

    /// Check if the trace starts with `prefix`
    pub fn starts_with(&self, prefix: &[Event]) -> bool {
        self.events.starts_with(prefix)
    }

    pub(crate) fn increment(&mut self) {
        self.frequency += 1;
    }
}

impl PartialEq for Trace {
    fn eq(&self, other: &Self) -> bool {
        self.events == other.events
    }
}

impl Eq for Trace {}

impl Hash for Trace {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.events.hash(state);
    }
}

impl Display for Trace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut sep = "";
        for event in &self.events {
            write!(f, "{}{}", sep, event.code())?;
            sep = ", ";
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(codes: &[u32]) -> Vec<Event> {
        codes
            .iter()
            .map(|&c| Event::new(EventCode(c), format!("e{}", c)))
            .collect()
    }

    #[test]
    fn test_new_trace_has_frequency_one() {
        let trace = Trace::new(events(&[0, 1, 2]));
        assert_eq!(trace.frequency(), 1);
        assert_eq!(trace.len(), 3);
        assert!(!trace.is_empty());
    }

    #[test]
    fn test_equality_ignores_frequency() {
        let a = Trace::new(events(&[0, 1]));
        let mut b = Trace::new(events(&[0, 1]));
        b.increment();
        b.increment();

        assert_eq!(a, b);
        assert_eq!(b.frequency(), 3);
        assert_ne!(a, Trace::new(events(&[1, 0])));
    }

    #[test]
    fn test_prefixes_exclude_full_trace() {
        let trace = Trace::new(events(&[0, 1, 2]));
        let prefixes: Vec<Vec<u32>> = trace
            .prefixes()
            .map(|p| p.iter().map(|e| e.code().0).collect())
            .collect();

        assert_eq!(prefixes, vec![vec![], vec![0], vec![0, 1]]);
    }

    #[test]
    fn test_empty_trace_has_no_prefixes() {
        let trace = Trace::new(Vec::new());
        assert_eq!(trace.prefixes().count(), 0);
    }

    #[test]
    fn test_starts_with() {
        let trace = Trace::new(events(&[0, 1, 2]));
        assert!(trace.starts_with(&[]));
        assert!(trace.starts_with(&events(&[0, 1])));
        assert!(trace.starts_with(&events(&[0, 1, 2])));
        assert!(!trace.starts_with(&events(&[1])));
        assert!(!trace.starts_with(&events(&[0, 1, 2, 3])));
    }

    #[test]
    fn test_display() {
        let trace = Trace::new(events(&[3, 0, 7]));
        assert_eq!(trace.to_string(), "3, 0, 7");
        assert_eq!(Trace::new(Vec::new()).to_string(), "");
    }
}
