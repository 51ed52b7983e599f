//! The event log: symbol table plus deduplicated trace store
//!
//! A log is built once through [`LogBuilder`] and then sealed into a
//! read-only [`EventLog`]. Only the builder can register event names or
//! record traces, so metrics can share a sealed log across threads
//! without synchronization.

use std::collections::BTreeMap;

use tracing::{debug, info_span};

use crate::event::{Event, EventRecord};
use crate::store::TraceStore;
use crate::symbols::SymbolTable;
use crate::trace::Trace;

/// Mutable build phase of an [`EventLog`]
#[derive(Debug, Default)]
pub struct LogBuilder {
    symbols: SymbolTable,
    store: TraceStore,
    cases: u64,
}

impl LogBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the event for `name`, registering the name if unseen
    pub fn get_event(&mut self, name: &str) -> Event {
        self.symbols.register_or_get_event(name)
    }

    /// Stored trace with exactly this event sequence, if any
    pub fn get_trace(&self, events: &[Event]) -> Option<&Trace> {
        self.store.get_trace(events)
    }

    /// Add one case given as an ordered sequence of event records
    pub fn add_case<I>(&mut self, records: I) -> &Trace
    where
        I: IntoIterator,
        I::Item: EventRecord,
    {
        let events: Vec<Event> = records
            .into_iter()
            .map(|record| self.get_event(record.event_name()))
            .collect();
        self.cases += 1;
        self.store.record(events)
    }

    /// Add every case of `cases`, in order
    pub fn load<C, I>(&mut self, cases: C) -> &mut Self
    where
        C: IntoIterator<Item = I>,
        I: IntoIterator,
        I::Item: EventRecord,
    {
        let span = info_span!("load");
        let _enter = span.enter();

        let before = self.cases;
        for case in cases {
            self.add_case(case);
        }

        debug!(
            cases = self.cases - before,
            variants = self.store.len(),
            event_types = self.symbols.len(),
            "Loaded cases"
        );
        self
    }

    /// Number of cases added so far
    pub fn case_count(&self) -> u64 {
        self.cases
    }

    /// Seal the log
    pub fn build(self) -> EventLog {
        EventLog {
            symbols: self.symbols,
            store: self.store,
        }
    }
}

/// A fully loaded, read-only event log
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    symbols: SymbolTable,
    store: TraceStore,
}

impl EventLog {
    /// Build a log from an ordered sequence of cases in a single pass
    pub fn load<C, I>(cases: C) -> Self
    where
        C: IntoIterator<Item = I>,
        I: IntoIterator,
        I::Item: EventRecord,
    {
        let mut builder = LogBuilder::new();
        builder.load(cases);
        builder.build()
    }

    /// Event for a registered name; `None` if the name never occurred
    pub fn get_event(&self, name: &str) -> Option<Event> {
        self.symbols.lookup_event(name)
    }

    /// Stored trace with exactly this event sequence, if any
    pub fn get_trace(&self, events: &[Event]) -> Option<&Trace> {
        self.store.get_trace(events)
    }

    /// Total number of cases, i.e. the sum of all trace frequencies
    pub fn size(&self) -> u64 {
        self.store.total_frequency()
    }

    /// Number of unique traces
    pub fn variant_count(&self) -> usize {
        self.store.len()
    }

    /// Unique traces in first-seen order
    pub fn traces(&self) -> &[Trace] {
        self.store.as_slice()
    }

    /// The trace store
    pub fn store(&self) -> &TraceStore {
        &self.store
    }

    /// The symbol table
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Sum of the lengths of all unique traces
    pub fn total_events(&self) -> usize {
        self.store.iter().map(Trace::len).sum()
    }

    /// Frequency value to the number of unique traces with that frequency
    pub fn frequency_histogram(&self) -> BTreeMap<u64, usize> {
        let mut histogram = BTreeMap::new();
        for trace in &self.store {
            *histogram.entry(trace.frequency()).or_insert(0) += 1;
        }
        histogram
    }

    /// Check if the log holds no cases
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
