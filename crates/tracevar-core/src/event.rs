//! Event values and the raw event record contract

use std::fmt::Display;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Dense integer code assigned to an event name, in first-seen order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventCode(pub u32);

impl EventCode {
    /// The code as a table index
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for EventCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One occurrence of a named event type
///
/// Built on demand from a [`SymbolTable`](crate::SymbolTable); never mutated.
/// Two events are equal when both code and name match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    code: EventCode,
    name: Arc<str>,
}

impl Event {
    /// Create a new event
    pub fn new(code: EventCode, name: impl Into<Arc<str>>) -> Self {
        Self {
            code,
            name: name.into(),
        }
    }

    /// The event's integer code
    pub fn code(&self) -> EventCode {
        self.code
    }

    /// The original event name
    pub fn name(&self) -> &str {
        &self.name
    }
}

// Within one log a code determines its name, so hashing the code alone
// agrees with `Eq`.
impl Hash for Event {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// A raw event record as supplied by an input adapter
///
/// The core only needs the event-type name of each record.
pub trait EventRecord {
    /// The event-type name (`concept:name` in XES terms)
    fn event_name(&self) -> &str;
}

impl EventRecord for str {
    fn event_name(&self) -> &str {
        self
    }
}

impl EventRecord for String {
    fn event_name(&self) -> &str {
        self.as_str()
    }
}

impl<T: EventRecord + ?Sized> EventRecord for &T {
    fn event_name(&self) -> &str {
        (**self).event_name()
    }
}
