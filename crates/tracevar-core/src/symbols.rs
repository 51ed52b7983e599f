//! Symbol table mapping event names to dense integer codes

use std::collections::HashMap;
use std::sync::Arc;

use crate::event::{Event, EventCode};

/// Assigns a stable integer code to each distinct event name
///
/// Codes are positional: the first name seen gets code 0, the next new name
/// gets code 1, and so on. Once assigned a code never changes.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    /// Names indexed by code
    names: Vec<Arc<str>>,
    /// Name to code mapping
    codes: HashMap<Arc<str>, EventCode>,
}

impl SymbolTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the code of `name`, registering it first if unseen
    pub fn register_or_get_code(&mut self, name: &str) -> EventCode {
        if let Some(&code) = self.codes.get(name) {
            return code;
        }

        let code = EventCode(self.names.len() as u32);
        let name: Arc<str> = Arc::from(name);
        self.names.push(Arc::clone(&name));
        self.codes.insert(name, code);
        code
    }

    /// Like [`register_or_get_code`](Self::register_or_get_code), returning the event value
    pub fn register_or_get_event(&mut self, name: &str) -> Event {
        let code = self.register_or_get_code(name);
        Event::new(code, Arc::clone(&self.names[code.index()]))
    }

    /// Look up the code of `name` without registering it
    pub fn lookup_code(&self, name: &str) -> Option<EventCode> {
        self.codes.get(name).copied()
    }

    /// Name registered under `code`
    pub fn name(&self, code: EventCode) -> Option<&str> {
        self.names.get(code.index()).map(|n| n.as_ref())
    }

    /// Build the event value for `code`
    pub fn event(&self, code: EventCode) -> Option<Event> {
        self.names
            .get(code.index())
            .map(|name| Event::new(code, Arc::clone(name)))
    }

    /// Build the event value for `name` if it is registered
    pub fn lookup_event(&self, name: &str) -> Option<Event> {
        self.lookup_code(name).and_then(|code| self.event(code))
    }

    /// Registered names in code order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|n| n.as_ref())
    }

    /// Number of distinct names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if no name has been registered
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_in_first_seen_order() {
        let mut table = SymbolTable::new();

        assert_eq!(table.register_or_get_code("register"), EventCode(0));
        assert_eq!(table.register_or_get_code("check"), EventCode(1));
        assert_eq!(table.register_or_get_code("register"), EventCode(0));
        assert_eq!(table.register_or_get_code("approve"), EventCode(2));

        assert_eq!(table.len(), 3);
        let names: Vec<_> = table.names().collect();
        assert_eq!(names, vec!["register", "check", "approve"]);
    }

    #[test]
    fn test_lookup_does_not_register() {
        let mut table = SymbolTable::new();
        table.register_or_get_code("a");

        assert_eq!(table.lookup_code("a"), Some(EventCode(0)));
        assert_eq!(table.lookup_code("b"), None);
        assert_eq!(table.len(), 1);
        assert!(table.lookup_event("b").is_none());
    }

    #[test]
    fn test_event_for_code() {
        let mut table = SymbolTable::new();
        table.register_or_get_code("a");
        let code = table.register_or_get_code("b");

        let event = table.event(code).unwrap();
        assert_eq!(event.code(), EventCode(1));
        assert_eq!(event.name(), "b");
        assert_eq!(table.name(EventCode(0)), Some("a"));
        assert!(table.event(EventCode(9)).is_none());
    }

    #[test]
    fn test_empty_table() {
        let table = SymbolTable::new();
        assert!(table.is_empty());
        assert_eq!(table.names().count(), 0);
    }
}
