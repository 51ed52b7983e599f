//! # Tracevar Core
//!
//! Event log data model for trace variability analysis.
//!
//! An event log is a multiset of traces, each trace an ordered sequence of
//! event symbols. This crate stores it compactly:
//!
//! - [`SymbolTable`]: dense integer codes for event names, in first-seen order
//! - [`TraceStore`]: unique traces with an occurrence frequency each
//! - [`LogBuilder`] / [`EventLog`]: the single-pass build phase and the sealed,
//!   read-only log consumed by the metrics
//!
//! The [`error`] module holds the error taxonomy shared by every tracevar crate.
//!
//! ## Example
//!
//! ```rust
//! use tracevar_core::EventLog;
//!
//! let log = EventLog::load(vec![vec!["x", "y"], vec!["x", "y"]]);
//! assert_eq!(log.size(), 2);
//! assert_eq!(log.variant_count(), 1);
//! assert_eq!(log.traces()[0].frequency(), 2);
//! ```

pub mod error;
pub mod event;
pub mod log;
pub mod store;
pub mod symbols;
pub mod trace;

// Re-export main types
pub use error::*;
pub use event::{Event, EventCode, EventRecord};
pub use log::{EventLog, LogBuilder};
pub use store::TraceStore;
pub use symbols::SymbolTable;
pub use trace::Trace;
