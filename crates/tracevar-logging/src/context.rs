//! Input-source context injection
//!
//! This module provides thread-local storage for the log file currently being
//! analyzed, so every span opened while processing it carries the source
//! label and a per-run id.

use std::cell::RefCell;

use uuid::Uuid;

/// Source context data stored in thread-local storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceContextData {
    /// Label of the input log (usually its path)
    pub source: String,
    /// Unique id of this processing run
    pub run_id: Uuid,
}

thread_local! {
    static SOURCE_CONTEXT: RefCell<Option<SourceContextData>> = const { RefCell::new(None) };
}

/// RAII guard for source context
///
/// When this guard is created, it sets the source context for the current thread.
/// When it's dropped, it restores the previous context (if any).
///
/// # Example
///
/// ```ignore
/// use tracevar_logging::context::SourceContextGuard;
///
/// let _guard = SourceContextGuard::new("logs/BPIChallenge2011.json");
///
/// // All spans opened in this scope carry source = "logs/BPIChallenge2011.json"
/// tracing::info!("Loading log");
/// ```
pub struct SourceContextGuard {
    previous: Option<SourceContextData>,
}

impl SourceContextGuard {
    /// Create a new source context guard with a fresh run id
    pub fn new(source: impl Into<String>) -> Self {
        Self::with_run_id(source, Uuid::new_v4())
    }

    /// Create a guard with a specific run id
    pub fn with_run_id(source: impl Into<String>, run_id: Uuid) -> Self {
        let previous = SOURCE_CONTEXT.with(|ctx| ctx.borrow().clone());

        let new_ctx = SourceContextData {
            source: source.into(),
            run_id,
        };
        SOURCE_CONTEXT.with(|ctx| *ctx.borrow_mut() = Some(new_ctx));

        Self { previous }
    }

    /// Get the current source context (if any)
    pub fn current() -> Option<SourceContextData> {
        SOURCE_CONTEXT.with(|ctx| ctx.borrow().clone())
    }

    /// Get the current source label (if set)
    pub fn current_source() -> Option<String> {
        Self::current().map(|ctx| ctx.source)
    }

    /// Get the current run id (if set)
    pub fn current_run_id() -> Option<Uuid> {
        Self::current().map(|ctx| ctx.run_id)
    }
}

impl Drop for SourceContextGuard {
    fn drop(&mut self) {
        SOURCE_CONTEXT.with(|ctx| *ctx.borrow_mut() = self.previous.take());
    }
}
