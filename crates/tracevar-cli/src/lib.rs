//! # Tracevar CLI
//!
//! Reads event logs from disk, loads them into an
//! [`EventLog`](tracevar_core::EventLog) and reports their variability.
//!
//! - [`input`]: JSON and JSONL adapters producing ordered cases
//! - [`config`]: TOML application configuration
//! - [`render`]: text output for reports

pub mod config;
pub mod input;
pub mod render;

use std::path::Path;

use tracevar_core::{EventLog, TracevarResult};
use tracevar_metrics::{VariabilityAnalyzer, VariabilityReport};
use tracing::{info, info_span};

pub use config::AppConfig;
pub use input::{LogFormat, RawCase, RawEvent, read_cases};
pub use render::{render_summary, render_text};

/// Load one log file into a sealed event log
pub fn load_file(path: &Path, format: Option<LogFormat>) -> TracevarResult<EventLog> {
    let cases = read_cases(path, format)?;
    let log = EventLog::load(&cases);
    info!(
        cases = log.size(),
        variants = log.variant_count(),
        event_types = log.symbols().len(),
        "Log loaded"
    );
    Ok(log)
}

/// Load and analyze one log file
pub fn process_file(
    path: &Path,
    format: Option<LogFormat>,
    analyzer: &VariabilityAnalyzer,
) -> TracevarResult<VariabilityReport> {
    let span = info_span!("process_file", path = %path.display());
    let _enter = span.enter();

    let log = load_file(path, format)?;
    Ok(analyzer
        .analyze(&log)
        .with_source(path.display().to_string()))
}
