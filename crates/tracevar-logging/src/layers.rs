//! Span and formatting helpers for tracevar
//!
//! The source label reaches every log record through the fields of
//! [`source_span`]; JSONL records list their enclosing spans, so nothing
//! beyond the span itself is needed to attribute a record to its input.

use tracing::{Span, Subscriber, info_span};
use tracing_subscriber::{
    fmt::{
        self, MakeWriter,
        format::{Format, Json, JsonFields},
    },
    registry::LookupSpan,
};

use crate::config::JsonlConfig;
use crate::context::SourceContextGuard;

/// Open a span carrying the active source label and run id as fields
///
/// Returns a disabled span when no [`SourceContextGuard`] is active.
pub fn source_span() -> Span {
    match SourceContextGuard::current() {
        Some(ctx) => info_span!("source", source = %ctx.source, run_id = %ctx.run_id),
        None => Span::none(),
    }
}

/// Create a JSONL formatting layer writing to `writer`
pub fn jsonl_layer<S, W>(writer: W, config: &JsonlConfig) -> fmt::Layer<S, JsonFields, Format<Json>, W>
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
    W: for<'writer> MakeWriter<'writer> + 'static,
{
    fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(config.include_spans)
        .flatten_event(config.flatten_events)
        .with_file(config.include_location)
        .with_line_number(config.include_location)
        .with_thread_ids(config.include_thread_info)
        .with_thread_names(config.include_thread_info)
        .with_writer(writer)
}
