//! Error types for tracevar

use thiserror::Error;

/// Top-level error type for tracevar
#[derive(Debug, Error)]
pub enum TracevarError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Metric error: {0}")]
    Metric(#[from] MetricError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised by input adapters while turning a log file into cases
///
/// Malformed cases are rejected here, before anything reaches the
/// [`EventLog`](crate::EventLog).
#[derive(Debug, Error)]
pub enum InputError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Event {position} of case {case} has no event name")]
    MissingEventName { case: String, position: usize },

    #[error("Row at line {line} has no case id")]
    MissingCaseId { line: usize },

    #[error("Case {index} is malformed: {message}")]
    MalformedCase { index: usize, message: String },

    #[error("Invalid case document: {0}")]
    InvalidDocument(String),

    #[error("Unsupported log format: {0}")]
    UnsupportedFormat(String),
}

impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        InputError::Io(err.to_string())
    }
}

/// Why a metric has no defined value for a log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DegenerateReason {
    /// Fewer than two variants, so there is nothing to compare
    #[error("log has fewer than two variants")]
    NoComparablePairs,

    /// The log holds no events at all
    #[error("log contains no events")]
    NoEvents,
}

/// Errors raised by the variability metrics
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricError {
    #[error("{metric} is undefined: {reason}")]
    DegenerateInput {
        metric: &'static str,
        reason: DegenerateReason,
    },

    #[error("{metric}: invalid {parameter}: {reason}")]
    InvalidParameter {
        metric: &'static str,
        parameter: &'static str,
        reason: String,
    },
}

impl MetricError {
    /// Create a new DegenerateInput error
    pub fn degenerate(metric: &'static str, reason: DegenerateReason) -> Self {
        Self::DegenerateInput { metric, reason }
    }

    /// Why the input log is degenerate; `None` for parameter errors
    pub fn reason(&self) -> Option<DegenerateReason> {
        match self {
            Self::DegenerateInput { reason, .. } => Some(*reason),
            Self::InvalidParameter { .. } => None,
        }
    }
}

/// Errors related to configuration files and values
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error: {0}")]
    Io(String),

    #[error("Config parse error: {0}")]
    Parse(String),

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

/// Result type alias for tracevar operations
pub type TracevarResult<T> = Result<T, TracevarError>;

/// Result type alias for metric computations
pub type MetricResult<T> = Result<T, MetricError>;
