//! Aggregate variability report for one log

use std::collections::BTreeMap;
use std::fmt::Display;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracevar_core::{ConfigError, EventLog, MetricResult};
use tracing::{Span, info, info_span, warn};

use crate::config::{MetricsConfig, PairingStrategy};
use crate::edit_distance::{EDIT_DISTANCE, compute_edit_distance_variability_with};
use crate::prefix_entropy::{PREFIX_ENTROPY, compute_prefix_entropy_with_base};
use crate::variant::{compute_variant_variability, variant_percentage};

/// A metric value, or the reason the metric is undefined for a log
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MetricValue {
    /// The metric has a value
    Defined { value: f64 },
    /// The log is degenerate for this metric
    Undefined { reason: String },
}

impl MetricValue {
    /// The value, if defined
    pub fn value(&self) -> Option<f64> {
        match self {
            MetricValue::Defined { value } => Some(*value),
            MetricValue::Undefined { .. } => None,
        }
    }

    /// Check if the metric is defined
    pub fn is_defined(&self) -> bool {
        matches!(self, MetricValue::Defined { .. })
    }
}

impl From<MetricResult<f64>> for MetricValue {
    fn from(result: MetricResult<f64>) -> Self {
        match result {
            Ok(value) => MetricValue::Defined { value },
            Err(err) => MetricValue::Undefined {
                reason: match err.reason() {
                    Some(reason) => reason.to_string(),
                    None => err.to_string(),
                },
            },
        }
    }
}

impl Display for MetricValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricValue::Defined { value } => match f.precision() {
                Some(precision) => write!(f, "{:.*}", precision, value),
                None => write!(f, "{}", value),
            },
            MetricValue::Undefined { reason } => write!(f, "undefined ({})", reason),
        }
    }
}

/// Everything reported for one processed log
#[derive(Debug, Clone, Serialize)]
pub struct VariabilityReport {
    /// Label of the input (usually the file path)
    pub source: Option<String>,
    /// When the report was produced
    pub generated_at: DateTime<Utc>,
    /// Total number of cases
    pub total_cases: u64,
    /// Number of distinct event names
    pub event_types: usize,
    /// Frequency value to the number of variants with that frequency
    pub frequency_histogram: BTreeMap<u64, usize>,
    /// Number of unique traces
    pub variant_count: usize,
    /// Variants as a percentage of cases
    pub variant_percentage: Option<f64>,
    /// Pairing used for the edit distance
    pub pairing: PairingStrategy,
    /// Weighted average edit distance
    pub edit_distance: MetricValue,
    /// Prefix-block entropy
    pub prefix_entropy: MetricValue,
    /// Wall-clock time spent on the metrics
    pub elapsed_ms: u64,
}

impl VariabilityReport {
    /// Attach a source label
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Runs all three metrics over a sealed log
#[derive(Debug, Clone, Default)]
pub struct VariabilityAnalyzer {
    config: MetricsConfig,
}

impl VariabilityAnalyzer {
    /// Create an analyzer, rejecting configurations that fail
    /// [`MetricsConfig::validate`]
    pub fn new(config: MetricsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The analyzer's configuration
    pub fn config(&self) -> &MetricsConfig {
        &self.config
    }

    /// Compute the full report for `log`
    pub fn analyze(&self, log: &EventLog) -> VariabilityReport {
        let span = info_span!("analyze", cases = log.size(), parallel = self.config.parallel);
        let _enter = span.enter();
        let start = Instant::now();

        let variant_count = compute_variant_variability(log);
        info!(variant_count, "Variants counted");

        let (edit_distance, prefix_entropy) = if self.config.parallel {
            self.run_parallel(log)
        } else {
            (
                compute_edit_distance_variability_with(log, self.config.pairing),
                compute_prefix_entropy_with_base(log, self.config.entropy_log_base),
            )
        };

        log_outcome(EDIT_DISTANCE, &edit_distance);
        log_outcome(PREFIX_ENTROPY, &prefix_entropy);

        VariabilityReport {
            source: None,
            generated_at: Utc::now(),
            total_cases: log.size(),
            event_types: log.symbols().len(),
            frequency_histogram: log.frequency_histogram(),
            variant_count,
            variant_percentage: variant_percentage(log),
            pairing: self.config.pairing,
            edit_distance: edit_distance.into(),
            prefix_entropy: prefix_entropy.into(),
            elapsed_ms: start.elapsed().as_millis() as u64,
        }
    }

    fn run_parallel(&self, log: &EventLog) -> (MetricResult<f64>, MetricResult<f64>) {
        let parent = Span::current();
        let pairing = self.config.pairing;
        let base = self.config.entropy_log_base;

        std::thread::scope(|scope| {
            let edit = scope.spawn(|| {
                parent.in_scope(|| compute_edit_distance_variability_with(log, pairing))
            });
            let entropy = compute_prefix_entropy_with_base(log, base);
            let edit = edit
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
            (edit, entropy)
        })
    }
}

fn log_outcome(metric: &str, outcome: &MetricResult<f64>) {
    match outcome {
        Ok(value) => info!(metric, value, "Metric computed"),
        Err(err) => warn!(metric, %err, "Metric undefined"),
    }
}
