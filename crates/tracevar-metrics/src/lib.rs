//! # Tracevar Metrics
//!
//! Trace-variability metrics over a sealed [`EventLog`](tracevar_core::EventLog).
//!
//! ## Metrics
//!
//! - **Variant count** ([`compute_variant_variability`]): number of unique traces
//! - **Edit distance** ([`compute_edit_distance_variability`]): frequency-weighted
//!   average Levenshtein distance from the first stored trace to every other
//!   trace, or over all pairs with [`PairingStrategy::AllPairs`]
//! - **Prefix entropy** ([`compute_prefix_entropy`]): entropy of the prefix
//!   likelihoods across all distinct proper prefixes
//!
//! Degenerate logs (fewer than two variants, no events) produce
//! [`MetricError::DegenerateInput`](tracevar_core::MetricError) instead of a
//! division fault. [`VariabilityAnalyzer`] turns those into
//! [`MetricValue::Undefined`] entries of a [`VariabilityReport`].
//!
//! ## Example
//!
//! ```rust
//! use tracevar_core::EventLog;
//! use tracevar_metrics::{compute_edit_distance_variability, compute_variant_variability};
//!
//! let log = EventLog::load(vec![vec!["a"], vec!["a", "b"], vec!["a", "b", "c"]]);
//! assert_eq!(compute_variant_variability(&log), 3);
//! assert_eq!(compute_edit_distance_variability(&log).unwrap(), 1.5);
//! ```

pub mod config;
pub mod edit_distance;
pub mod levenshtein;
pub mod prefix_entropy;
pub mod report;
pub mod variant;

// Re-export main types
pub use config::{MetricsConfig, PairingStrategy};
pub use edit_distance::{compute_edit_distance_variability, compute_edit_distance_variability_with};
pub use levenshtein::{levenshtein, trace_distance};
pub use prefix_entropy::{
    compute_prefix_entropy, compute_prefix_entropy_with_base, is_valid_log_base, prefix_counts,
};
pub use report::{MetricValue, VariabilityAnalyzer, VariabilityReport};
pub use variant::{compute_variant_variability, variant_percentage};
