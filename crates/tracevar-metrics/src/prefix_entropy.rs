//! Prefix-block entropy metric
//!
//! Each distinct proper prefix `p` occurring in the log gets the likelihood
//!
//! ```text
//! likelihood(p) = #variants starting with p / sum of variant lengths
//! ```
//!
//! The numerator counts unique traces, not cases, and the denominator counts
//! events across unique traces. The entropy is `-Σ p·log(p)` over all
//! distinct prefixes with non-zero likelihood.
//!
//! The ratio is not a probability distribution. When the empty trace is
//! itself a variant, the empty prefix can get a likelihood above 1 and the
//! entropy turns negative: `[[], [a]]` gives `-2·log10(2)`.

use std::collections::HashMap;

use tracevar_core::{DegenerateReason, Event, EventLog, MetricError, MetricResult};
use tracing::{debug, info_span};

/// Name used in errors and logs
pub const PREFIX_ENTROPY: &str = "prefix entropy";

#[derive(Debug, Default, Clone, Copy)]
struct PrefixCount {
    /// Proper prefix of at least one variant
    proper: bool,
    /// Variants whose sequence starts with the prefix
    containing: u64,
}

/// Distinct proper prefixes of the log, each with the number of variants
/// starting with it, in first-seen order
pub fn prefix_counts(log: &EventLog) -> Vec<(&[Event], u64)> {
    let mut order: Vec<&[Event]> = Vec::new();
    let mut counts: HashMap<&[Event], PrefixCount> = HashMap::new();

    for trace in log.traces() {
        let events = trace.events();
        // A variant starts with its full sequence too, which matters when
        // that sequence is a proper prefix of another variant.
        for end in 0..=events.len() {
            let prefix = &events[..end];
            let entry = counts.entry(prefix).or_default();
            entry.containing += 1;
            if end < events.len() && !entry.proper {
                entry.proper = true;
                order.push(prefix);
            }
        }
    }

    order
        .into_iter()
        .map(|prefix| (prefix, counts[prefix].containing))
        .collect()
}

/// Base-10 prefix entropy of the log
///
/// Fails with [`MetricError::DegenerateInput`] when the log holds no events.
/// Usually non-negative, but negative when the empty trace is a variant of a
/// log with few events (see the module docs).
pub fn compute_prefix_entropy(log: &EventLog) -> MetricResult<f64> {
    compute_prefix_entropy_with_base(log, 10.0)
}

/// Check that `base` is a usable logarithm base: finite and greater than 1
pub fn is_valid_log_base(base: f64) -> bool {
    base.is_finite() && base > 1.0
}

/// Prefix entropy with an explicit logarithm base
///
/// Fails with [`MetricError::InvalidParameter`] unless `base` is finite and
/// greater than 1.
pub fn compute_prefix_entropy_with_base(log: &EventLog, base: f64) -> MetricResult<f64> {
    let span = info_span!("prefix_entropy", variants = log.variant_count(), base);
    let _enter = span.enter();

    if !is_valid_log_base(base) {
        return Err(MetricError::InvalidParameter {
            metric: PREFIX_ENTROPY,
            parameter: "log base",
            reason: format!("must be a finite number greater than 1, got {}", base),
        });
    }

    let denominator = log.total_events();
    if denominator == 0 {
        return Err(MetricError::degenerate(
            PREFIX_ENTROPY,
            DegenerateReason::NoEvents,
        ));
    }

    let prefixes = prefix_counts(log);
    debug!(prefixes = prefixes.len(), denominator, "Prefixes enumerated");

    let entropy: f64 = prefixes
        .iter()
        .map(|&(_, containing)| containing as f64 / denominator as f64)
        .filter(|&p| p > 0.0)
        .map(|p| p * p.log(base))
        .sum();

    // avoid reporting -0 when every likelihood is 1
    Ok(if entropy == 0.0 { 0.0 } else { -entropy })
}
