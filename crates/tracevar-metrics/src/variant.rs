//! Variant-count metric

use tracevar_core::EventLog;

/// Number of unique traces in the log
pub fn compute_variant_variability(log: &EventLog) -> usize {
    log.variant_count()
}

/// Variants as a percentage of all cases; `None` for an empty log
pub fn variant_percentage(log: &EventLog) -> Option<f64> {
    match log.size() {
        0 => None,
        size => Some(log.variant_count() as f64 * 100.0 / size as f64),
    }
}
