//! Edit-distance variability metric
//!
//! Every compared pair of distinct variants contributes its Levenshtein
//! distance weighted by the product of both frequencies, i.e. by the number
//! of case pairs the variant pair stands for. The weighted sum is divided by
//! the number of variant pairs compared, not by the weighted count.

use tracevar_core::{DegenerateReason, EventLog, MetricError, MetricResult, Trace};
use tracing::{debug, info_span};

use crate::config::PairingStrategy;
use crate::levenshtein::trace_distance;

/// Name used in errors and logs
pub const EDIT_DISTANCE: &str = "edit distance";

/// Running weighted-distance sum
#[derive(Debug, Default)]
struct Accumulator {
    weighted_sum: u128,
    comparisons: u64,
}

impl Accumulator {
    fn compare(&mut self, t1: &Trace, t2: &Trace) {
        if t1 == t2 {
            return;
        }
        let distance = trace_distance(t1, t2) as u128;
        self.weighted_sum += distance * t1.frequency() as u128 * t2.frequency() as u128;
        self.comparisons += 1;
    }

    fn log_summary(&self) {
        debug!(
            comparisons = self.comparisons,
            weighted_sum = %self.weighted_sum,
            "Edit distance comparisons done"
        );
    }

    fn average(&self) -> MetricResult<f64> {
        if self.comparisons == 0 {
            return Err(MetricError::degenerate(
                EDIT_DISTANCE,
                DegenerateReason::NoComparablePairs,
            ));
        }
        Ok(self.weighted_sum as f64 / self.comparisons as f64)
    }
}

/// Average weighted edit distance from the first stored trace to all others
///
/// Fails with [`MetricError::DegenerateInput`] when the log has fewer than
/// two variants.
pub fn compute_edit_distance_variability(log: &EventLog) -> MetricResult<f64> {
    compute_edit_distance_variability_with(log, PairingStrategy::Anchor)
}

/// Edit-distance variability with an explicit pairing strategy
pub fn compute_edit_distance_variability_with(
    log: &EventLog,
    pairing: PairingStrategy,
) -> MetricResult<f64> {
    let span = info_span!("edit_distance", ?pairing, variants = log.variant_count());
    let _enter = span.enter();

    let traces = log.traces();
    let mut acc = Accumulator::default();

    match pairing {
        PairingStrategy::Anchor => {
            if let Some((anchor, rest)) = traces.split_first() {
                for other in rest {
                    acc.compare(anchor, other);
                }
            }
        }
        PairingStrategy::AllPairs => {
            for (i, t1) in traces.iter().enumerate() {
                for t2 in &traces[i + 1..] {
                    acc.compare(t1, t2);
                }
            }
        }
    }

    acc.log_summary();
    acc.average()
}
