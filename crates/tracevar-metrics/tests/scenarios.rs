//! End-to-end metric scenarios over small hand-written logs

use tracevar_core::{DegenerateReason, EventLog};
use tracevar_metrics::{
    MetricsConfig, PairingStrategy, VariabilityAnalyzer, compute_edit_distance_variability,
    compute_edit_distance_variability_with, compute_prefix_entropy, compute_variant_variability,
    prefix_counts, trace_distance,
};

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_two_identical_cases() {
    let log = EventLog::load(vec![vec!["x", "y"], vec!["x", "y"]]);

    assert_eq!(log.variant_count(), 1);
    assert_eq!(log.traces()[0].frequency(), 2);
    assert_eq!(log.size(), 2);
    assert_eq!(compute_variant_variability(&log), 1);

    let err = compute_edit_distance_variability(&log).unwrap_err();
    assert_eq!(err.reason(), Some(DegenerateReason::NoComparablePairs));

    assert_eq!(prefix_counts(&log).len(), 2);
    let entropy = compute_prefix_entropy(&log).unwrap();
    assert!((entropy - 0.301).abs() < 1e-3);
}

#[test]
fn test_growing_sequences() {
    let log = EventLog::load(vec![vec!["a"], vec!["a", "b"], vec!["a", "b", "c"]]);

    assert_eq!(compute_variant_variability(&log), 3);

    let traces = log.traces();
    assert_eq!(trace_distance(&traces[0], &traces[1]), 1);
    assert_eq!(trace_distance(&traces[0], &traces[2]), 2);
    assert_eq!(compute_edit_distance_variability(&log).unwrap(), 1.5);
}

#[test]
fn test_anchor_depends_on_first_seen_order() {
    let forward = EventLog::load(vec![vec!["a"], vec!["a", "b"], vec!["a", "b", "c"]]);
    let reversed = EventLog::load(vec![vec!["a", "b", "c"], vec!["a", "b"], vec!["a"]]);

    // anchor [a,b,c]: distances 1 and 2 again
    assert_eq!(compute_edit_distance_variability(&reversed).unwrap(), 1.5);

    let middle_first = EventLog::load(vec![vec!["a", "b"], vec!["a"], vec!["a", "b", "c"]]);
    assert_eq!(compute_edit_distance_variability(&middle_first).unwrap(), 1.0);

    // all-pairs does not depend on order
    let all_forward =
        compute_edit_distance_variability_with(&forward, PairingStrategy::AllPairs).unwrap();
    let all_middle =
        compute_edit_distance_variability_with(&middle_first, PairingStrategy::AllPairs).unwrap();
    assert!((all_forward - all_middle).abs() < 1e-12);
    assert!((all_forward - 4.0 / 3.0).abs() < 1e-12);
}

// ============================================================================
// Properties
// ============================================================================

fn assorted_logs() -> Vec<EventLog> {
    vec![
        EventLog::load(vec![vec!["a", "b"], vec!["a", "c"], vec!["b", "a", "c"]]),
        EventLog::load(vec![vec!["x"]; 10]),
        EventLog::load(vec![
            vec!["register", "check", "approve"],
            vec!["register", "check", "reject"],
            vec!["register", "approve"],
            vec!["register", "check", "check", "approve"],
            vec!["register", "check", "approve"],
        ]),
    ]
}

// none of these logs has the empty trace as a variant
#[test]
fn test_prefix_entropy_non_negative_without_empty_trace() {
    for log in assorted_logs() {
        let entropy = compute_prefix_entropy(&log).unwrap();
        assert!(entropy >= 0.0, "entropy {} < 0", entropy);
    }
}

#[test]
fn test_empty_trace_variant_can_go_negative() {
    let log = EventLog::load(vec![vec![], vec!["a"]]);
    let entropy = compute_prefix_entropy(&log).unwrap();
    assert!((entropy + 2.0 * 2f64.log10()).abs() < 1e-12);
}

#[test]
fn test_zero_entropy_only_for_single_prefix() {
    for log in assorted_logs() {
        let entropy = compute_prefix_entropy(&log).unwrap();
        let prefixes = prefix_counts(&log).len();
        if prefixes > 1 {
            assert!(entropy > 0.0);
        } else {
            assert_eq!(entropy, 0.0);
        }
    }
}

#[test]
fn test_trace_distance_symmetric_and_zero_on_self() {
    for log in assorted_logs() {
        let traces = log.traces();
        for a in traces {
            assert_eq!(trace_distance(a, a), 0);
            for b in traces {
                assert_eq!(trace_distance(a, b), trace_distance(b, a));
                for c in traces {
                    assert!(trace_distance(a, c) <= trace_distance(a, b) + trace_distance(b, c));
                }
            }
        }
    }
}

#[test]
fn test_analyzer_honours_config() {
    let log = EventLog::load(vec![vec!["a"], vec!["b", "c"], vec!["x", "y", "z"]]);
    let config = MetricsConfig::default()
        .with_pairing(PairingStrategy::AllPairs)
        .with_log_base(2.0);
    let report = VariabilityAnalyzer::new(config).unwrap().analyze(&log);

    assert_eq!(report.pairing, PairingStrategy::AllPairs);
    let edit = report.edit_distance.value().unwrap();
    assert!((edit - 8.0 / 3.0).abs() < 1e-12);
    assert!(report.prefix_entropy.is_defined());
}
