//! Variability metric benchmarks
//!
//! Benchmarks for the hot paths:
//! - Log loading and trace deduplication
//! - Levenshtein distance between traces
//! - Edit-distance metric (anchor and all-pairs)
//! - Prefix entropy
//!
//! Run with: cargo bench -p tracevar-metrics

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tracevar_core::EventLog;
use tracevar_metrics::{
    PairingStrategy, compute_edit_distance_variability, compute_edit_distance_variability_with,
    compute_prefix_entropy, trace_distance,
};

// ============================================================================
// Synthetic logs
// ============================================================================

const ACTIVITIES: &[&str] = &[
    "register request",
    "examine casually",
    "examine thoroughly",
    "check ticket",
    "decide",
    "reinitiate request",
    "pay compensation",
    "reject request",
];

/// Cases drawn from a fixed skeleton with random detours, so the log has
/// many repeated variants and a long tail of rare ones
fn synthetic_cases(cases: usize, seed: u64) -> Vec<Vec<&'static str>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..cases)
        .map(|_| {
            let mut case = vec![ACTIVITIES[0]];
            let loops = rng.random_range(0..3);
            for _ in 0..=loops {
                case.push(ACTIVITIES[rng.random_range(1..3)]);
                case.push(ACTIVITIES[3]);
                case.push(ACTIVITIES[4]);
            }
            if rng.random_bool(0.1) {
                case.push(ACTIVITIES[5]);
            }
            case.push(ACTIVITIES[rng.random_range(6..8)]);
            case
        })
        .collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");
    for size in [1_000usize, 10_000] {
        let cases = synthetic_cases(size, 7);
        group.bench_with_input(BenchmarkId::from_parameter(size), &cases, |b, cases| {
            b.iter(|| EventLog::load(black_box(cases)))
        });
    }
    group.finish();
}

fn bench_trace_distance(c: &mut Criterion) {
    let log = EventLog::load(synthetic_cases(2_000, 11));
    let traces = log.traces();
    let longest = traces.iter().max_by_key(|t| t.len()).unwrap_or(&traces[0]);
    let shortest = traces.iter().min_by_key(|t| t.len()).unwrap_or(&traces[0]);

    c.bench_function("trace_distance_longest_vs_shortest", |b| {
        b.iter(|| trace_distance(black_box(longest), black_box(shortest)))
    });
}

fn bench_edit_distance(c: &mut Criterion) {
    let log = EventLog::load(synthetic_cases(10_000, 13));

    c.bench_function("edit_distance_anchor", |b| {
        b.iter(|| compute_edit_distance_variability(black_box(&log)))
    });

    c.bench_function("edit_distance_all_pairs", |b| {
        b.iter(|| {
            compute_edit_distance_variability_with(black_box(&log), PairingStrategy::AllPairs)
        })
    });
}

fn bench_prefix_entropy(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefix_entropy");
    for size in [1_000usize, 10_000] {
        let log = EventLog::load(synthetic_cases(size, 17));
        group.bench_with_input(BenchmarkId::from_parameter(size), &log, |b, log| {
            b.iter(|| compute_prefix_entropy(black_box(log)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_load,
    bench_trace_distance,
    bench_edit_distance,
    bench_prefix_entropy
);
criterion_main!(benches);
