//! Properties of the build phase over larger synthetic logs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracevar_core::{EventCode, EventLog, LogBuilder};

/// Seeded random cases over a small alphabet
fn synthetic_cases(count: usize) -> Vec<Vec<String>> {
    let alphabet = ["register", "check", "approve", "reject", "notify", "archive"];
    let mut rng = StdRng::seed_from_u64(42);

    (0..count)
        .map(|_| {
            let len = rng.random_range(1..=5);
            (0..len)
                .map(|_| alphabet[rng.random_range(0..alphabet.len())].to_string())
                .collect()
        })
        .collect()
}

#[test]
fn test_size_equals_cases_ingested() {
    let cases = synthetic_cases(2_000);
    let log = EventLog::load(&cases);

    assert_eq!(log.size(), 2_000);
    let summed: u64 = log.traces().iter().map(|t| t.frequency()).sum();
    assert_eq!(summed, log.size());
}

#[test]
fn test_stored_traces_are_pairwise_distinct() {
    let log = EventLog::load(synthetic_cases(1_000));
    let traces = log.traces();

    for (i, a) in traces.iter().enumerate() {
        for b in &traces[i + 1..] {
            assert_ne!(a.events(), b.events());
        }
    }
}

#[test]
fn test_every_case_is_findable() {
    let cases = synthetic_cases(500);
    let log = EventLog::load(&cases);

    for case in &cases {
        let events: Vec<_> = case
            .iter()
            .map(|name| log.get_event(name).expect("name was registered"))
            .collect();
        assert!(log.get_trace(&events).is_some());
    }
}

#[test]
fn test_codes_are_stable_and_dense() {
    let mut builder = LogBuilder::new();
    builder.load(vec![vec!["b", "a"], vec!["c"]]);

    let before: Vec<_> = ["b", "a", "c"]
        .iter()
        .map(|n| builder.get_event(n).code())
        .collect();
    assert_eq!(before, vec![EventCode(0), EventCode(1), EventCode(2)]);

    builder.load(vec![vec!["d", "a", "b"]]);
    let log = builder.build();

    assert_eq!(log.get_event("b").unwrap().code(), EventCode(0));
    assert_eq!(log.get_event("a").unwrap().code(), EventCode(1));
    assert_eq!(log.get_event("c").unwrap().code(), EventCode(2));
    assert_eq!(log.get_event("d").unwrap().code(), EventCode(3));
}

#[test]
fn test_identical_cases_collapse() {
    let log = EventLog::load(vec![vec!["x", "y"], vec!["x", "y"]]);

    assert_eq!(log.variant_count(), 1);
    assert_eq!(log.traces()[0].frequency(), 2);
    assert_eq!(log.size(), 2);
}

#[test]
fn test_log_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EventLog>();
}
