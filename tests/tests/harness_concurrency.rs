// tests/harness_concurrency.rs
//! Aggregation across concurrent runs.

use std::sync::Arc;
use std::thread;

use blscheck_api::Error;
use blscheck_params::{ACCOUNT_COUNT, DEFAULT_RUNS};
use blscheck_selftest::{BlstEngine, ErrorCollection, Fixture, Harness, HarnessConfig};
use blscheck_tests::engines::{ScriptedEngine, StaggeredEngine};

#[test]
fn test_no_record_lost_under_stress() {
    let engine = StaggeredEngine::new();
    let harness = Harness::new(&engine, HarnessConfig::default().with_runs(50));
    let report = harness.run(&Fixture::reference());

    assert_eq!(report.runs.len(), 50);
    assert_eq!(report.errors.len(), report.reported_error_count());

    // ordinals 0..50 modulo 11 assign 0..=10 faulty accounts per run
    let expected: usize = (0..50).map(|k| k % (ACCOUNT_COUNT + 1)).sum();
    assert_eq!(report.errors.len(), expected);
    assert!(report
        .errors
        .iter()
        .all(|e| matches!(e, Error::Mismatch { .. })));
}

#[test]
fn test_every_run_reports_the_same_fault() {
    let engine = ScriptedEngine::new().corrupting(4);
    let report = Harness::new(&engine, HarnessConfig::default()).run(&Fixture::reference());

    assert_eq!(report.runs.len(), DEFAULT_RUNS);
    assert_eq!(report.failed_runs(), DEFAULT_RUNS);
    assert_eq!(report.errors.len(), DEFAULT_RUNS);
    assert!(report.errors.iter().all(|e| e.account_index() == Some(4)));
    assert_eq!(engine.derive_calls(), DEFAULT_RUNS * ACCOUNT_COUNT);
}

#[test]
fn test_real_engine_passes_concurrently() {
    let report = Harness::new(&BlstEngine, HarnessConfig::default()).run(&Fixture::reference());
    assert!(report.passed(), "unexpected errors: {:?}", report.errors);
    assert_eq!(report.failed_runs(), 0);
}

#[test]
fn test_error_collection_concurrent_appends() {
    let collection = Arc::new(ErrorCollection::new());
    let handles: Vec<_> = (0..16)
        .map(|i| {
            let collection = Arc::clone(&collection);
            thread::spawn(move || {
                for _ in 0..100 {
                    collection.append(vec![Error::InvalidMnemonic; i % 3]);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let expected: usize = (0..16).map(|i| 100 * (i % 3)).sum();
    assert_eq!(collection.len(), expected);
}
