//! Runs the known-answer check many times at once.
//!
//! Faulty cores have been seen to miscompute only on some scheduling
//! assignments, so a single pass can land on a healthy core and miss the
//! fault. Running concurrently also exercises the curve library from several
//! threads at the same time.

use std::panic;
use std::thread;

use blscheck_params::DEFAULT_RUNS;
use tracing::{debug, info};

use crate::engine::BlsEngine;
use crate::model::{ErrorCollection, Fixture, HarnessReport, RunSummary};
use crate::runner::Runner;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Number of concurrent runs. Never below one.
    pub runs: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self { runs: DEFAULT_RUNS }
    }
}

impl HarnessConfig {
    /// Set the run count; zero is raised to one so a verdict always rests on a run.
    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs.max(1);
        self
    }
}

pub struct Harness<'e, E: BlsEngine> {
    runner: Runner<'e, E>,
    config: HarnessConfig,
}

impl<'e, E: BlsEngine> Harness<'e, E> {
    pub fn new(engine: &'e E, config: HarnessConfig) -> Self {
        Self {
            runner: Runner::new(engine),
            config,
        }
    }

    /// Fan out `config.runs` runs on scoped threads and wait for all of them.
    ///
    /// A panic in any run is re-raised here after the others have finished.
    pub fn run(&self, fixture: &Fixture) -> HarnessReport {
        let runs = self.config.runs.max(1);
        let collection = ErrorCollection::new();

        let summaries: Vec<RunSummary> = thread::scope(|scope| {
            let handles: Vec<_> = (0..runs)
                .map(|run| {
                    let runner = &self.runner;
                    let collection = &collection;
                    scope.spawn(move || {
                        let errors = runner.run_once(fixture);
                        let summary = RunSummary {
                            run,
                            errors: errors.len(),
                        };
                        debug!(run, errors = summary.errors, "run finished");
                        collection.append(errors);
                        summary
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| match handle.join() {
                    Ok(summary) => summary,
                    Err(payload) => panic::resume_unwind(payload),
                })
                .collect()
        });

        let report = HarnessReport {
            errors: collection.into_records(),
            runs: summaries,
        };
        info!(
            runs,
            failed_runs = report.failed_runs(),
            errors = report.errors.len(),
            verdict = %report.verdict(),
            "self-test finished"
        );
        report
    }
}
