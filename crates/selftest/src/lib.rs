//! Concurrent known-answer self-test for the BLS12-381 binding
//!
//! Derives ten validator keys from a fixed mnemonic, compares their public
//! keys with compiled-in answers and reports the outcome. The check is run
//! several times concurrently because the failures it hunts for depend on
//! which core executes the arithmetic.
//!
//! - [`model`]: fixture, summaries, shared error collection
//! - [`engine`]: the [`BlsEngine`] seam and the `blst` implementation
//! - [`runner`]: one pass over all accounts
//! - [`harness`]: concurrent fan-out and aggregation
//! - [`report`]: the text printed on standard output
//! - [`build_info`]: dependency versions embedded at compile time

use std::io::{self, Write};

use blscheck_api::Result;
use tracing::error;

pub mod build_info;
pub mod engine;
pub mod harness;
pub mod model;
pub mod report;
pub mod runner;

pub use build_info::{BuildInfo, Dependency, BLS_DEPENDENCY};
pub use engine::{BlsEngine, BlstEngine};
pub use harness::{Harness, HarnessConfig};
pub use model::{ErrorCollection, Fixture, HarnessReport, Outcome, RunSummary, Verdict};
pub use report::Reporter;
pub use runner::Runner;

/// Print the banner, run the harness and print the verdict.
///
/// Output errors are returned; test failures are in the report.
pub fn self_test<E, W>(
    engine: &E,
    config: &HarnessConfig,
    fixture: &Fixture,
    bls_version: &str,
    out: W,
) -> io::Result<HarnessReport>
where
    E: BlsEngine,
    W: Write,
{
    let mut reporter = Reporter::new(out);
    reporter.banner(bls_version)?;
    let report = Harness::new(engine, config.clone()).run(fixture);
    reporter.verdict(&report)?;
    Ok(report)
}

/// Entry point of the binary.
///
/// Missing or malformed build metadata aborts before anything is printed
/// and before the engine is touched. Otherwise the outcome follows the
/// verdict; a report that cannot be written counts as a failure.
pub fn run<E, W>(
    build_info: Result<&BuildInfo>,
    engine: &E,
    config: &HarnessConfig,
    fixture: &Fixture,
    out: W,
) -> Outcome
where
    E: BlsEngine,
    W: Write,
{
    let build_info = match build_info {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to read build info");
            return Outcome::Aborted;
        }
    };

    match self_test(engine, config, fixture, build_info.bls_version(), out) {
        Ok(report) => report.verdict().into(),
        Err(e) => {
            error!(error = %e, "failed to write report");
            Outcome::Failed
        }
    }
}
