//! `blscheck`: print the BLS version and whether the known-answer self-test passed.
//!
//! Takes no arguments. Exits with status 0 when every run matched the
//! fixture and 1 otherwise, including when build metadata is missing.

use std::io;
use std::process::ExitCode;

use blscheck::selftest::{run, BlstEngine, BuildInfo, Fixture, HarnessConfig};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    // stdout carries the report; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let stdout = io::stdout();
    run(
        BuildInfo::read(),
        &BlstEngine,
        &HarnessConfig::default(),
        &Fixture::reference(),
        stdout.lock(),
    )
    .exit_code()
}
