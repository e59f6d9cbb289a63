//! Data model for the self-test: the fixture, per-run summaries and the
//! shared error collection.

use std::fmt;
use std::process::ExitCode;
use std::sync::{Mutex, PoisonError};

use blscheck_api::Error;
use blscheck_params::{ACCOUNT_COUNT, EXPECTED_PUBKEYS, MNEMONIC};

/// ----------------------------------------------------------------
/// 1. Fixture
/// ----------------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    mnemonic: String,
    expected_pubkeys: [String; ACCOUNT_COUNT],
}

impl Fixture {
    /// The compiled-in fixture every production run checks against.
    pub fn reference() -> Self {
        Self {
            mnemonic: MNEMONIC.to_string(),
            expected_pubkeys: EXPECTED_PUBKEYS.map(String::from),
        }
    }

    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    /// Expected `0x` hex public keys, indexed by account
    pub fn expected_pubkeys(&self) -> &[String; ACCOUNT_COUNT] {
        &self.expected_pubkeys
    }

    pub fn with_mnemonic(mut self, mnemonic: impl Into<String>) -> Self {
        self.mnemonic = mnemonic.into();
        self
    }

    /// Replace one expected entry.
    ///
    /// # Panics
    ///
    /// Panics if `account >= ACCOUNT_COUNT`.
    pub fn with_expected_pubkey(mut self, account: usize, pubkey: impl Into<String>) -> Self {
        self.expected_pubkeys[account] = pubkey.into();
        self
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::reference()
    }
}

/// ----------------------------------------------------------------
/// 2. Per-run summary
/// ----------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Ordinal of the run within one harness execution
    pub run: usize,
    /// Number of records this run produced
    pub errors: usize,
}

/// ----------------------------------------------------------------
/// 3. Shared error collection
/// ----------------------------------------------------------------

/// Append-only list shared by concurrent runs.
///
/// The lock is held only while records are moved in; callers do all of
/// their derivation work before calling [`ErrorCollection::append`].
#[derive(Debug, Default)]
pub struct ErrorCollection {
    records: Mutex<Vec<Error>>,
}

impl ErrorCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, records: Vec<Error>) {
        if records.is_empty() {
            return;
        }
        // A poisoned lock only means another run panicked mid-append; the
        // panic itself is re-raised at the join, so keep the records.
        let mut guard = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        guard.extend(records);
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_records(self) -> Vec<Error> {
        self.records
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// ----------------------------------------------------------------
/// 4. Outcome
/// ----------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Passed => f.write_str("passed"),
            Verdict::Failed => f.write_str("failed"),
        }
    }
}

/// Everything one harness execution produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessReport {
    /// All records from all runs, in collection order
    pub errors: Vec<Error>,
    /// One entry per run, ordered by run ordinal
    pub runs: Vec<RunSummary>,
}

impl HarnessReport {
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn verdict(&self) -> Verdict {
        if self.passed() {
            Verdict::Passed
        } else {
            Verdict::Failed
        }
    }

    /// Sum of the per-run counts. Equals `errors.len()` when no append was lost.
    pub fn reported_error_count(&self) -> usize {
        self.runs.iter().map(|r| r.errors).sum()
    }

    pub fn failed_runs(&self) -> usize {
        self.runs.iter().filter(|r| r.errors > 0).count()
    }
}

/// ----------------------------------------------------------------
/// 5. Process outcome
/// ----------------------------------------------------------------

/// How the binary ends: with a verdict, or aborted before any run started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed,
    Aborted,
}

impl Outcome {
    /// Process exit status: 0 only when the self-test passed.
    pub fn status(self) -> u8 {
        match self {
            Outcome::Passed => 0,
            Outcome::Failed | Outcome::Aborted => 1,
        }
    }

    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self.status())
    }
}

impl From<Verdict> for Outcome {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Passed => Outcome::Passed,
            Verdict::Failed => Outcome::Failed,
        }
    }
}
