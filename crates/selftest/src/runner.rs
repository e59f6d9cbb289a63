//! Executes the known-answer check once.

use blscheck_api::Error;
use blscheck_keys::DerivationPath;
use tracing::{debug, trace};

use crate::engine::BlsEngine;
use crate::model::Fixture;

/// Walks every account of a fixture and collects what went wrong.
pub struct Runner<'e, E: BlsEngine> {
    engine: &'e E,
}

impl<'e, E: BlsEngine> Runner<'e, E> {
    pub fn new(engine: &'e E) -> Self {
        Self { engine }
    }

    /// Check all accounts once. An empty result means every key matched.
    ///
    /// A bad mnemonic ends the run with a single record. Derivation failures
    /// and mismatches are recorded per account and the walk continues, so one
    /// faulty index never hides the others.
    pub fn run_once(&self, fixture: &Fixture) -> Vec<Error> {
        let mut errors = Vec::new();

        let seed = match self.engine.seed_from_phrase(fixture.mnemonic()) {
            Ok(seed) => seed,
            Err(e) => {
                debug!(error = %e, "fixture mnemonic rejected");
                errors.push(e);
                return errors;
            }
        };

        for (account, expected) in (0u32..).zip(fixture.expected_pubkeys().iter()) {
            let path = DerivationPath::validator(account).to_string();

            let computed = match self.engine.derive_public_key(&seed, &path) {
                Ok(pubkey) => pubkey.to_hex(),
                Err(source) => {
                    debug!(account, %path, error = %source, "derivation failed");
                    errors.push(Error::Derivation {
                        index: account,
                        path,
                        source,
                    });
                    continue;
                }
            };

            if computed == *expected {
                trace!(account, "pubkey matches");
            } else {
                debug!(account, %computed, %expected, "pubkey mismatch");
                errors.push(Error::Mismatch {
                    index: account,
                    computed,
                    expected: expected.clone(),
                });
            }
        }

        errors
    }
}
