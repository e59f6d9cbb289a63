//! The seam between the runner and the curve library.

use blscheck_api::{CompressedPublicKey, DerivationResult, Result};
use blscheck_common::Seed;
use blscheck_keys::{derive_public_key, seed_from_phrase};

/// Trait every BLS back-end must implement.
///
/// Implementations are shared by all concurrent runs, hence `Sync`.
pub trait BlsEngine: Sync {
    /// Validate `phrase` and derive its seed with the empty passphrase.
    fn seed_from_phrase(&self, phrase: &str) -> Result<Seed>;

    /// Derive the key at `path` below `seed` and return its compressed public key.
    fn derive_public_key(&self, seed: &Seed, path: &str) -> DerivationResult<CompressedPublicKey>;
}

/// Production engine: `bip39` for the mnemonic, `blst` for the curve.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlstEngine;

impl BlsEngine for BlstEngine {
    fn seed_from_phrase(&self, phrase: &str) -> Result<Seed> {
        seed_from_phrase(phrase)
    }

    fn derive_public_key(&self, seed: &Seed, path: &str) -> DerivationResult<CompressedPublicKey> {
        derive_public_key(seed.as_slice(), path)
    }
}
