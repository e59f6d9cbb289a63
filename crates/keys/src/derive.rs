//! EIP-2333 key derivation over `blst`

use core::fmt;

use blscheck_api::{CompressedPublicKey, DerivationError, DerivationResult};
use blscheck_params::MIN_SEED_LENGTH;
use blst::min_pk::SecretKey;

use crate::path::DerivationPath;

/// A BLS12-381 private key. The inner `blst` scalar is zeroized on drop.
pub struct PrivateKey(SecretKey);

impl PrivateKey {
    /// Master key for `seed`.
    pub fn from_seed(seed: &[u8]) -> DerivationResult<Self> {
        if seed.len() < MIN_SEED_LENGTH {
            return Err(DerivationError::SeedTooShort {
                min: MIN_SEED_LENGTH,
                actual: seed.len(),
            });
        }
        SecretKey::derive_master_eip2333(seed)
            .map(Self)
            .map_err(DerivationError::from)
    }

    pub fn derive_child(&self, index: u32) -> Self {
        Self(self.0.derive_child_eip2333(index))
    }

    /// Walk `path` from the master key of `seed`.
    pub fn from_seed_and_path(seed: &[u8], path: &DerivationPath) -> DerivationResult<Self> {
        let mut key = Self::from_seed(seed)?;
        for &index in path.indices() {
            key = key.derive_child(index);
        }
        Ok(key)
    }

    pub fn public_key(&self) -> CompressedPublicKey {
        CompressedPublicKey::new(self.0.sk_to_pk().compress())
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

/// Parse `path`, derive the key below `seed` and return its compressed public key.
///
/// The private key never leaves this function.
pub fn derive_public_key(seed: &[u8], path: &str) -> DerivationResult<CompressedPublicKey> {
    let path: DerivationPath = path.parse()?;
    let key = PrivateKey::from_seed_and_path(seed, &path)?;
    Ok(key.public_key())
}
