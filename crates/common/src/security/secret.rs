//! Secret data types with guaranteed zeroization
//!
//! Seeds derived from the fixture mnemonic are wrapped here so they are
//! wiped when a run finishes, even though the fixture itself is public.

use core::fmt;

use blscheck_params::SEED_LENGTH;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Fixed-size secret buffer that guarantees zeroization
///
/// This type provides:
/// - Automatic zeroization on drop
/// - Type-safe size guarantees at compile time
/// - A `Debug` impl that never prints the contents
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBuffer<const N: usize> {
    data: [u8; N],
}

/// A BIP-39 seed
pub type Seed = SecretBuffer<SEED_LENGTH>;

impl<const N: usize> SecretBuffer<N> {
    /// Create a new secret buffer, taking ownership of the data
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> fmt::Debug for SecretBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBuffer<{}>([REDACTED])", N)
    }
}
