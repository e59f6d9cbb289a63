//! Constants for BLS12-381 keys and EIP-2334 paths

/// Size of a compressed G1 public key in bytes
pub const PUBLIC_KEY_LENGTH: usize = 48;

/// Size of a BIP-39 seed in bytes
pub const SEED_LENGTH: usize = 64;

/// Minimum input keying material accepted by EIP-2333 master derivation
pub const MIN_SEED_LENGTH: usize = 32;

/// EIP-2334 purpose component
pub const PURPOSE: u32 = 12381;

/// EIP-2334 coin type for Ethereum
pub const COIN_TYPE: u32 = 3600;

/// Name of the master component at the root of every path
pub const MASTER_COMPONENT: &str = "m";

/// Passphrase used when turning the fixture mnemonic into a seed
pub const SEED_PASSPHRASE: &str = "";
