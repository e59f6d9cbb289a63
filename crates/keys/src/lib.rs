//! Key derivation for the blscheck self-test
//!
//! Thin layer over the collaborators that do the real work:
//!
//! - [`mnemonic`]: BIP-39 validation and mnemonic-to-seed via `bip39`
//! - [`path`]: EIP-2334 path strings such as `m/12381/3600/0/0/0`
//! - [`derive`]: EIP-2333 tree derivation and public keys via `blst`
//!
//! Keys use the `min_pk` profile of BLS12-381: public keys live in G1 and
//! compress to 48 bytes, which is the Ethereum consensus layout.

pub mod derive;
pub mod mnemonic;
pub mod path;

pub use derive::{derive_public_key, PrivateKey};
pub use mnemonic::{parse_mnemonic, seed_from_phrase};
pub use path::DerivationPath;
