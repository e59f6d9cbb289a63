//! # blscheck
//!
//! Start-up self-test for the BLS12-381 binding used by validator software.
//!
//! Some CPU and compiler combinations have produced silently wrong results in
//! optimized pairing-curve arithmetic. `blscheck` derives ten EIP-2334
//! validator keys from a fixed mnemonic, compares their public keys with
//! known answers and prints `passed` or `failed`.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from the sub-crates:
//!
//! - [`blscheck-api`]: error and value types
//! - [`blscheck-params`]: compiled-in constants and fixture data
//! - [`blscheck-common`]: zeroizing containers for key material
//! - [`blscheck-keys`]: mnemonic, path and key derivation over `bip39` and `blst`
//! - [`blscheck-selftest`]: runner, concurrent harness and reporter

pub use blscheck_api as api;
pub use blscheck_common as common;
pub use blscheck_keys as keys;
pub use blscheck_params as params;
pub use blscheck_selftest as selftest;

/// Common imports for blscheck users
pub mod prelude {
    pub use crate::api::{CompressedPublicKey, DerivationError, Error, Result};
    pub use crate::keys::{DerivationPath, PrivateKey};
    pub use crate::selftest::{
        run, self_test, BlsEngine, BlstEngine, BuildInfo, Fixture, Harness, HarnessConfig,
        HarnessReport, Outcome, Verdict,
    };
}
