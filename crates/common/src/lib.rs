//! Shared functionality for the blscheck workspace
//!
//! Holds the zeroizing containers used for key material that passes between
//! the derivation crate and the self-test runner.

pub mod security;

pub use security::{SecretBuffer, Seed};
