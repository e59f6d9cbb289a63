//! Constant values for the blscheck self-test
//!
//! Everything here is compiled in. The crate has no dependencies and no
//! failure modes.

pub mod bls;
pub mod fixture;

pub use bls::*;
pub use fixture::*;
