//! Public error and value types for the blscheck workspace
//!
//! Every crate in the workspace reports failures through [`Error`] and
//! [`DerivationError`], so the harness can aggregate records from any stage
//! into one list.

pub mod error;
pub mod types;

pub use error::{DerivationError, DerivationResult, Error, Result};
pub use types::CompressedPublicKey;
