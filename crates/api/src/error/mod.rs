//! Error handling for the self-test

pub mod types;

pub use types::{DerivationError, DerivationResult, Error, Result};
