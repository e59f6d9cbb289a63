//! Error type definitions for the self-test

use blst::BLST_ERROR;
use thiserror::Error;

/// Failure while turning a seed and a derivation path into a private key.
///
/// Messages mirror the wording validator tooling already prints for the
/// same conditions, so operators can grep for them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DerivationError {
    /// The path string was empty
    #[error("no path")]
    EmptyPath,

    /// A `/`-separated component was empty
    #[error("no entry at path component {0}")]
    EmptyComponent(usize),

    /// `m` appeared after the first component
    #[error("invalid master at path component {0}")]
    MisplacedMaster(usize),

    /// The first component was not `m`
    #[error("not master at path component {0}")]
    MissingMaster(usize),

    /// A child component was not a decimal `u32`
    #[error("invalid index {value:?} at path component {position}")]
    InvalidIndex { value: String, position: usize },

    /// The seed is shorter than the EIP-2333 input keying material minimum
    #[error("seed must be at least {min} bytes, got {actual}")]
    SeedTooShort { min: usize, actual: usize },

    /// `blst` rejected the input keying material
    #[error("key derivation failed: {0:?}")]
    Curve(BLST_ERROR),

    /// A non-`blst` engine could not produce a key
    #[error("key derivation failed: {0}")]
    Backend(String),
}

impl From<BLST_ERROR> for DerivationError {
    fn from(err: BLST_ERROR) -> Self {
        Self::Curve(err)
    }
}

/// Primary error type. Every non-fatal variant is one error record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("mnemonic is not valid")]
    InvalidMnemonic,

    #[error("failed generating validator key {index} ({path}): {source}")]
    Derivation {
        index: u32,
        path: String,
        #[source]
        source: DerivationError,
    },

    #[error("validator pubkey {index} mismatch: {computed} != {expected}")]
    Mismatch {
        index: u32,
        computed: String,
        expected: String,
    },

    /// Build metadata was not embedded at compile time
    #[error("failed to read build info")]
    BuildInfoUnavailable,

    #[error("malformed build info: {0}")]
    MalformedBuildInfo(String),
}

impl Error {
    /// Account index the error refers to, if any.
    pub fn account_index(&self) -> Option<u32> {
        match self {
            Self::Derivation { index, .. } | Self::Mismatch { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Result type for self-test operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type for key derivation
pub type DerivationResult<T> = core::result::Result<T, DerivationError>;
