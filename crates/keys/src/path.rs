//! EIP-2334 derivation paths
//!
//! A path is `m` followed by `/`-separated decimal child indices. Parsing
//! follows the rules of the Go and Python validator tooling so the error
//! text printed for a malformed path is the one operators already know.

use core::fmt;
use core::str::FromStr;

use blscheck_api::DerivationError;
use blscheck_params::{COIN_TYPE, MASTER_COMPONENT, PURPOSE};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DerivationPath {
    indices: Vec<u32>,
}

impl DerivationPath {
    pub fn new(indices: Vec<u32>) -> Self {
        Self { indices }
    }

    /// Signing key path for a validator account: `m/12381/3600/{account}/0/0`
    pub fn validator(account: u32) -> Self {
        Self::new(vec![PURPOSE, COIN_TYPE, account, 0, 0])
    }

    /// Child indices below the master key, in derivation order
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn is_master(&self) -> bool {
        self.indices.is_empty()
    }
}

impl FromStr for DerivationPath {
    type Err = DerivationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DerivationError::EmptyPath);
        }

        let mut indices = Vec::new();
        for (position, component) in s.split('/').enumerate() {
            if component.is_empty() {
                return Err(DerivationError::EmptyComponent(position));
            }
            if component == MASTER_COMPONENT {
                if position != 0 {
                    return Err(DerivationError::MisplacedMaster(position));
                }
                continue;
            }
            if position == 0 {
                return Err(DerivationError::MissingMaster(position));
            }
            let index = component
                .parse::<u32>()
                .map_err(|_| DerivationError::InvalidIndex {
                    value: component.to_string(),
                    position,
                })?;
            indices.push(index);
        }

        Ok(Self { indices })
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MASTER_COMPONENT)?;
        for index in &self.indices {
            write!(f, "/{}", index)?;
        }
        Ok(())
    }
}
