//! BIP-39 mnemonic handling

use bip39::{Language, Mnemonic};
use blscheck_api::{Error, Result};
use blscheck_common::Seed;
use blscheck_params::SEED_PASSPHRASE;
use tracing::debug;

/// Strip surrounding whitespace. Inner spacing is left to the parser.
pub fn normalize(phrase: &str) -> &str {
    phrase.trim()
}

/// Parse a phrase against the English word list and its checksum.
pub fn parse_mnemonic(phrase: &str) -> Result<Mnemonic> {
    Mnemonic::parse_in_normalized(Language::English, normalize(phrase)).map_err(|e| {
        debug!(error = %e, "mnemonic rejected");
        Error::InvalidMnemonic
    })
}

pub fn is_valid(phrase: &str) -> bool {
    parse_mnemonic(phrase).is_ok()
}

/// Seed for an already validated mnemonic.
pub fn seed_from_mnemonic(mnemonic: &Mnemonic, passphrase: &str) -> Seed {
    Seed::new(mnemonic.to_seed_normalized(passphrase))
}

/// Validate `phrase` and derive its seed with the empty passphrase.
pub fn seed_from_phrase(phrase: &str) -> Result<Seed> {
    let mnemonic = parse_mnemonic(phrase)?;
    Ok(seed_from_mnemonic(&mnemonic, SEED_PASSPHRASE))
}
