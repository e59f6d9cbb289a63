// tests/fixture_vectors.rs
//! Known answers through the real `bip39` + `blst` stack.

use blscheck_keys::{derive_public_key, mnemonic, DerivationPath};
use blscheck_params::{ACCOUNT_COUNT, EXPECTED_PUBKEYS, MNEMONIC};
use blscheck_selftest::{BlstEngine, Fixture, Runner};

#[test]
fn test_fixture_mnemonic_validates() {
    assert!(mnemonic::is_valid(MNEMONIC));
}

#[test]
fn test_every_account_matches_fixture() {
    let seed = blscheck_keys::seed_from_phrase(MNEMONIC).expect("fixture mnemonic is valid");
    for account in 0..ACCOUNT_COUNT {
        let path = DerivationPath::validator(account as u32).to_string();
        assert_eq!(path, format!("m/12381/3600/{}/0/0", account));

        let pk = derive_public_key(seed.as_slice(), &path).expect("derivation succeeds");
        assert_eq!(pk.to_hex(), EXPECTED_PUBKEYS[account], "account {}", account);
    }
}

#[test]
fn test_run_once_passes_with_reference_fixture() {
    let errors = Runner::new(&BlstEngine).run_once(&Fixture::reference());
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
}

#[test]
fn test_repeated_runs_are_identical() {
    let fixture = Fixture::reference().with_expected_pubkey(6, EXPECTED_PUBKEYS[7]);
    let runner = Runner::new(&BlstEngine);
    let first = runner.run_once(&fixture);
    let second = runner.run_once(&fixture);
    assert_eq!(first.len(), 1);
    assert_eq!(first, second);
}
