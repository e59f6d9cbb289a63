// tests/runner_faults.rs
//! Failure paths of a single run.

use blscheck_api::Error;
use blscheck_params::{ACCOUNT_COUNT, EXPECTED_PUBKEYS, MNEMONIC};
use blscheck_selftest::{BlstEngine, Fixture, Runner};
use blscheck_tests::engines::ScriptedEngine;

/// Flip one hex digit of an expected key without leaving the hex alphabet.
fn flip_hex_char(pk: &str, position: usize) -> String {
    let mut chars: Vec<char> = pk.chars().collect();
    chars[position] = if chars[position] == '0' { '1' } else { '0' };
    chars.into_iter().collect()
}

#[test]
fn test_invalid_mnemonic_yields_one_record() {
    let fixture = Fixture::reference().with_mnemonic(MNEMONIC.replacen("mouse", "mouze", 1));
    let errors = Runner::new(&BlstEngine).run_once(&fixture);
    assert_eq!(errors, vec![Error::InvalidMnemonic]);
    assert_eq!(errors[0].to_string(), "mnemonic is not valid");
}

#[test]
fn test_invalid_mnemonic_skips_derivation() {
    let engine = ScriptedEngine::new().rejecting_mnemonic();
    let errors = Runner::new(&engine).run_once(&Fixture::reference());
    assert_eq!(errors.len(), 1);
    assert_eq!(engine.seed_calls(), 1);
    assert_eq!(engine.derive_calls(), 0);
}

#[test]
fn test_corrupted_expected_entry_is_the_only_mismatch() {
    let corrupted = flip_hex_char(EXPECTED_PUBKEYS[3], 10);
    let fixture = Fixture::reference().with_expected_pubkey(3, corrupted.clone());
    let errors = Runner::new(&BlstEngine).run_once(&fixture);

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0],
        Error::Mismatch {
            index: 3,
            computed: EXPECTED_PUBKEYS[3].to_string(),
            expected: corrupted,
        }
    );
}

#[test]
fn test_faults_are_collected_per_account_in_order() {
    let engine = ScriptedEngine::new()
        .failing(2)
        .corrupting(5)
        .corrupting(9);
    let errors = Runner::new(&engine).run_once(&Fixture::reference());

    assert_eq!(engine.derive_calls(), ACCOUNT_COUNT);
    let indices: Vec<_> = errors.iter().filter_map(Error::account_index).collect();
    assert_eq!(indices, vec![2, 5, 9]);
    assert!(matches!(errors[0], Error::Derivation { index: 2, .. }));
    assert_eq!(
        errors[0].to_string(),
        "failed generating validator key 2 (m/12381/3600/2/0/0): key derivation failed: scripted failure for 2"
    );
    assert!(errors[1].to_string().starts_with("validator pubkey 5 mismatch: 0x"));
}

#[test]
fn test_surrounding_whitespace_in_mnemonic_is_accepted() {
    let fixture = Fixture::reference().with_mnemonic(format!("\n  {}  \n", MNEMONIC));
    assert!(Runner::new(&BlstEngine).run_once(&fixture).is_empty());
}
