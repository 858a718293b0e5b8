use std::{
    collections::HashSet,
    process::{Command, Output},
};

use bip39::{Language, Mnemonic};

const TEST_MNEMONIC: &str = "test test test test test test test test test test test junk";

/// Run a binary from an empty directory so no `.env` file is picked up.
fn run_bin(bin: &str, mnemonic: Option<&str>) -> Output {
    let mut command = Command::new(bin);
    command
        .current_dir(std::env::temp_dir())
        .env_remove("PRINT_MNEMONIC")
        .env_remove("CARGO_LOG_LEVEL");
    if let Some(mnemonic) = mnemonic {
        command.env("PRINT_MNEMONIC", mnemonic);
    }
    command.output().unwrap()
}

#[test]
fn gen_mnemonic_prints_one_valid_phrase() {
    let mut phrases = HashSet::new();
    for _ in 0..5 {
        let output = run_bin(env!("CARGO_BIN_EXE_gen_mnemonic"), None);
        assert!(output.status.success());

        let stdout = String::from_utf8(output.stdout).unwrap();
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].split_whitespace().count(), 12);
        assert!(Mnemonic::validate(lines[0], Language::English).is_ok());
        phrases.insert(lines[0].to_string());
    }
    assert_eq!(phrases.len(), 5);
}

#[test]
fn print_keys_without_mnemonic_fails() {
    for mnemonic in [None, Some(""), Some("   ")] {
        let output = run_bin(env!("CARGO_BIN_EXE_print_keys"), mnemonic);
        assert_eq!(output.status.code(), Some(1));

        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(!stdout.contains("Address:"));
        assert!(!stdout.contains("Key:"));
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains("empty mnemonic"));
    }
}

#[test]
fn print_keys_with_invalid_mnemonic_fails() {
    let output = run_bin(
        env!("CARGO_BIN_EXE_print_keys"),
        Some("test test test test test test test test test test test notaword"),
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid mnemonic"));
}

#[test]
fn print_keys_prints_all_accounts_in_order() {
    let output = run_bin(env!("CARGO_BIN_EXE_print_keys"), Some(TEST_MNEMONIC));
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[1], "Mnemonic");
    assert_eq!(lines[2], TEST_MNEMONIC);

    let headers: Vec<String> = lines
        .iter()
        .filter(|line| line.starts_with("======== Account"))
        .map(|line| line.to_string())
        .collect();
    let expected: Vec<String> = (0..4)
        .map(|account| format!("======== Account {} ========", account))
        .collect();
    assert_eq!(headers, expected);

    let addresses: Vec<&str> = lines
        .iter()
        .filter_map(|line| line.strip_prefix("Address:  "))
        .collect();
    let keys: Vec<&str> = lines
        .iter()
        .filter_map(|line| line.strip_prefix("Key:  "))
        .collect();
    assert_eq!(addresses.len(), 20);
    assert_eq!(keys.len(), 20);
    assert_eq!(addresses.iter().collect::<HashSet<_>>().len(), 20);

    assert_eq!(addresses[0], "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
    assert_eq!(addresses[4], "0x15d34AAf54267DB7D7c367839AAf71A00a2C6A65");
    assert_eq!(
        keys[1],
        "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d"
    );
    for key in keys {
        assert_eq!(key.len(), 66);
        assert!(key[2..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
