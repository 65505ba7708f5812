#![allow(missing_docs)]
use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn enigma_cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_enigma-cli"))
}

#[test]
fn test_encode_and_decode_text_arguments() {
    enigma_cli()
        .arg("--positions")
        .arg("mck")
        .arg("encode")
        .arg("enigmarevealed")
        .assert()
        .success()
        .stdout("qmjidomzwzsfjr\n");

    enigma_cli()
        .arg("--positions")
        .arg("mck")
        .arg("decode")
        .arg("qmjidomzwzsfjr")
        .assert()
        .success()
        .stdout("enigmarevealed\n");
}

#[test]
fn test_default_settings() {
    enigma_cli()
        .arg("encode")
        .arg("aaaaa")
        .assert()
        .success()
        .stdout("bdzgo\n");
}

#[test]
fn test_file_workflow_with_strip() {
    // 1. Setup temporary files
    let temp_dir = tempdir().unwrap();
    let input_path = temp_dir.path().join("message.txt");
    let encoded_path = temp_dir.path().join("message.enc");
    let decoded_path = temp_dir.path().join("message.dec");
    fs::write(&input_path, "The quick brown fox,\njumps over the lazy dog!\n").unwrap();

    // 2. Encode the file
    enigma_cli()
        .args(["--rotors", "IV,V,II", "--reflector", "C", "--positions", "xyz"])
        .arg("encode")
        .arg("--strip")
        .arg("--input")
        .arg(&input_path)
        .arg("--output")
        .arg(&encoded_path)
        .assert()
        .success()
        .stdout("");
    let encoded = fs::read_to_string(&encoded_path).unwrap();
    assert_eq!(encoded, "igcaaljfwnciitfftradipymfswitzcxsvd");

    // 3. Decode it with the same settings
    enigma_cli()
        .args(["--rotors", "IV,V,II", "--reflector", "C", "--positions", "xyz"])
        .arg("decode")
        .arg("--input")
        .arg(&encoded_path)
        .arg("--output")
        .arg(&decoded_path)
        .assert()
        .success();
    let decoded = fs::read_to_string(&decoded_path).unwrap();
    assert_eq!(decoded, "thequickbrownfoxjumpsoverthelazydog");
}

#[test]
fn test_decode_from_stdin() {
    enigma_cli()
        .args(["--positions", "mck", "decode"])
        .write_stdin("qmjidomzwzsfjr\n")
        .assert()
        .success()
        .stdout("enigmarevealed\n");
}

#[test]
fn test_invalid_character_is_reported() {
    enigma_cli()
        .arg("encode")
        .arg("hello world")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains(
            "invalid character ' ' at index 5",
        ));
}

#[test]
fn test_invalid_settings_are_reported() {
    enigma_cli()
        .args(["--rotors", "I,II", "encode", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Exactly 3 rotors are required, got 2"));

    enigma_cli()
        .args(["--reflector", "A", "encode", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown reflector 'A'"));

    enigma_cli()
        .args(["--positions", "abcd", "encode", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 3 rotor positions, got 4"));

    enigma_cli()
        .args(["--positions", "aBc", "encode", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid character 'B' at index 1"));
}

#[test]
fn test_missing_input_file() {
    let temp_dir = tempdir().unwrap();
    enigma_cli()
        .arg("encode")
        .arg("--input")
        .arg(temp_dir.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input"));
}

#[test]
fn test_catalog_lists_rotors_and_reflectors() {
    enigma_cli()
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("ekmflgdqvzntowyhxuspaibrcj  notch q"))
        .stdout(predicate::str::contains("V     vzbrgityupsdnhlxawmjqofeck  notch z"))
        .stdout(predicate::str::contains("C     fvpjiaoyedrzxwgctkuqsbnmhl"));
}
