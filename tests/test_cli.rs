use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_unknown_command_prints_usage() {
    Command::cargo_bin("ngspark")
        .unwrap()
        .arg("serve")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: serve"))
        .stdout(predicate::str::contains("Usage: ngspark create"));
}

#[test]
fn test_missing_command_prints_usage() {
    Command::cargo_bin("ngspark")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: ngspark create"));
}

#[test]
fn test_unknown_flag_prints_usage() {
    Command::cargo_bin("ngspark")
        .unwrap()
        .arg("--prod")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: --prod"))
        .stdout(predicate::str::contains("Usage: ngspark create"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_help_word_is_an_unknown_command() {
    Command::cargo_bin("ngspark")
        .unwrap()
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: help"))
        .stdout(predicate::str::contains("Usage: ngspark create"));
}

#[test]
fn test_create_without_terminal_reports_prompt_error() {
    Command::cargo_bin("ngspark")
        .unwrap()
        .args(["create", "extra"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("prompt error"));
}
