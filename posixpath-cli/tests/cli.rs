//! Integration tests for the posixpath CLI surface.
//!
//! These tests verify argument parsing, help text, and version output.

use assert_cmd::Command;
use predicates::prelude::*;

fn posixpath() -> Command {
    Command::cargo_bin("posixpath").expect("Failed to find posixpath binary")
}

#[test]
fn test_cli_no_arguments() {
    posixpath()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version_flag() {
    posixpath()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("posixpath"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_help_flag() {
    posixpath()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Manipulate POSIX path strings"));
}

#[test]
fn test_help_lists_every_command() {
    let assert = posixpath().arg("--help").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    for command in [
        "basename",
        "dirname",
        "extname",
        "join",
        "parse",
        "format",
        "constants",
        "modules",
        "completions",
    ] {
        assert!(stdout.contains(command), "help is missing '{command}'");
    }
}

#[test]
fn test_cli_invalid_subcommand() {
    posixpath()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_missing_required_path() {
    posixpath()
        .arg("basename")
        .assert()
        .failure()
        .stderr(predicate::str::contains("PATH"));
}

#[test]
fn test_completions_bash() {
    posixpath()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("posixpath"))
        .stderr(predicate::str::contains("enable completions"));
}

#[test]
fn test_completions_quiet_has_no_hint() {
    posixpath()
        .args(["--quiet", "completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef posixpath"))
        .stderr(predicate::str::is_empty());
}
