//! # Filesmith CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//! Author: filesmith contributors
//!
//! **DISCLAIMER:** filesmith is pre-1.0; its public API may still change between
//! minor versions.
//!
//! ## Overview
//!
//! Top-level behavior of the `filesmith` binary: `--help`, `--version` and
//! argument errors.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    filesmith_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create").and(predicate::str::contains("copy")));
}

#[test]
fn test_version_flag() {
    filesmith_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand_fails() {
    filesmith_cmd().assert().failure();
}

#[test]
fn test_copy_requires_destination() {
    filesmith_cmd()
        .args(["copy", "LICENSE"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}
