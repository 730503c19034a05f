//! # Filesmith Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: filesmith contributors
//!
//! **DISCLAIMER:** filesmith is pre-1.0; its public API may still change between
//! minor versions.
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`create.rs`, `copy.rs`,
//! `main_tests.rs`): a handle on the compiled binary and a logger that records
//! what the library reports.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use filesmith::{Logger, LoggerSetting};
use std::sync::{Arc, Mutex};

/// `assert_cmd::Command` for the `filesmith` binary built for this test run.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn filesmith_cmd() -> Command {
    Command::cargo_bin("filesmith").expect("Failed to find filesmith binary for testing")
}

/// Logger that keeps every message.
#[derive(Default)]
pub struct Recorder {
    logs: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl Recorder {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn logs(&self) -> Vec<String> {
        self.logs.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

/// Logger setting that routes to `recorder`.
pub fn logger_of(recorder: &Arc<Recorder>) -> LoggerSetting {
    LoggerSetting::Custom(recorder.clone())
}

impl Logger for Recorder {
    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    // Only `info` is provided, as a caller with an info-style logger would.
    fn info(&self, message: &str) {
        self.logs.lock().unwrap().push(message.to_string());
    }
}
