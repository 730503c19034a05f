//! # Filesmith Copy Command
//!
//! File: cli/src/commands/copy.rs
//! Author: filesmith contributors
//!
//! **DISCLAIMER:** filesmith is pre-1.0; its public API may still change between
//! minor versions.
//!
//! ## Overview
//!
//! Implements `filesmith copy`, which copies one source file or directory to any
//! number of destinations.
//!
//! ```bash
//! # Put the same LICENSE into two packages
//! filesmith copy LICENSE packages/a/LICENSE packages/b/LICENSE
//!
//! # Resolve the source and the destinations against different directories
//! filesmith copy --source-dir templates --dir out ci.yml .github/workflows/ci.yml
//! ```
//!
//! The library only logs copy failures, so the command routes the log through a
//! counter and fails if any destination logged an error.
//!
use clap::Parser;
use filesmith::core::error::{FilesmithError, Result};
use filesmith::core::logging::ActiveLogger;
use filesmith::{copy_from, CopySettings, Logger, LoggerSetting};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Arguments of `filesmith copy`.
#[derive(Parser, Debug)]
pub struct CopyArgs {
    /// File or directory to copy.
    source: String,

    /// One or more destinations.
    #[arg(required = true, num_args = 1..)]
    destinations: Vec<String>,

    /// Base directory for the destinations.
    #[arg(long, short = 'd', default_value = "")]
    dir: String,

    /// Base directory for the source.
    #[arg(long, short = 's', default_value = "")]
    source_dir: String,

    /// Do not log each copy; only print the summary.
    #[arg(long, short = 'q')]
    quiet: bool,
}

/// Forwards to the logger chosen on the command line and counts `error` calls.
///
/// `copy_file` reports failures only through its logger, so this count is how
/// the command learns that a copy went wrong.
struct FailureCounter {
    inner: ActiveLogger,
    failures: AtomicUsize,
}

impl FailureCounter {
    fn new(inner: ActiveLogger) -> Arc<Self> {
        Arc::new(Self {
            inner,
            failures: AtomicUsize::new(0),
        })
    }

    /// Errors logged since the last call, resetting the count.
    fn take(&self) -> usize {
        self.failures.swap(0, Ordering::SeqCst)
    }
}

impl Logger for FailureCounter {
    fn error(&self, message: &str) {
        self.failures.fetch_add(1, Ordering::SeqCst);
        self.inner.error(message);
    }

    fn log(&self, message: &str) {
        self.inner.log(message);
    }
}

pub fn handle_copy(args: CopyArgs) -> Result<()> {
    let partial = copy_from(args.source.as_str()).ok_or_else(|| {
        FilesmithError::Config("the source file name must not be empty".to_string())
    })?;

    // `--quiet` silences per-copy messages; failures are still counted.
    let counter = FailureCounter::new(if args.quiet {
        ActiveLogger::Disabled
    } else {
        ActiveLogger::Standard
    });
    let settings = CopySettings::new()
        .with_dir(args.dir.as_str())
        .with_source_dir(args.source_dir.as_str())
        .with_logger(LoggerSetting::Custom(counter.clone()));
    debug!("Copy settings: {:?}", settings);

    let mut failed = Vec::new();
    for destination in &args.destinations {
        partial.to(destination, &settings);
        if counter.take() > 0 {
            failed.push(destination.as_str());
        }
    }

    if !failed.is_empty() {
        return Err(FilesmithError::FileSystem(format!(
            "could not copy '{}' to: {}",
            partial.source_file(),
            failed.join(", ")
        ))
        .into());
    }
    println!(
        "copied {} to {} destination(s)",
        partial.source_file(),
        args.destinations.len()
    );
    Ok(())
}
