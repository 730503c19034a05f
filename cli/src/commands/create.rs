//! # Filesmith Create Command
//!
//! File: cli/src/commands/create.rs
//! Author: filesmith contributors
//!
//! **DISCLAIMER:** filesmith is pre-1.0; its public API may still change between
//! minor versions.
//!
//! ## Overview
//!
//! Implements `filesmith create`, which loads a manifest (see `core::config`) and
//! creates the files it lists.
//!
//! ```bash
//! # Create the files listed in scaffold.toml, relative to the manifest's `dir`
//! filesmith create scaffold.toml
//!
//! # Override the base directory and only print the summary
//! filesmith create scaffold.toml --dir ./site --quiet
//! ```
//!
//! One line per created or failed file is printed to stdout. The command fails
//! when at least one file could not be written.
//!
use clap::Parser;
use filesmith::core::config::load_manifest;
use filesmith::core::error::{FilesmithError, Result};
use filesmith::{create_file, CreateReport, LoggerSetting};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Arguments of `filesmith create`.
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Manifest describing the files (TOML, or JSON with a `.json` extension).
    manifest: PathBuf,

    /// Base directory for relative file names. Overrides the manifest's `dir`.
    #[arg(long, short = 'd')]
    dir: Option<String>,

    /// Do not log each file; only print the summary.
    #[arg(long, short = 'q')]
    quiet: bool,
}

pub fn handle_create(args: CreateArgs) -> Result<()> {
    info!("Loading manifest {}", args.manifest.display());
    let manifest = load_manifest(&args.manifest)?;

    let mut settings = manifest.create_settings(args.dir.as_deref());
    if args.quiet {
        settings.logger = LoggerSetting::Disabled;
    }
    debug!("Create settings: {:?}", settings);

    match create_file(manifest.file_set()?, &settings)? {
        Some(report) => print_report(&report),
        None => {
            println!("No files are specified in {}", args.manifest.display());
            Ok(())
        }
    }
}

fn print_report(report: &CreateReport) -> Result<()> {
    let cwd = env::current_dir().ok();
    let mut failures = 0;

    for (key, outcome) in report.iter() {
        match outcome {
            Ok(path) => println!("created {}", display_path(path, cwd.as_deref())),
            Err(e) => {
                failures += 1;
                println!("failed  {}: {:#}", key, e);
            }
        }
    }

    if failures > 0 {
        return Err(FilesmithError::FileSystem(format!(
            "{} of {} file(s) could not be created",
            failures,
            report.len()
        ))
        .into());
    }
    println!("{} file(s) created", report.len());
    Ok(())
}

/// `path` relative to the working directory when that is shorter.
fn display_path(path: &Path, cwd: Option<&Path>) -> String {
    cwd.and_then(|cwd| pathdiff::diff_paths(path, cwd))
        .filter(|relative| !relative.starts_with(".."))
        .unwrap_or_else(|| path.to_path_buf())
        .display()
        .to_string()
}
