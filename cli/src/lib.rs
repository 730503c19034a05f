//! # Filesmith Library Root
//!
//! File: cli/src/lib.rs
//! Author: filesmith contributors
//!
//! **DISCLAIMER:** filesmith is pre-1.0; its public API may still change between
//! minor versions.
//!
//! ## Overview
//!
//! filesmith creates files from a declarative description and copies existing
//! files into place. The whole surface is two operations:
//!
//! - [`create_file`]: given one file name, or an ordered mapping of names to
//!   content specifications, writes the files and reports each outcome.
//! - [`copy_file`] / [`copy_from`]: copies a file (or directory) to one or many
//!   destinations.
//!
//! ## Architecture
//!
//! - `scaffold`: the operations and content resolution rules
//! - `core`: settings, errors and logger resolution
//! - `common`: filesystem helpers (writes, copies, path resolution)
//!
//! ## Examples
//!
//! ```rust
//! use filesmith::{create_file, ContentSpec, CreateSettings, FileSet};
//! use serde_json::json;
//!
//! # fn run() -> filesmith::core::error::Result<()> {
//! # let dir = tempfile::tempdir()?;
//! let settings = CreateSettings::new()
//!     .with_dir(dir.path().to_string_lossy())
//!     .with_data(json!({"name": "demo"}));
//!
//! let report = create_file(
//!     FileSet::new()
//!         .file("README.md", ContentSpec::derive(|_, env| {
//!             let name = env.data.and_then(|d| d["name"].as_str()).unwrap_or("project");
//!             Ok(json!(format!("# {}\n", name)))
//!         }))
//!         .file("package.json", json!({"name": "demo", "private": true}))
//!         .file(".nojekyll", true),
//!     &settings,
//! )?
//! .expect("files were requested");
//!
//! for (key, outcome) in report.iter() {
//!     match outcome {
//!         Ok(path) => println!("{} -> {}", key, path.display()),
//!         Err(e) => eprintln!("{} failed: {:#}", key, e),
//!     }
//! }
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```
//!
pub mod common;
pub mod core;
pub mod scaffold;

pub use crate::core::config::{CopySettings, CreateSettings};
pub use crate::core::logging::{Logger, LoggerSetting};
pub use crate::scaffold::{
    copy_file, copy_from, create_file, ContentEnv, ContentSpec, CreateReport, FileOutcome,
    FileSet, PartialCopy,
};
