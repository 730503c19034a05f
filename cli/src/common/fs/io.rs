//! # Filesmith Filesystem Writes
//!
//! File: cli/src/common/fs/io.rs
//! Author: filesmith contributors
//!
//! **DISCLAIMER:** filesmith is pre-1.0; its public API may still change between
//! minor versions.
//!
//! ## Overview
//!
//! The write half of the durable store: put a string on disk at a path, creating
//! any missing parent directories first (like `mkdir -p` followed by a write).
//! Existing files are overwritten.
//!
//! ## Architecture
//!
//! - **`ensure_dir_exists`**: Creates a directory and its parents if missing. Fails
//!   if the path exists but is not a directory.
//! - **`write_file`**: Ensures the parent directory exists, then writes the content.
//!
//! Errors carry the offending path as `anyhow` context; callers in `scaffold`
//! record them rather than propagate them.
//!
//! ```rust
//! use filesmith::common::fs::io;
//! # fn run() -> filesmith::core::error::Result<()> {
//! # let dir = tempfile::tempdir()?;
//! let target = dir.path().join("docs/api/index.md");
//! io::write_file(&target, "# API\n")?;
//! assert!(target.is_file());
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```
//!
use crate::core::error::{FilesmithError, Result};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Ensures that a directory exists at `path`, creating parents as needed.
///
/// If the path does not exist, it is created together with any missing parent
/// directories (like `mkdir -p`). If it exists but is not a directory, a
/// `FilesmithError::FileSystem` is returned.
///
/// # Arguments
///
/// * `path` - The directory that must exist afterwards.
///
/// # Returns
///
/// * `Result<()>` - `Ok(())` if the directory existed or was created.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        // Missing: create it and every missing parent.
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        debug!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        // Something else (usually a regular file) is in the way.
        anyhow::bail!(FilesmithError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Writes `content` to `path`, overwriting an existing file.
///
/// The parent directory is created first when it does not exist.
///
/// # Arguments
///
/// * `path` - Absolute (or working-directory relative) path of the file.
/// * `content` - Text to write; an empty string produces an empty file.
///
/// # Returns
///
/// * `Result<()>` - `Ok(())` once the content is on disk.
///
/// # Errors
///
/// Returns an `Err` if the parent directory cannot be created or the write fails.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    // A root path has no parent and nothing to create.
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }
    // `fs::write` truncates an existing file, which is the overwrite we want.
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    debug!("Wrote {} bytes to {:?}", content.len(), path);
    Ok(())
}
