//! # Filesmith File Copying
//!
//! File: cli/src/scaffold/copy.rs
//! Author: filesmith contributors
//!
//! **DISCLAIMER:** filesmith is pre-1.0; its public API may still change between
//! minor versions.
//!
//! ## Overview
//!
//! Copies an existing file (or directory) into place. Two call shapes are offered:
//!
//! - **`copy_file(source, dest, settings)`** copies once.
//! - **`copy_from(source)`** captures the source and returns a `PartialCopy`, which
//!   can copy it to any number of destinations with `to`, or be used as the
//!   content of a `create_file` entry with `into_content`.
//!
//! Copy failures are logged at error level and otherwise swallowed; nothing is
//! returned to the caller.
//!
//! ## Usage
//!
//! ```rust
//! use filesmith::{copy_from, create_file, CopySettings, CreateSettings, FileSet};
//!
//! # fn run() -> filesmith::core::error::Result<()> {
//! # let dir = tempfile::tempdir()?;
//! # let root = dir.path().to_string_lossy().into_owned();
//! # std::fs::write(dir.path().join("LICENSE"), "MIT")?;
//! let license = copy_from("LICENSE").expect("source is not empty");
//! let settings = CopySettings::new().with_source_dir(&root).with_dir(&root);
//! license.to("packages/a/LICENSE", &settings);
//! license.to("packages/b/LICENSE", &settings);
//!
//! // Copy-as-create: the entry is copied, then skipped by `create_file`.
//! let license = license.with_source_dir(&root);
//! create_file(
//!     FileSet::new().file("LICENSE.txt", license.into_content()),
//!     &CreateSettings::new().with_dir(&root),
//! )?;
//! # assert!(dir.path().join("LICENSE.txt").exists());
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```
//!
use crate::common::fs::{copy, paths};
use crate::core::config::CopySettings;
use crate::core::error::Result;
use crate::core::logging::{ActiveLogger, Logger};
use crate::scaffold::content::ContentSpec;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Copies `source_file` to `dest_file`, overwriting the destination.
///
/// `source_file` is resolved against `settings.source_dir`, `dest_file` against
/// `settings.dir` (empty means the working directory; absolute names are kept).
/// Does nothing, silently, when either name is empty.
pub fn copy_file(source_file: &str, dest_file: &str, settings: &CopySettings) {
    if source_file.is_empty() || dest_file.is_empty() {
        return;
    }

    let logger = settings.logger.resolve();
    let (source_path, dest_path) = match resolve_pair(source_file, dest_file, settings) {
        Ok(pair) => pair,
        Err(e) => {
            logger.error(&format!(
                "cannot copy file '{}' to '{}'; error details -\n{:#}",
                source_file, dest_file, e
            ));
            return;
        }
    };

    copy_resolved(&source_path, &dest_path, &logger);
}

fn resolve_pair(
    source_file: &str,
    dest_file: &str,
    settings: &CopySettings,
) -> Result<(PathBuf, PathBuf)> {
    Ok((
        paths::resolve_path(&settings.source_dir, source_file)?,
        paths::resolve_path(&settings.dir, dest_file)?,
    ))
}

fn copy_resolved(source_path: &Path, dest_path: &Path, logger: &ActiveLogger) {
    match copy::copy_path(source_path, dest_path) {
        Ok(()) => logger.log(&format!(
            "file '{}' is copied to '{}'",
            source_path.display(),
            dest_path.display()
        )),
        Err(e) => logger.error(&format!(
            "cannot copy file '{}' to '{}'; error details -\n{:#}",
            source_path.display(),
            dest_path.display(),
            e
        )),
    }
}

/// Captures `source_file` for later copies. `None` when the name is empty.
pub fn copy_from(source_file: impl Into<String>) -> Option<PartialCopy> {
    let source_file = source_file.into();
    if source_file.is_empty() {
        return None;
    }
    Some(PartialCopy {
        source_file,
        source_dir: String::new(),
    })
}

/// A copy whose source is fixed and whose destination is supplied per call.
#[derive(Debug, Clone)]
pub struct PartialCopy {
    source_file: String,
    source_dir: String,
}

impl PartialCopy {
    pub fn source_file(&self) -> &str {
        &self.source_file
    }

    /// Base directory used by [`PartialCopy::into_content`] for the source.
    /// `to` takes the source directory from its own settings.
    pub fn with_source_dir(mut self, source_dir: impl Into<String>) -> Self {
        self.source_dir = source_dir.into();
        self
    }

    /// Copies the captured source to `dest_file`. See [`copy_file`].
    pub fn to(&self, dest_file: &str, settings: &CopySettings) {
        copy_file(&self.source_file, dest_file, settings);
    }

    /// A content spec that copies the source to the entry's path and then skips it.
    ///
    /// The entry key is the destination, resolved against the `create_file` base
    /// directory; the copy logs through the `create_file` logger.
    pub fn into_content(self) -> ContentSpec {
        ContentSpec::derive(move |file, env| {
            let settings = CopySettings {
                dir: env.dir.to_string(),
                source_dir: self.source_dir.clone(),
                logger: env.logger.to_setting(),
            };
            self.to(file, &settings);
            Ok(Value::Null)
        })
    }
}
