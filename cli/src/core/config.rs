//! # Filesmith Settings and Manifests
//!
//! File: cli/src/core/config.rs
//! Author: filesmith contributors
//!
//! **DISCLAIMER:** filesmith is pre-1.0; its public API may still change between
//! minor versions.
//!
//! ## Overview
//!
//! This module holds the settings types accepted by the two public operations and
//! the manifest loader used by the `filesmith` binary.
//!
//! - **`CreateSettings`**: options for `create_file` (`context`, `data`, `dir`, `logger`).
//! - **`CopySettings`**: options for `copy_file` (`dir`, `source_dir`, `logger`).
//! - **`Manifest`**: a TOML (or JSON) document describing a file set and its settings.
//!
//! ## Manifest Format
//!
//! ```toml
//! dir = "~/site"        # optional base directory, `~` is expanded
//! source_dir = "assets" # optional base directory for `[copy]` sources
//! logger = true         # optional, `false` silences per-file logging
//!
//! [files]
//! ".nojekyll" = true
//! "README.md" = "# demo\n"
//! "draft.md" = false
//!
//! [files."package.json"]
//! name = "demo"
//! private = true
//!
//! [copy]                # destination = source, created after `[files]`
//! "LICENSE" = "LICENSE-MIT"
//! ```
//!
//! JSON manifests (`.json` extension) use the same keys and may also use `null`
//! to skip a file.
//!
use crate::core::error::{FilesmithError, Result};
use crate::core::logging::LoggerSetting;
use crate::scaffold::{copy_from, FileSet};
use anyhow::Context;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::any::Any;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Settings for `create_file`.
#[derive(Clone, Debug, Default)]
pub struct CreateSettings {
    /// Caller value handed to content functions through `ContentEnv::context`.
    pub context: Option<Arc<dyn Any + Send + Sync>>,
    /// Arbitrary data forwarded to content functions.
    pub data: Option<Value>,
    /// Base directory for relative file names. Empty means the working directory.
    pub dir: String,
    pub logger: LoggerSetting,
}

impl CreateSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(mut self, dir: impl Into<String>) -> Self {
        self.dir = dir.into();
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_context<T: Any + Send + Sync>(mut self, context: T) -> Self {
        self.context = Some(Arc::new(context));
        self
    }

    pub fn with_logger(mut self, logger: impl Into<LoggerSetting>) -> Self {
        self.logger = logger.into();
        self
    }
}

/// Settings for `copy_file`.
#[derive(Clone, Debug, Default)]
pub struct CopySettings {
    /// Destination base directory. Empty means the working directory.
    pub dir: String,
    /// Source base directory. Empty means the working directory.
    pub source_dir: String,
    pub logger: LoggerSetting,
}

impl CopySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(mut self, dir: impl Into<String>) -> Self {
        self.dir = dir.into();
        self
    }

    pub fn with_source_dir(mut self, source_dir: impl Into<String>) -> Self {
        self.source_dir = source_dir.into();
        self
    }

    pub fn with_logger(mut self, logger: impl Into<LoggerSetting>) -> Self {
        self.logger = logger.into();
        self
    }
}

/// A file set plus settings, as read from a manifest file.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Base directory for relative file names (can use ~). Will be expanded.
    #[serde(default)]
    pub dir: Option<String>,
    /// Base directory for `[copy]` sources (can use ~). Will be expanded.
    #[serde(default)]
    pub source_dir: Option<String>,
    /// `false` disables logging.
    #[serde(default)]
    pub logger: Option<bool>,
    /// The file set: a table of name to content, or a single file name.
    #[serde(default)]
    pub files: Value,
    /// Destination name to source name, copied after `files`.
    #[serde(default)]
    pub copy: Map<String, Value>,
}

impl Manifest {
    /// The manifest's file set, with `[copy]` entries appended as copy-as-create
    /// content.
    ///
    /// # Errors
    ///
    /// Returns an `Err` if a `[copy]` source is not a non-empty string.
    pub fn file_set(&self) -> Result<FileSet> {
        let mut file_set = FileSet::from(self.files.clone());
        for (dest, source) in &self.copy {
            let partial = source.as_str().and_then(|name| copy_from(name)).ok_or_else(|| {
                FilesmithError::Config(format!(
                    "copy source for '{}' must be a non-empty string, found {}",
                    dest, source
                ))
            })?;
            let partial = partial.with_source_dir(self.source_dir.clone().unwrap_or_default());
            file_set = file_set.file(dest.clone(), partial.into_content());
        }
        Ok(file_set)
    }

    /// Builds `create_file` settings. `dir_override` wins over the manifest's `dir`.
    pub fn create_settings(&self, dir_override: Option<&str>) -> CreateSettings {
        let mut settings = CreateSettings::new().with_logger(self.logger);
        if let Some(dir) = dir_override.or(self.dir.as_deref()) {
            settings.dir = dir.to_string();
        }
        settings
    }
}

/// Loads a manifest from `path`. Files ending in `.json` are parsed as JSON,
/// everything else as TOML.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest file: {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let mut manifest: Manifest = if is_json {
        serde_json::from_str(&content).map_err(|e| FilesmithError::Manifest {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?
    } else {
        toml::from_str(&content).map_err(|e| FilesmithError::Manifest {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?
    };

    expand_manifest_paths(&mut manifest);
    debug!("Loaded manifest from {}: {:?}", path.display(), manifest);
    Ok(manifest)
}

fn expand_manifest_paths(manifest: &mut Manifest) {
    for dir in [&mut manifest.dir, &mut manifest.source_dir].into_iter().flatten() {
        let expanded = shellexpand::tilde(dir.as_str()).into_owned();
        debug!("Expanded manifest directory: {}", expanded);
        *dir = expanded;
    }
}
