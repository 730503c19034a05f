//! # Filesmith Path Resolution
//!
//! File: cli/src/common/fs/paths.rs
//! Author: filesmith contributors
//!
//! **DISCLAIMER:** filesmith is pre-1.0; its public API may still change between
//! minor versions.
//!
//! ## Overview
//!
//! Turns a base directory and a file name into an absolute path:
//! - an empty base directory means the current working directory;
//! - an absolute file name is used as is, whatever the base;
//! - `.` and `..` components are folded away lexically (nothing is looked up on
//!   disk, so the path does not have to exist yet).
//!
//! ```rust
//! use filesmith::common::fs::paths::resolve_path;
//! # fn run() -> filesmith::core::error::Result<()> {
//! let path = resolve_path("/srv/site", "docs/../index.html")?;
//! assert_eq!(path, std::path::PathBuf::from("/srv/site/index.html"));
//! # Ok(())
//! # }
//! # if cfg!(unix) { run().unwrap(); }
//! ```
//!
use crate::core::error::Result;
use anyhow::Context;
use std::env;
use std::path::{Component, Path, PathBuf};

/// Absolute form of `dir`, relative to the current working directory.
pub fn absolute_dir(dir: &str) -> Result<PathBuf> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    Ok(normalize(&cwd.join(dir)))
}

/// Absolute path of `name` inside `base`. Absolute names are returned normalized
/// but otherwise unchanged.
pub fn resolve_path(base: &str, name: &str) -> Result<PathBuf> {
    Ok(normalize(&absolute_dir(base)?.join(name)))
}

/// Lexically removes `.` and `..` components.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root.
                if matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                ) {
                    normalized.pop();
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_base_is_current_dir() -> Result<()> {
        let cwd = env::current_dir()?;
        assert_eq!(absolute_dir("")?, normalize(&cwd));
        assert_eq!(resolve_path("", "a.txt")?, normalize(&cwd).join("a.txt"));
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_absolute_name_ignores_base() -> Result<()> {
        assert_eq!(
            resolve_path("/some/base", "/etc/other/file.txt")?,
            PathBuf::from("/etc/other/file.txt")
        );
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_relative_name_joins_base() -> Result<()> {
        assert_eq!(
            resolve_path("/base/dir", "./sub/../x/y.txt")?,
            PathBuf::from("/base/dir/x/y.txt")
        );
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_parent_dir_stops_at_root() {
        assert_eq!(normalize(Path::new("/../../a")), PathBuf::from("/a"));
    }

    #[test]
    fn test_relative_base_is_made_absolute() -> Result<()> {
        let resolved = absolute_dir("target/out")?;
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("target/out"));
        Ok(())
    }
}
