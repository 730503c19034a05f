//! # Filesmith Filesystem Copy Operations
//!
//! File: cli/src/common/fs/copy.rs
//! Author: filesmith contributors
//!
//! **DISCLAIMER:** filesmith is pre-1.0; its public API may still change between
//! minor versions.
//!
//! ## Overview
//!
//! The copy half of the durable store. `copy_path` copies a file, or a whole
//! directory tree, to a target path, always overwriting what is already there.
//!
//! ## Architecture
//!
//! `copy_path` first stats the source and refuses a target that resolves to the
//! source itself (or lies inside a source directory). Only then is anything
//! created on the target side. Both cases then go through the `fs_extra` crate:
//! - a file is copied with `fs_extra::file::copy` after the target's parent
//!   directory has been created;
//! - a directory is copied with `fs_extra::dir::copy` using `content_only`, so the
//!   source's entries are merged into the target directory instead of nesting
//!   the source directory inside it.
//!
//! `fs_extra` errors are converted into `anyhow` errors naming both paths.
//!
use crate::common::fs::io::ensure_dir_exists;
use crate::core::error::{FilesmithError, Result};
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Copies `source` (file or directory) to `target`, overwriting existing content.
///
/// The source is checked first, so a failed copy leaves nothing behind at the
/// target: no parent directories are created for a source that is missing, and a
/// source that is the target itself is refused before `fs_extra` can truncate it.
///
/// # Arguments
///
/// * `source` - The file or directory to copy. Must exist.
/// * `target` - Where to put it. For a directory, the source's entries are merged
///   into `target`.
///
/// # Returns
///
/// * `Result<()>` - `Ok(())` once every byte is in place.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The source path does not exist or is not accessible.
/// - Source and target are the same file, or the target lies inside a source
///   directory.
/// - The target (or its parent directory) cannot be created or written to.
pub fn copy_path(source: &Path, target: &Path) -> Result<()> {
    // Stat the source before touching anything on the target side.
    let metadata = fs::metadata(source)
        .with_context(|| format!("Source path {:?} does not exist or is not accessible", source))?;

    ensure_distinct(source, target, metadata.is_dir())?;

    if metadata.is_dir() {
        copy_directory_contents(source, target)
    } else {
        copy_single_file(source, target)
    }
}

/// Refuses copies whose target is the source (or, for directories, inside it).
///
/// Both sides are compared after resolving symlinks and `..`, so `./LICENSE` and
/// `LICENSE` are recognized as the same file.
fn ensure_distinct(source: &Path, target: &Path, source_is_dir: bool) -> Result<()> {
    let source_real = fs::canonicalize(source)
        .with_context(|| format!("Failed to resolve source path {:?}", source))?;
    let target_real = canonical_target(target);

    if source_real == target_real {
        anyhow::bail!(FilesmithError::FileSystem(format!(
            "Source and destination must not be the same: {:?}",
            source_real
        )));
    }
    if source_is_dir && target_real.starts_with(&source_real) {
        anyhow::bail!(FilesmithError::FileSystem(format!(
            "Cannot copy directory {:?} into itself ({:?})",
            source_real, target_real
        )));
    }
    Ok(())
}

/// Canonical form of a target that may not exist yet: the deepest existing
/// ancestor is canonicalized and the missing components are appended to it.
fn canonical_target(target: &Path) -> PathBuf {
    if let Ok(real) = fs::canonicalize(target) {
        return real;
    }
    match (target.parent(), target.file_name()) {
        (Some(parent), Some(name)) => canonical_target(parent).join(name),
        _ => target.to_path_buf(),
    }
}

fn copy_single_file(source: &Path, target: &Path) -> Result<()> {
    // `fs_extra::file::copy` does not create the destination's parents.
    if let Some(parent) = target.parent() {
        ensure_dir_exists(parent)?;
    }

    let mut options = fs_extra::file::CopyOptions::new();
    options.overwrite = true;

    let bytes = fs_extra::file::copy(source, target, &options).map_err(|e| {
        anyhow::anyhow!(e).context(format!("Failed to copy file {:?} to {:?}", source, target))
    })?;
    debug!("Copied {} bytes from {:?} to {:?}", bytes, source, target);
    Ok(())
}

fn copy_directory_contents(source: &Path, target: &Path) -> Result<()> {
    ensure_dir_exists(target)?;

    let mut options = fs_extra::dir::CopyOptions::new();
    options.overwrite = true;
    // Merge entries into `target` instead of creating `target/<source name>`.
    options.content_only = true;

    fs_extra::dir::copy(source, target, &options).map_err(|e| {
        anyhow::anyhow!(e).context(format!("Failed to copy dir {:?} to {:?}", source, target))
    })?;
    debug!("Copied directory {:?} into {:?}", source, target);
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_copy_file_creates_parent_and_overwrites() -> Result<()> {
        let dir = tempdir()?;
        let source = dir.path().join("src.txt");
        let target = dir.path().join("nested/dest.txt");
        fs::write(&source, "new")?;

        copy_path(&source, &target)?;
        assert_eq!(fs::read_to_string(&target)?, "new");

        fs::write(&source, "newer")?;
        copy_path(&source, &target)?;
        assert_eq!(fs::read_to_string(&target)?, "newer");
        Ok(())
    }

    #[test]
    fn test_copy_directory_merges_contents() -> Result<()> {
        let dir = tempdir()?;
        let source = dir.path().join("template");
        fs::create_dir_all(source.join("src"))?;
        fs::write(source.join("README.md"), "readme")?;
        fs::write(source.join("src/lib.rs"), "// lib")?;

        let target = dir.path().join("project");
        fs::create_dir_all(&target)?;
        fs::write(target.join("keep.txt"), "kept")?;

        copy_path(&source, &target)?;

        assert_eq!(fs::read_to_string(target.join("README.md"))?, "readme");
        assert_eq!(fs::read_to_string(target.join("src/lib.rs"))?, "// lib");
        assert_eq!(fs::read_to_string(target.join("keep.txt"))?, "kept");
        assert!(!target.join("template").exists());
        Ok(())
    }

    #[test]
    fn test_copy_missing_source_fails() -> Result<()> {
        let dir = tempdir()?;
        let result = copy_path(&dir.path().join("missing.txt"), &dir.path().join("out.txt"));
        assert!(result.is_err());
        assert!(!dir.path().join("out.txt").exists());
        Ok(())
    }

    #[test]
    fn test_copy_missing_source_creates_no_directories() -> Result<()> {
        let dir = tempdir()?;
        let target = dir.path().join("deep/nested/out.txt");

        let result = copy_path(&dir.path().join("missing.txt"), &target);

        assert!(result.is_err());
        assert!(!dir.path().join("deep").exists());
        Ok(())
    }

    #[test]
    fn test_copy_file_onto_itself_is_refused() -> Result<()> {
        let dir = tempdir()?;
        let source = dir.path().join("LICENSE");
        fs::write(&source, "MIT License")?;

        let result = copy_path(&source, &dir.path().join(".").join("LICENSE"));

        let err = result.expect_err("copying a file onto itself must fail");
        assert!(format!("{:#}", err).contains("must not be the same"));
        assert_eq!(fs::read_to_string(&source)?, "MIT License");
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_through_symlink_to_source_is_refused() -> Result<()> {
        let dir = tempdir()?;
        let source = dir.path().join("a.txt");
        fs::write(&source, "keep me")?;
        let link = dir.path().join("link.txt");
        std::os::unix::fs::symlink(&source, &link)?;

        assert!(copy_path(&source, &link).is_err());
        assert_eq!(fs::read_to_string(&source)?, "keep me");
        Ok(())
    }

    #[test]
    fn test_copy_directory_into_itself_is_refused() -> Result<()> {
        let dir = tempdir()?;
        let source = dir.path().join("tree");
        fs::create_dir_all(&source)?;
        fs::write(source.join("a.txt"), "a")?;

        assert!(copy_path(&source, &source.join("copy")).is_err());
        assert!(!source.join("copy").exists());
        Ok(())
    }
}
