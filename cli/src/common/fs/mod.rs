//! # Filesmith Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: filesmith contributors
//!
//! **DISCLAIMER:** filesmith is pre-1.0; its public API may still change between
//! minor versions.
//!
//! ## Overview
//!
//! The durable store used by `create_file` and `copy_file`.
//!
//! ## Architecture
//!
//! - **`copy`**: Overwriting copies of files and directory trees, using the `fs_extra` crate.
//! - **`io`**: Writing a string to a file, creating missing parent directories (`write_file`, `ensure_dir_exists`).
//! - **`paths`**: Absolute-path-aware joining of a base directory and a file name (`resolve_path`, `absolute_dir`).
//!
//! Functions are imported from the specific submodule, e.g.
//! `use crate::common::fs::io::write_file;`.
//!

/// Overwriting copies (`copy_path`).
pub mod copy;
/// Writes with parent directory creation (`write_file`, `ensure_dir_exists`).
pub mod io;
/// Base directory + name resolution (`resolve_path`, `absolute_dir`).
pub mod paths;
