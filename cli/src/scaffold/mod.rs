//! # Filesmith Scaffolding Operations (`scaffold`)
//!
//! File: cli/src/scaffold/mod.rs
//! Author: filesmith contributors
//!
//! **DISCLAIMER:** filesmith is pre-1.0; its public API may still change between
//! minor versions.
//!
//! ## Overview
//!
//! The two public operations and the content rules they share.
//!
//! ## Architecture
//!
//! - **`content`**: Classifies content specifications (`ContentSpec`) and resolves
//!   them into text, calling content closures with a `ContentEnv`.
//! - **`create`**: `create_file`, which materializes a `FileSet` and returns a
//!   `CreateReport` of per-file outcomes.
//! - **`copy`**: `copy_file` and the `PartialCopy` builder returned by `copy_from`.
//!
//! Both operations resolve their logger once per call (`core::logging`) and do
//! their I/O through `common::fs`.
//!
pub mod content;
pub mod copy;
pub mod create;

pub use content::{ContentEnv, ContentFn, ContentSpec, Resolved, SkipFlag};
pub use copy::{copy_file, copy_from, PartialCopy};
pub use create::{create_file, CreateReport, FileOutcome, FileSet};
