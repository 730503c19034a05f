//! # Filesmith Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: filesmith contributors
//!
//! **DISCLAIMER:** filesmith is pre-1.0; its public API may still change between
//! minor versions.
//!
//! ## Overview
//!
//! Shared, domain-neutral utilities. The scaffolding logic in `scaffold::` treats
//! these as its durable store: it decides *what* to write or copy, `common::fs`
//! does the actual filesystem work.
//!
//! - **`fs`**: Writing files with parent creation, overwriting copies, and path
//!   resolution against a base directory. Includes `io`, `copy`, `paths`.
//!

/// Utilities for filesystem operations (writes, copies, path resolution).
pub mod fs;
