//! # Filesmith Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: filesmith contributors
//!
//! **DISCLAIMER:** filesmith is pre-1.0; its public API may still change between
//! minor versions.
//!
//! ## Overview
//!
//! The subcommands of the `filesmith` binary. Each one is a thin front end over a
//! library operation: it turns command-line arguments (and, for `create`, a
//! manifest file) into settings, calls the operation and prints a summary.
//!
//! ## Commands
//!
//! - `create`: Materializes the file set described by a manifest (`create_file`)
//! - `copy`: Copies one source to one or more destinations (`copy_from`)
//!

/// `filesmith create <MANIFEST>`.
pub mod create;
/// `filesmith copy <SOURCE> <DEST>...`.
pub mod copy;
