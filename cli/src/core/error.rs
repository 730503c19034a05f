//! # Filesmith Error Types
//!
//! File: cli/src/core/error.rs
//! Author: filesmith contributors
//!
//! **DISCLAIMER:** filesmith is pre-1.0; its public API may still change between
//! minor versions.
//!
//! ## Overview
//!
//! This module defines the error types and error handling mechanisms used throughout
//! filesmith. Two kinds of failure flow through the crate:
//!
//! - **Filesystem failures** (a file cannot be written or copied). These are
//!   recovered locally: logged, and for `create_file` stored in the report as an
//!   `anyhow::Error` carrying the offending path as context.
//! - **Caller failures** (a content function returns `Err`, a manifest cannot be
//!   parsed). These propagate to the caller through `Result`.
//!
//! ## Architecture
//!
//! - `FilesmithError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! use filesmith::core::error::{FilesmithError, Result};
//!
//! fn content_for(name: &str) -> Result<String> {
//!     if name.is_empty() {
//!         return Err(FilesmithError::Content {
//!             file: name.to_string(),
//!             reason: "empty name".to_string(),
//!         }
//!         .into());
//!     }
//!     Ok(format!("content for {}", name))
//! }
//! # assert!(content_for("").is_err());
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for filesmith.
#[derive(Error, Debug)]
pub enum FilesmithError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Invalid manifest '{}': {reason}", path.display())]
    Manifest { path: PathBuf, reason: String },

    #[error("Cannot produce content for file '{file}': {reason}")]
    Content { file: String, reason: String },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
