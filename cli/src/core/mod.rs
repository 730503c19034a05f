//! # Filesmith Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: filesmith contributors
//!
//! **DISCLAIMER:** filesmith is pre-1.0; its public API may still change between
//! minor versions.
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure shared by the scaffolding
//! operations and the binary front end.
//!
//! ## Architecture
//!
//! - `config`: Settings for `create_file` / `copy_file` and manifest loading
//! - `error`: Error types and error handling utilities
//! - `logging`: Resolution of the caller's logger setting into an active logger
//!
//! ## Usage
//!
//! ```rust
//! use filesmith::core::config::CreateSettings;
//! use filesmith::core::error::Result;
//! use filesmith::core::logging::LoggerSetting;
//! ```
//!
pub mod config;
pub mod error;
pub mod logging;
