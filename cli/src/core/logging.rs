//! # Filesmith Logger Resolution
//!
//! File: cli/src/core/logging.rs
//! Author: filesmith contributors
//!
//! **DISCLAIMER:** filesmith is pre-1.0; its public API may still change between
//! minor versions.
//!
//! ## Overview
//!
//! Both public operations report every step (file created, file skipped, copy
//! failed, ...) through a logging capability chosen by the caller. This module
//! turns the caller's `LoggerSetting` into the `ActiveLogger` used for the rest of
//! the call.
//!
//! ## Architecture
//!
//! - **`Logger`**: the capability trait. `error` is required; general messages go
//!   through `log`, which defaults to `info`, so an implementor may provide either.
//! - **`LoggerSetting`**: what the caller asks for: `Disabled`, `Standard` or
//!   `Custom(logger)`.
//! - **`ActiveLogger`**: the resolved capability, produced once by
//!   [`LoggerSetting::resolve`].
//!
//! The standard logger writes through `tracing` (`info!` / `error!`), so output
//! goes wherever the host application's subscriber sends it.
//!
//! ## Usage
//!
//! ```rust
//! use filesmith::core::logging::{Logger, LoggerSetting};
//!
//! let logger = LoggerSetting::from(false).resolve();
//! logger.log("discarded");
//! logger.error("also discarded");
//! ```
//!
use std::fmt;
use std::sync::Arc;

/// A logging capability.
pub trait Logger {
    /// Reports a failure.
    fn error(&self, message: &str);

    /// Informational message. Used only when `log` is not overridden.
    fn info(&self, _message: &str) {}

    /// General message. Preferred over `info` when an implementor provides it.
    fn log(&self, message: &str) {
        self.info(message);
    }
}

/// Caller-supplied logging setting.
#[derive(Clone, Default)]
pub enum LoggerSetting {
    /// Logging switched off; every message is discarded.
    Disabled,
    /// The process-wide facility (`tracing`).
    #[default]
    Standard,
    /// A logger supplied by the caller.
    Custom(Arc<dyn Logger + Send + Sync>),
}

impl LoggerSetting {
    /// Wraps a caller logger.
    pub fn custom<L: Logger + Send + Sync + 'static>(logger: L) -> Self {
        LoggerSetting::Custom(Arc::new(logger))
    }

    /// Resolves the setting into the logger used for one operation.
    ///
    /// | setting     | resolved      |
    /// |-------------|---------------|
    /// | `Disabled`  | no-op         |
    /// | `Standard`  | `tracing`     |
    /// | `Custom(l)` | `l`           |
    pub fn resolve(&self) -> ActiveLogger {
        match self {
            LoggerSetting::Disabled => ActiveLogger::Disabled,
            LoggerSetting::Standard => ActiveLogger::Standard,
            LoggerSetting::Custom(logger) => ActiveLogger::Custom(Arc::clone(logger)),
        }
    }
}

/// `false` disables logging; `true` selects the standard logger.
impl From<bool> for LoggerSetting {
    fn from(enabled: bool) -> Self {
        if enabled {
            LoggerSetting::Standard
        } else {
            LoggerSetting::Disabled
        }
    }
}

/// An absent flag means the standard logger.
impl From<Option<bool>> for LoggerSetting {
    fn from(flag: Option<bool>) -> Self {
        flag.map_or(LoggerSetting::Standard, LoggerSetting::from)
    }
}

impl fmt::Debug for LoggerSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerSetting::Disabled => f.write_str("Disabled"),
            LoggerSetting::Standard => f.write_str("Standard"),
            LoggerSetting::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// The logger in effect for a single `create_file` / `copy_file` call.
#[derive(Clone)]
pub enum ActiveLogger {
    Disabled,
    Standard,
    Custom(Arc<dyn Logger + Send + Sync>),
}

impl ActiveLogger {
    /// Turns the active logger back into a setting, so a nested operation
    /// (a copy performed from a content function) logs to the same place.
    pub fn to_setting(&self) -> LoggerSetting {
        match self {
            ActiveLogger::Disabled => LoggerSetting::Disabled,
            ActiveLogger::Standard => LoggerSetting::Standard,
            ActiveLogger::Custom(logger) => LoggerSetting::Custom(Arc::clone(logger)),
        }
    }
}

impl Logger for ActiveLogger {
    fn error(&self, message: &str) {
        match self {
            ActiveLogger::Disabled => {}
            ActiveLogger::Standard => tracing::error!("{}", message),
            ActiveLogger::Custom(logger) => logger.error(message),
        }
    }

    fn info(&self, message: &str) {
        self.log(message);
    }

    fn log(&self, message: &str) {
        match self {
            ActiveLogger::Disabled => {}
            ActiveLogger::Standard => tracing::info!("{}", message),
            ActiveLogger::Custom(logger) => logger.log(message),
        }
    }
}

impl fmt::Debug for ActiveLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_setting(), f)
    }
}

/// Logger that records every message, for asserting on log output in tests.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingLogger {
    pub(crate) logs: std::sync::Mutex<Vec<String>>,
    pub(crate) errors: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl RecordingLogger {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn logs(&self) -> Vec<String> {
        self.logs.lock().unwrap().clone()
    }

    pub(crate) fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl Logger for RecordingLogger {
    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn log(&self, message: &str) {
        self.logs.lock().unwrap().push(message.to_string());
    }
}
