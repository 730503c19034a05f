//! # Filesmith Content Resolution
//!
//! File: cli/src/scaffold/content.rs
//! Author: filesmith contributors
//!
//! **DISCLAIMER:** filesmith is pre-1.0; its public API may still change between
//! minor versions.
//!
//! ## Overview
//!
//! Every file in a file set comes with a content specification. This module turns
//! that specification into the text written to disk, or decides the file must not
//! be created at all.
//!
//! ## Architecture
//!
//! Raw values are first **classified** into a closed `ContentSpec`:
//!
//! | raw value            | `ContentSpec`       | written content          |
//! |----------------------|---------------------|--------------------------|
//! | `false`              | `Skip(False)`       | nothing (file skipped)   |
//! | `null` / absent      | `Skip(Null)`        | nothing (file skipped)   |
//! | `true`               | `Empty`             | `""`                     |
//! | object / array       | `Json(value)`       | JSON, 4-space indented   |
//! | string               | `Text(s)`           | `s`                      |
//! | number               | `Text(n)`           | the number's text (`0` → `"0"`) |
//! | closure              | `Derive(f)`         | whatever `f` returns, classified again |
//!
//! `resolve_content` then applies the table. A `Derive` closure is called exactly
//! once with the file key and a `ContentEnv`; its return value is a plain
//! `serde_json::Value`, so it cannot hand back another closure. An `Err` returned by
//! the closure propagates to the caller.
//!
//! ## Usage
//!
//! ```rust
//! use filesmith::scaffold::ContentSpec;
//! use serde_json::json;
//!
//! let specs = vec![
//!     ContentSpec::from(true),
//!     ContentSpec::from("hello"),
//!     ContentSpec::from(json!({"name": "demo"})),
//!     ContentSpec::derive(|file, env| Ok(json!(format!("{} in {}", file, env.dir)))),
//! ];
//! assert_eq!(specs.len(), 4);
//! ```
//!
use crate::core::error::Result;
use crate::core::logging::{ActiveLogger, Logger};
use serde::Serialize;
use serde_json::Value;
use std::any::Any;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Closure producing the content of one file from its key and environment.
pub type ContentFn = Box<dyn Fn(&str, &ContentEnv<'_>) -> Result<Value>>;

/// Which value asked for the file to be skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipFlag {
    False,
    Null,
}

impl fmt::Display for SkipFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipFlag::False => f.write_str("false"),
            SkipFlag::Null => f.write_str("null"),
        }
    }
}

/// Classified content specification of one file.
pub enum ContentSpec {
    /// Do not create the file.
    Skip(SkipFlag),
    /// Create the file with no content.
    Empty,
    /// Ask a closure for the content.
    Derive(ContentFn),
    /// Write the value as pretty-printed JSON.
    Json(Value),
    /// Write the text as is.
    Text(String),
}

impl ContentSpec {
    /// Classifies a raw value.
    pub fn classify(value: Value) -> Self {
        match value {
            Value::Null => ContentSpec::Skip(SkipFlag::Null),
            Value::Bool(false) => ContentSpec::Skip(SkipFlag::False),
            Value::Bool(true) => ContentSpec::Empty,
            Value::String(text) => ContentSpec::Text(text),
            Value::Number(number) => ContentSpec::Text(number_text(&number)),
            structured @ (Value::Array(_) | Value::Object(_)) => ContentSpec::Json(structured),
        }
    }

    /// Content produced by `produce` when the file is materialized.
    pub fn derive<F>(produce: F) -> Self
    where
        F: Fn(&str, &ContentEnv<'_>) -> Result<Value> + 'static,
    {
        ContentSpec::Derive(Box::new(produce))
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, ContentSpec::Skip(_))
    }
}

/// Integers print without a fraction; other numbers print like `f64` does,
/// so `1.0` becomes `"1"` and `0.5` stays `"0.5"`.
fn number_text(number: &serde_json::Number) -> String {
    if let Some(int) = number.as_i64() {
        int.to_string()
    } else if let Some(uint) = number.as_u64() {
        uint.to_string()
    } else {
        number
            .as_f64()
            .map_or_else(|| number.to_string(), |float| float.to_string())
    }
}

impl fmt::Debug for ContentSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentSpec::Skip(flag) => f.debug_tuple("Skip").field(flag).finish(),
            ContentSpec::Empty => f.write_str("Empty"),
            ContentSpec::Derive(_) => f.write_str("Derive(..)"),
            ContentSpec::Json(value) => f.debug_tuple("Json").field(value).finish(),
            ContentSpec::Text(text) => f.debug_tuple("Text").field(text).finish(),
        }
    }
}

impl From<Value> for ContentSpec {
    fn from(value: Value) -> Self {
        ContentSpec::classify(value)
    }
}

impl From<bool> for ContentSpec {
    fn from(flag: bool) -> Self {
        ContentSpec::classify(Value::Bool(flag))
    }
}

impl From<&str> for ContentSpec {
    fn from(text: &str) -> Self {
        ContentSpec::Text(text.to_string())
    }
}

impl From<String> for ContentSpec {
    fn from(text: String) -> Self {
        ContentSpec::Text(text)
    }
}

impl From<i64> for ContentSpec {
    fn from(number: i64) -> Self {
        ContentSpec::Text(number.to_string())
    }
}

impl From<i32> for ContentSpec {
    fn from(number: i32) -> Self {
        ContentSpec::Text(number.to_string())
    }
}

impl From<u64> for ContentSpec {
    fn from(number: u64) -> Self {
        ContentSpec::Text(number.to_string())
    }
}

impl From<f64> for ContentSpec {
    fn from(number: f64) -> Self {
        ContentSpec::Text(number.to_string())
    }
}

/// `None` skips the file.
impl<T: Into<ContentSpec>> From<Option<T>> for ContentSpec {
    fn from(value: Option<T>) -> Self {
        value.map_or(ContentSpec::Skip(SkipFlag::Null), Into::into)
    }
}

/// Read-only context handed to a `Derive` closure.
pub struct ContentEnv<'a> {
    /// Absolute path the file will be written to.
    pub file_path: PathBuf,
    /// Base directory exactly as configured; may be empty.
    pub dir: &'a str,
    /// Absolute form of `dir`.
    pub dir_path: &'a Path,
    /// Caller data from `CreateSettings::data`.
    pub data: Option<&'a Value>,
    /// Logger active for the current operation.
    pub logger: &'a ActiveLogger,
    pub(crate) context: Option<&'a Arc<dyn Any + Send + Sync>>,
}

impl ContentEnv<'_> {
    /// The caller's `CreateSettings::context`, if set and of type `T`.
    pub fn context<T: Any>(&self) -> Option<&T> {
        self.context.and_then(|context| (**context).downcast_ref::<T>())
    }
}

/// Outcome of content resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// The file must not be created.
    Skip,
    /// Write this text.
    Write(String),
}

/// Resolves the content of file `key`, logging through `env.logger`.
///
/// # Errors
///
/// Returns an `Err` only when a `Derive` closure fails.
pub fn resolve_content(key: &str, spec: &ContentSpec, env: &ContentEnv<'_>) -> Result<Resolved> {
    let resolved = match spec {
        ContentSpec::Derive(produce) => {
            env.logger
                .log(&format!("get content for file '{}' from function", key));
            // A classified value is never `Derive`, so this recursion ends here.
            let derived = ContentSpec::classify(produce(key, env)?);
            return resolve_content(key, &derived, env);
        }
        ContentSpec::Skip(flag) => {
            env.logger.log(&format!(
                "skip flag '{}' is set for file '{}' so it is not created",
                flag, key
            ));
            Resolved::Skip
        }
        ContentSpec::Empty => Resolved::Write(String::new()),
        ContentSpec::Json(value) => Resolved::Write(pretty_json(value)?),
        ContentSpec::Text(text) => Resolved::Write(text.clone()),
    };
    Ok(resolved)
}

/// JSON with 4-space indentation, keys in insertion order.
fn pretty_json(value: &Value) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(buffer)?)
}
