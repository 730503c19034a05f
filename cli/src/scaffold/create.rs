//! # Filesmith File Creation
//!
//! File: cli/src/scaffold/create.rs
//! Author: filesmith contributors
//!
//! **DISCLAIMER:** filesmith is pre-1.0; its public API may still change between
//! minor versions.
//!
//! ## Overview
//!
//! `create_file` materializes a batch of files described by a `FileSet`:
//!
//! 1. Resolve each key against `CreateSettings::dir` (absolute keys are kept).
//! 2. Resolve its content (`scaffold::content`), which may skip the file.
//! 3. Write it, creating parent directories as needed.
//! 4. Record the outcome, `Ok(path)` or `Err(error)`, under the original key.
//!
//! Files are processed one after another in key order. A failed write is logged,
//! recorded and does not stop the batch; only a failing content closure aborts it.
//!
//! ## Usage
//!
//! ```rust
//! use filesmith::{create_file, ContentSpec, CreateSettings, FileSet};
//! use serde_json::json;
//!
//! # fn run() -> filesmith::core::error::Result<()> {
//! # let dir = tempfile::tempdir()?;
//! let settings = CreateSettings::new()
//!     .with_dir(dir.path().to_string_lossy())
//!     .with_logger(false);
//!
//! let report = create_file(
//!     FileSet::new()
//!         .file(".nojekyll", true)
//!         .file("draft.md", false)
//!         .file("package.json", json!({"private": true})),
//!     &settings,
//! )?
//! .expect("a file set was supplied");
//!
//! assert_eq!(report.len(), 2);
//! assert!(report.path(".nojekyll").is_some());
//! assert!(report.get("draft.md").is_none());
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```
//!
use crate::common::fs::{io, paths};
use crate::core::config::CreateSettings;
use crate::core::error::Result;
use crate::core::logging::Logger;
use crate::scaffold::content::{resolve_content, ContentEnv, ContentSpec, Resolved};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Outcome of one file: its absolute path, or why it could not be written.
pub type FileOutcome = std::result::Result<PathBuf, anyhow::Error>;

/// Files requested from `create_file`.
#[derive(Debug, Default)]
pub enum FileSet {
    /// Nothing requested.
    #[default]
    None,
    /// One empty file.
    Single(String),
    /// Keys and their content, in processing order.
    Map(Vec<(String, ContentSpec)>),
}

impl FileSet {
    /// An empty mapping, to be filled with [`FileSet::file`].
    pub fn new() -> Self {
        FileSet::Map(Vec::new())
    }

    /// Appends a file. A `None` or `Single` set is turned into a mapping first.
    pub fn file(self, key: impl Into<String>, content: impl Into<ContentSpec>) -> Self {
        let mut entries = self.into_entries().unwrap_or_default();
        entries.push((key.into(), content.into()));
        FileSet::Map(entries)
    }

    /// The set as ordered entries; `None` when nothing was requested.
    fn into_entries(self) -> Option<Vec<(String, ContentSpec)>> {
        match self {
            FileSet::None => None,
            FileSet::Single(name) => Some(vec![(name, ContentSpec::Empty)]),
            FileSet::Map(entries) => Some(entries),
        }
    }
}

/// An empty name requests nothing.
impl From<&str> for FileSet {
    fn from(name: &str) -> Self {
        FileSet::from(name.to_string())
    }
}

impl From<String> for FileSet {
    fn from(name: String) -> Self {
        if name.is_empty() {
            FileSet::None
        } else {
            FileSet::Single(name)
        }
    }
}

impl<T: Into<FileSet>> From<Option<T>> for FileSet {
    fn from(file_set: Option<T>) -> Self {
        file_set.map_or(FileSet::None, Into::into)
    }
}

impl<K: Into<String>, V: Into<ContentSpec>> From<Vec<(K, V)>> for FileSet {
    fn from(entries: Vec<(K, V)>) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<ContentSpec>> FromIterator<(K, V)> for FileSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FileSet::Map(
            iter.into_iter()
                .map(|(key, content)| (key.into(), content.into()))
                .collect(),
        )
    }
}

/// Objects become mappings, strings follow the name rule, anything else requests nothing.
impl From<Value> for FileSet {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => map.into_iter().collect(),
            Value::String(name) => FileSet::from(name),
            _ => FileSet::None,
        }
    }
}

/// Per-key outcomes of one `create_file` call, in processing order.
#[derive(Debug, Default)]
pub struct CreateReport {
    entries: Vec<(String, FileOutcome)>,
}

impl CreateReport {
    fn insert(&mut self, key: String, outcome: FileOutcome) {
        // A repeated key keeps its first position and takes the latest outcome.
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = outcome,
            None => self.entries.push((key, outcome)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FileOutcome> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, outcome)| outcome)
    }

    /// Path written for `key`, if it succeeded.
    pub fn path(&self, key: &str) -> Option<&Path> {
        self.get(key)?.as_ref().ok().map(PathBuf::as_path)
    }

    /// Error recorded for `key`, if it failed.
    pub fn error(&self, key: &str) -> Option<&anyhow::Error> {
        self.get(key)?.as_ref().err()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FileOutcome)> {
        self.entries.iter().map(|(key, outcome)| (key.as_str(), outcome))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|(_, outcome)| outcome.is_err())
    }
}

impl IntoIterator for CreateReport {
    type Item = (String, FileOutcome);
    type IntoIter = std::vec::IntoIter<(String, FileOutcome)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Creates the files in `file_set`.
///
/// Returns `Ok(None)` when no files were requested (`FileSet::None`, an empty name,
/// or a JSON value that is neither an object nor a string). Otherwise returns a
/// report with one entry per file that was not skipped, possibly empty.
///
/// # Errors
///
/// Returns an `Err` when a content closure fails (files written before it stay on
/// disk) or the working directory cannot be determined. Write failures are not
/// errors: they are logged and recorded in the report.
pub fn create_file(
    file_set: impl Into<FileSet>,
    settings: &CreateSettings,
) -> Result<Option<CreateReport>> {
    let logger = settings.logger.resolve();

    let entries = match file_set.into().into_entries() {
        Some(entries) => entries,
        None => {
            logger.log("no files are specified as value of \"file_set\" parameter");
            return Ok(None);
        }
    };

    let dir = settings.dir.as_str();
    let dir_path = paths::absolute_dir(dir)?;
    debug!("Creating {} file(s) relative to {:?}", entries.len(), dir_path);

    let mut report = CreateReport::default();
    for (key, spec) in entries {
        let file_path = paths::resolve_path(dir, &key)?;
        let env = ContentEnv {
            file_path: file_path.clone(),
            dir,
            dir_path: &dir_path,
            data: settings.data.as_ref(),
            logger: &logger,
            context: settings.context.as_ref(),
        };

        let content = match resolve_content(&key, &spec, &env)? {
            Resolved::Skip => continue,
            Resolved::Write(content) => content,
        };

        match io::write_file(&file_path, &content) {
            Ok(()) => {
                logger.log(&format!("file '{}' is created", file_path.display()));
                report.insert(key, Ok(file_path));
            }
            Err(e) => {
                logger.error(&format!(
                    "cannot create file '{}'; error details -\n{:#}",
                    file_path.display(),
                    e
                ));
                report.insert(key, Err(e));
            }
        }
    }

    Ok(Some(report))
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::FilesmithError;
    use crate::core::logging::{LoggerSetting, RecordingLogger};
    use serde_json::json;
    use std::fs;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn settings_in(dir: &Path, recorder: &Arc<RecordingLogger>) -> CreateSettings {
        CreateSettings::new()
            .with_dir(dir.to_string_lossy())
            .with_logger(LoggerSetting::Custom(recorder.clone()))
    }

    #[test]
    fn test_no_files_specified() -> Result<()> {
        let dir = tempdir()?;
        let recorder = RecordingLogger::new();
        let settings = settings_in(dir.path(), &recorder);

        assert!(create_file(FileSet::None, &settings)?.is_none());
        assert!(create_file("", &settings)?.is_none());
        assert!(create_file(None::<&str>, &settings)?.is_none());
        assert!(create_file(json!(42), &settings)?.is_none());

        assert_eq!(fs::read_dir(dir.path())?.count(), 0);
        let expected = "no files are specified as value of \"file_set\" parameter";
        assert!(recorder.logs().iter().all(|l| l == expected));
        assert_eq!(recorder.logs().len(), 4);
        Ok(())
    }

    #[test]
    fn test_single_name_creates_empty_file() -> Result<()> {
        let dir = tempdir()?;
        let recorder = RecordingLogger::new();
        let report = create_file(".nojekyll", &settings_in(dir.path(), &recorder))?.unwrap();

        let expected = paths::resolve_path(&dir.path().to_string_lossy(), ".nojekyll")?;
        assert_eq!(report.path(".nojekyll"), Some(expected.as_path()));
        assert_eq!(fs::read_to_string(&expected)?, "");
        assert_eq!(
            recorder.logs(),
            vec![format!("file '{}' is created", expected.display())]
        );
        Ok(())
    }

    #[test]
    fn test_skipped_files_have_no_entry() -> Result<()> {
        let dir = tempdir()?;
        let recorder = RecordingLogger::new();
        let file_set = FileSet::new()
            .file("a.txt", false)
            .file("b.txt", "hi")
            .file("c.txt", None::<&str>);

        let report = create_file(file_set, &settings_in(dir.path(), &recorder))?.unwrap();

        assert_eq!(report.keys().collect::<Vec<_>>(), vec!["b.txt"]);
        assert!(!dir.path().join("a.txt").exists());
        assert!(!dir.path().join("c.txt").exists());
        assert_eq!(fs::read_to_string(dir.path().join("b.txt"))?, "hi");
        Ok(())
    }

    #[test]
    fn test_all_skipped_gives_empty_report() -> Result<()> {
        let dir = tempdir()?;
        let recorder = RecordingLogger::new();
        let report = create_file(FileSet::new().file("x", false), &settings_in(dir.path(), &recorder))?;
        assert!(report.unwrap().is_empty());

        let report = create_file(FileSet::new(), &settings_in(dir.path(), &recorder))?;
        assert!(report.unwrap().is_empty());
        Ok(())
    }

    #[test]
    fn test_json_content_round_trip() -> Result<()> {
        let dir = tempdir()?;
        let recorder = RecordingLogger::new();
        let value = json!({"name": "demo", "tags": ["a", "b"], "nested": {"n": 1}});
        create_file(
            FileSet::new().file("x.json", value.clone()),
            &settings_in(dir.path(), &recorder),
        )?;

        let written = fs::read_to_string(dir.path().join("x.json"))?;
        assert!(written.starts_with("{\n    \"name\": \"demo\""));
        assert_eq!(serde_json::from_str::<Value>(&written)?, value);
        Ok(())
    }

    #[test]
    fn test_write_failure_is_recorded_and_batch_continues() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("blocker"), "")?;
        let recorder = RecordingLogger::new();

        let file_set = FileSet::new()
            .file("blocker/inner.txt", "unreachable")
            .file("after.txt", "still written");
        let report = create_file(file_set, &settings_in(dir.path(), &recorder))?.unwrap();

        assert!(report.has_errors());
        assert!(report.error("blocker/inner.txt").is_some());
        assert!(report.path("after.txt").is_some());
        assert_eq!(fs::read_to_string(dir.path().join("after.txt"))?, "still written");

        let errors = recorder.errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("cannot create file '"));
        assert!(errors[0].contains("blocker"));
        Ok(())
    }

    #[test]
    fn test_content_error_aborts_batch() -> Result<()> {
        let dir = tempdir()?;
        let recorder = RecordingLogger::new();
        let file_set = FileSet::new()
            .file("first.txt", "ok")
            .file(
                "broken.txt",
                ContentSpec::derive(|file, _| {
                    Err(FilesmithError::Content {
                        file: file.to_string(),
                        reason: "template missing".into(),
                    }
                    .into())
                }),
            )
            .file("never.txt", "nope");

        let err = create_file(file_set, &settings_in(dir.path(), &recorder)).unwrap_err();

        assert!(err.to_string().contains("template missing"));
        assert!(dir.path().join("first.txt").exists());
        assert!(!dir.path().join("never.txt").exists());
        Ok(())
    }

    #[test]
    fn test_env_passed_to_content_function() -> Result<()> {
        let dir = tempdir()?;
        let recorder = RecordingLogger::new();
        let dir_str = dir.path().to_string_lossy().into_owned();
        let settings = settings_in(dir.path(), &recorder)
            .with_data(json!({"version": "1.2.3"}))
            .with_context(String::from("ctx"));

        let expected_dir = dir_str.clone();
        let file_set = FileSet::new().file(
            "sub/VERSION",
            ContentSpec::derive(move |file, env| {
                assert_eq!(file, "sub/VERSION");
                assert_eq!(env.dir, expected_dir);
                assert!(env.dir_path.is_absolute());
                assert_eq!(env.file_path, env.dir_path.join("sub/VERSION"));
                assert_eq!(env.context::<String>().map(String::as_str), Some("ctx"));
                env.logger.log("inside content function");
                Ok(env.data.map(|d| d["version"].clone()).unwrap_or(Value::Null))
            }),
        );

        let report = create_file(file_set, &settings)?.unwrap();
        assert!(report.path("sub/VERSION").is_some());
        assert_eq!(fs::read_to_string(dir.path().join("sub/VERSION"))?, "1.2.3");
        assert_eq!(
            recorder.logs()[..2],
            [
                "get content for file 'sub/VERSION' from function".to_string(),
                "inside content function".to_string(),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_absolute_key_ignores_dir() -> Result<()> {
        let base = tempdir()?;
        let elsewhere = tempdir()?;
        let recorder = RecordingLogger::new();
        let absolute = elsewhere.path().join("abs.txt");
        let key = absolute.to_string_lossy().into_owned();

        let report = create_file(
            FileSet::new().file(key.clone(), "abs"),
            &settings_in(base.path(), &recorder),
        )?
        .unwrap();

        assert_eq!(fs::read_to_string(&absolute)?, "abs");
        assert_eq!(fs::read_dir(base.path())?.count(), 0);
        assert!(report.path(&key).is_some());
        Ok(())
    }

    #[test]
    fn test_repeated_calls_are_idempotent() -> Result<()> {
        let dir = tempdir()?;
        let recorder = RecordingLogger::new();
        let build = || {
            FileSet::new()
                .file("a.txt", "alpha")
                .file("data/b.json", json!([1, 2, 3]))
        };

        let first = create_file(build(), &settings_in(dir.path(), &recorder))?.unwrap();
        let second = create_file(build(), &settings_in(dir.path(), &recorder))?.unwrap();

        for key in ["a.txt", "data/b.json"] {
            assert_eq!(first.path(key), second.path(key));
        }
        assert_eq!(fs::read_to_string(dir.path().join("a.txt"))?, "alpha");
        Ok(())
    }

    #[test]
    fn test_file_set_from_json_object_keeps_order() {
        let file_set = FileSet::from(json!({"z": true, "a": "x", "m": null}));
        match file_set {
            FileSet::Map(entries) => {
                let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
                assert_eq!(keys, vec!["z", "a", "m"]);
                assert!(entries[2].1.is_skip());
            }
            other => panic!("expected a mapping, got {:?}", other),
        }
    }
}
