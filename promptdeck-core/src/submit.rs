//! Submission sinks: where a submitted prompt ends up.
//!
//! The page never waits on or inspects a sink. A failing sink is logged by
//! the caller and otherwise ignored.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{PromptDeckError, Result};

/// Receives submitted prompts
pub trait SubmitSink: Send + Sync {
    fn submit(&self, prompt: &str) -> Result<()>;
}

/// Diagnostic sink: records the prompt as a tracing event
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl SubmitSink for LogSink {
    fn submit(&self, prompt: &str) -> Result<()> {
        tracing::info!(prompt = %prompt, "submit prompt");
        Ok(())
    }
}

/// One line in a JSONL submission log
#[derive(Debug, Serialize)]
pub struct SubmissionRecord<'a> {
    pub submitted_at: DateTime<Utc>,
    pub prompt: &'a str,
}

/// Appends every submission as a JSON line
#[derive(Debug)]
pub struct JsonlSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl JsonlSink {
    /// Open (or create) the log file for appending
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
        })
    }
}

impl SubmitSink for JsonlSink {
    fn submit(&self, prompt: &str) -> Result<()> {
        let record = SubmissionRecord {
            submitted_at: Utc::now(),
            prompt,
        };
        let mut line = serde_json::to_string(&record)
            .map_err(|e| PromptDeckError::json("submission record", e))?;
        line.push('\n');

        // A poisoned lock only means another submit panicked mid-write
        let mut file = self.file.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        file.write_all(line.as_bytes())?;
        file.flush()?;

        tracing::debug!(path = %self.path.display(), "submission appended");
        Ok(())
    }
}
