//! Application error types.
//!
//! Defines `FameError` for every failure the tool can report and the crate-wide
//! `Result` alias. Per-file failures are collected by the aggregator into
//! `FilesFailed` so one bad file never hides the others.
//!
//! Malformed blame output is deliberately absent here: the parser stops early
//! and keeps what it already decoded.

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FameError {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] globset::Error),

    #[error("Repository not found: {0}")]
    RepoNotFound(String),

    #[error("Revision not found: {0}")]
    RevisionNotFound(String),

    #[error("`git {command}` failed for {path}: {stderr}")]
    Invocation {
        command: &'static str,
        path: String,
        stderr: String,
    },

    #[error("{} file(s) could not be attributed", .0.len())]
    FilesFailed(Vec<FileFailure>),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// A single file whose attribution could not be collected.
#[derive(Debug)]
pub struct FileFailure {
    pub path: String,
    pub error: FameError,
}

impl fmt::Display for FileFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.error)
    }
}

impl FameError {
    pub fn invocation(command: &'static str, path: &str, stderr: impl Into<String>) -> Self {
        Self::Invocation {
            command,
            path: path.to_string(),
            stderr: stderr.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FameError>;
