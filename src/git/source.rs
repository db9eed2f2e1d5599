//! Attribution stream sources.
//!
//! The aggregator never talks to git directly; it asks an `AttributionSource`
//! for raw blame and log text. `GitCli` runs the `git` binary against a
//! repository at a fixed revision. Tests substitute in-memory sources.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{FameError, Result};

pub trait AttributionSource: Send + Sync + 'static {
    /// Raw `git blame --porcelain` output for `path`. May be empty.
    fn blame(&self, path: &str) -> Result<String>;

    /// Raw log output for `path`, most recent entry first.
    fn log(&self, path: &str) -> Result<String>;
}

/// Runs `git` as a subprocess in the repository's working directory.
#[derive(Debug, Clone)]
pub struct GitCli {
    repository: PathBuf,
    revision: String,
}

impl GitCli {
    pub fn new<P: AsRef<Path>>(repository: P, revision: &str) -> Self {
        Self {
            repository: repository.as_ref().to_path_buf(),
            revision: revision.to_string(),
        }
    }

    fn run(&self, command: &'static str, path: &str, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .current_dir(&self.repository)
            .arg(command)
            .args(args)
            .arg(&self.revision)
            .arg("--")
            .arg(path)
            .output()
            .map_err(|e| FameError::invocation(command, path, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(FameError::invocation(command, path, stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl AttributionSource for GitCli {
    fn blame(&self, path: &str) -> Result<String> {
        self.run("blame", path, &["--porcelain"])
    }

    fn log(&self, path: &str) -> Result<String> {
        self.run("log", path, &["--no-color", "-n", "1"])
    }
}
