//! Run configuration with the same defaults as the command line.

use std::path::PathBuf;

use crate::error::Result;
use crate::fame::OrderBy;
use crate::filter::FileFilter;
use crate::git::Identity;
use crate::render::Format;

/// Everything one run needs, already parsed into typed values.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path inside the repository to analyze
    pub repository: PathBuf,
    /// Revision whose tree is attributed
    pub revision: String,
    /// Metric the report is sorted by
    pub order_by: OrderBy,
    /// Credit committers instead of authors
    pub use_committer: bool,
    pub format: Format,
    /// File suffixes to keep, e.g. `.rs`
    pub extensions: Vec<String>,
    /// Language names mapped to suffixes
    pub languages: Vec<String>,
    /// Globs of files to drop
    pub exclude: Vec<String>,
    /// Globs of files to keep; empty keeps all
    pub restrict_to: Vec<String>,
    /// Maximum files attributed at once
    pub concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repository: PathBuf::from("."),
            revision: "HEAD".to_string(),
            order_by: OrderBy::Lines,
            use_committer: false,
            format: Format::Tabular,
            extensions: Vec::new(),
            languages: Vec::new(),
            exclude: Vec::new(),
            restrict_to: Vec::new(),
            concurrency: 16,
        }
    }
}

impl Config {
    pub fn identity(&self) -> Identity {
        Identity::from_use_committer(self.use_committer)
    }

    pub fn file_filter(&self) -> Result<FileFilter> {
        FileFilter::new(
            &self.extensions,
            &self.languages,
            &self.exclude,
            &self.restrict_to,
        )
    }
}
