//! Blame attribution records.
//!
//! One `Attribution` is produced per header block of a porcelain blame
//! stream, or one zero-line record per file resolved through the log fallback.

/// Lines of one file attributed to one commit by one programmer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    /// Full hash of the commit that last touched these lines
    pub commit: String,
    /// Display name of the author or committer, depending on identity
    pub author: String,
    /// Number of lines in this block (zero for log fallback records)
    pub lines: usize,
}

impl Attribution {
    pub fn new(commit: impl Into<String>, author: impl Into<String>, lines: usize) -> Self {
        Self {
            commit: commit.into(),
            author: author.into(),
            lines,
        }
    }
}
