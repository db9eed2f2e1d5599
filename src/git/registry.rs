//! Per-file commit registry.
//!
//! Porcelain blame prints a commit's metadata only on its first group. Later
//! groups carry just the hash, so the parser remembers who each commit belongs
//! to. A registry lives for one file's parse and is never shared across tasks.

use std::collections::HashMap;

use crate::models::CommitInfo;

#[derive(Debug, Default)]
pub struct CommitRegistry {
    commits: HashMap<String, CommitInfo>,
}

impl CommitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, hash: &str) -> Option<&CommitInfo> {
        self.commits.get(hash)
    }

    /// Record a commit. The first registration wins; later calls for the same
    /// hash are ignored.
    pub fn register(&mut self, hash: &str, author: &str, lines: usize) {
        self.commits
            .entry(hash.to_string())
            .or_insert_with(|| CommitInfo {
                author: author.to_string(),
                lines,
            });
    }

    /// Number of distinct commits seen so far.
    pub fn commit_count(&self) -> usize {
        self.commits.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_registration_wins() {
        let mut registry = CommitRegistry::new();
        registry.register("abc123", "Alice", 3);
        registry.register("abc123", "Mallory", 9);

        let info = registry.get("abc123").unwrap();
        assert_eq!(info.author, "Alice");
        assert_eq!(info.lines, 3);
        assert_eq!(registry.commit_count(), 1);
    }

    #[test]
    fn unknown_hash_is_absent() {
        let registry = CommitRegistry::new();
        assert_eq!(registry.commit_count(), 0);
        assert!(registry.get("def456").is_none());
    }
}
