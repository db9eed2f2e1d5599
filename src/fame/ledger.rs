//! Per-programmer ownership ledger.
//!
//! Entries are created on first contribution and never removed. `lines` is a
//! plain sum, while `commits` and `files` grow only on new membership, so
//! merging is commutative and associative per programmer.

use std::collections::{HashMap, HashSet};

use crate::models::Attribution;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgrammerEntry {
    pub lines: usize,
    pub commits: HashSet<String>,
    pub files: HashSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: HashMap<String, ProgrammerEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit every attribution of `path` to its programmer.
    ///
    /// Callers sharing a ledger must hold its lock for the whole call.
    pub fn merge(&mut self, path: &str, attributions: &[Attribution]) {
        for attribution in attributions {
            let entry = self.entries.entry(attribution.author.clone()).or_default();
            entry.lines += attribution.lines;
            entry.commits.insert(attribution.commit.clone());
            entry.files.insert(path.to_string());
        }
    }

    pub fn get(&self, name: &str) -> Option<&ProgrammerEntry> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ProgrammerEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
