//! Deterministic ranking of the ledger.
//!
//! Records are ordered descending by the chosen metric, then descending by the
//! remaining two metrics in a fixed priority, then ascending by name. Names are
//! unique ledger keys, so the order is total.

use std::cmp::Ordering;

use clap::ValueEnum;

use crate::fame::ledger::Ledger;
use crate::models::AuthorStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OrderBy {
    #[default]
    Lines,
    Commits,
    Files,
}

impl OrderBy {
    fn compare(self, a: &AuthorStats, b: &AuthorStats) -> Ordering {
        let keys = |s: &AuthorStats| match self {
            OrderBy::Lines => (s.lines, s.commits, s.files),
            OrderBy::Commits => (s.commits, s.lines, s.files),
            OrderBy::Files => (s.files, s.lines, s.commits),
        };
        keys(b).cmp(&keys(a)).then_with(|| a.name.cmp(&b.name))
    }
}

pub fn rank(ledger: &Ledger, order_by: OrderBy) -> Vec<AuthorStats> {
    let mut records: Vec<AuthorStats> = ledger
        .iter()
        .map(|(name, entry)| AuthorStats {
            name: name.clone(),
            lines: entry.lines,
            commits: entry.commits.len(),
            files: entry.files.len(),
        })
        .collect();

    records.sort_by(|a, b| order_by.compare(a, b));
    records
}
