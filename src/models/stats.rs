//! Ranked report rows.
//!
//! `AuthorStats` is what renderers consume. JSON output uses exactly the keys
//! `name`, `lines`, `commits` and `files`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorStats {
    pub name: String,
    pub lines: usize,
    pub commits: usize,
    pub files: usize,
}
