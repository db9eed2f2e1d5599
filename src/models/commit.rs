/// Commit metadata resolved the first time a commit appears in a blame stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    pub author: String,
    pub lines: usize,
}
