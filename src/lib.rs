//! git-fame: per-programmer ownership statistics for a git tree.
//!
//! Files at a revision are blamed concurrently, each porcelain stream is
//! parsed into per-commit line counts, and the results are merged into one
//! ledger of lines, distinct commits and distinct files per programmer. The
//! ledger is then ranked deterministically and rendered.

pub mod config;
pub mod error;
pub mod fame;
pub mod filter;
pub mod git;
pub mod models;
pub mod render;

pub use config::Config;
pub use error::{FameError, FileFailure, Result};
pub use models::AuthorStats;

use fame::{rank, Aggregator};
use git::{GitCli, GitRepository};

/// Discover, filter, attribute and rank the files selected by `config`.
///
/// Returns `FameError::FilesFailed` without a report if any file failed.
pub async fn report(config: &Config) -> Result<Vec<AuthorStats>> {
    let filter = config.file_filter()?;

    let (files, source) = {
        let repo = GitRepository::open(&config.repository)?;
        let files = filter.apply(repo.list_files(&config.revision)?);
        (files, GitCli::new(repo.workdir(), &config.revision))
    };

    let ledger = Aggregator::new(source, config.identity(), config.concurrency)
        .run(files)
        .await?;

    Ok(rank(&ledger, config.order_by))
}
