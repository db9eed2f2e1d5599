//! Concurrent aggregation of per-file attributions.
//!
//! Each file gets one blocking task: run blame (or the log fallback), parse,
//! then merge into the shared ledger under its mutex. A semaphore bounds how
//! many tasks run at once. Every task is awaited before the ledger is handed
//! back, and any per-file failure fails the whole run.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::error::{FameError, FileFailure, Result};
use crate::fame::ledger::Ledger;
use crate::git::blame::{BlameBlocks, Identity};
use crate::git::log::parse_latest_entry;
use crate::git::source::AttributionSource;
use crate::models::Attribution;

pub struct Aggregator<S> {
    source: Arc<S>,
    identity: Identity,
    concurrency: usize,
}

impl<S: AttributionSource> Aggregator<S> {
    pub fn new(source: S, identity: Identity, concurrency: usize) -> Self {
        Self {
            source: Arc::new(source),
            identity,
            concurrency: concurrency.max(1),
        }
    }

    /// Attribute every file and return the completed ledger.
    ///
    /// Fails with `FameError::FilesFailed` after all files were attempted if
    /// any of them could not be attributed.
    pub async fn run(&self, files: Vec<String>) -> Result<Ledger> {
        let ledger = Arc::new(Mutex::new(Ledger::new()));
        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut tasks = JoinSet::new();
        let mut pending: HashSet<String> = HashSet::with_capacity(files.len());

        tracing::info!(
            "Attributing {} files with {} workers",
            files.len(),
            self.concurrency
        );

        for path in files {
            let permit = Arc::clone(&semaphore)
                .acquire_owned()
                .await
                .map_err(|_| FameError::Internal("Worker pool closed".to_string()))?;
            let source = Arc::clone(&self.source);
            let ledger = Arc::clone(&ledger);
            let identity = self.identity;
            pending.insert(path.clone());

            tasks.spawn_blocking(move || {
                let _permit = permit;
                let outcome = collect_file(source.as_ref(), &path, identity).and_then(|attributions| {
                    let mut ledger = ledger
                        .lock()
                        .map_err(|_| FameError::Internal("Lock poisoned".to_string()))?;
                    ledger.merge(&path, &attributions);
                    Ok(())
                });
                (path, outcome)
            });
        }

        let mut failures = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((path, outcome)) => {
                    pending.remove(&path);
                    if let Err(error) = outcome {
                        tracing::debug!("Failed to attribute {}: {}", path, error);
                        failures.push(FileFailure { path, error });
                    }
                }
                Err(e) => tracing::warn!("Worker task failed: {}", e),
            }
        }

        // Whatever is still pending belongs to a task that panicked or was cancelled.
        let mut lost: Vec<String> = pending.into_iter().collect();
        lost.sort();
        failures.extend(lost.into_iter().map(|path| FileFailure {
            path,
            error: FameError::Internal("Worker task failed".to_string()),
        }));

        if !failures.is_empty() {
            return Err(FameError::FilesFailed(failures));
        }

        let ledger = Arc::try_unwrap(ledger)
            .map_err(|_| FameError::Internal("Ledger still shared after join".to_string()))?
            .into_inner()
            .map_err(|_| FameError::Internal("Lock poisoned".to_string()))?;

        tracing::info!("Attributed files to {} programmers", ledger.len());
        Ok(ledger)
    }
}

/// Attribution for a single file.
///
/// An empty blame stream falls back to the most recent log entry, credited
/// with zero lines.
pub fn collect_file<S>(source: &S, path: &str, identity: Identity) -> Result<Vec<Attribution>>
where
    S: AttributionSource + ?Sized,
{
    let blame = source.blame(path)?;

    if blame.trim().is_empty() {
        let log = source.log(path)?;
        return Ok(match parse_latest_entry(&log) {
            Some(attribution) => {
                tracing::debug!("{} has no blame lines, credited via log to {}", path, attribution.author);
                vec![attribution]
            }
            None => {
                tracing::warn!("{} has neither blame lines nor log history", path);
                Vec::new()
            }
        });
    }

    let mut blocks = BlameBlocks::new(&blame, identity);
    let attributions: Vec<Attribution> = blocks.by_ref().collect();
    tracing::debug!(
        "{} parsed into {} blocks from {} commits",
        path,
        attributions.len(),
        blocks.registry().commit_count()
    );
    if blocks.stopped_early() {
        tracing::warn!(
            "Malformed blame output for {}; kept {} blocks",
            path,
            attributions.len()
        );
    }
    Ok(attributions)
}
