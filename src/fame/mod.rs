//! Ownership aggregation engine.
//!
//! - `ledger`: per-programmer lines, commit set and file set
//! - `aggregate`: bounded concurrent attribution of a file list into a ledger
//! - `ranking`: total, deterministic ordering of the ledger

pub mod aggregate;
pub mod ledger;
pub mod ranking;

pub use aggregate::{collect_file, Aggregator};
pub use ledger::{Ledger, ProgrammerEntry};
pub use ranking::{rank, OrderBy};
