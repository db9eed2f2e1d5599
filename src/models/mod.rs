//! Data records shared between the parser, the engine and the renderers.
//!
//! - `blame`: Attribution tuples emitted by the blame parser
//! - `commit`: CommitInfo cached per file by the commit registry
//! - `stats`: AuthorStats rows of the final ranked report

pub mod blame;
pub mod commit;
pub mod stats;

pub use blame::*;
pub use commit::*;
pub use stats::*;
