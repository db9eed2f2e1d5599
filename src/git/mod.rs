pub mod blame;
pub mod log;
pub mod registry;
pub mod repository;
pub mod source;

pub use blame::{parse_porcelain, BlameBlocks, Identity};
pub use registry::CommitRegistry;
pub use repository::GitRepository;
pub use source::{AttributionSource, GitCli};
