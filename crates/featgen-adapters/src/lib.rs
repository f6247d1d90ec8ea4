//! Infrastructure adapters for featgen.
//!
//! This crate implements the ports defined in `featgen-core::application::ports`.
//! All process spawning and disk I/O lives here.

pub mod filesystem;
pub mod indexer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use indexer::{DEFAULT_INDEXER_COMMAND, MANUAL_FALLBACK, ProcessIndexer, SkippedIndexer};
