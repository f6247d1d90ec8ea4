//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `featgen-adapters` crate provides implementations.

use std::path::Path;

use serde::Serialize;

use crate::error::FeatgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `featgen_adapters::filesystem::LocalFilesystem` (production)
/// - `featgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Contract
///
/// - `create_dir_all` succeeds when the directory already exists
/// - `write_file` overwrites an existing file without merging
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> FeatgenResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> FeatgenResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> FeatgenResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the external barrel-file indexer.
///
/// Implemented by:
/// - `featgen_adapters::indexer::ProcessIndexer` (spawns the tool)
/// - `featgen_adapters::indexer::SkippedIndexer` (`--skip-index`)
///
/// Indexing is best-effort: implementations report failures through
/// [`IndexerOutcome`] instead of returning errors.
#[cfg_attr(test, mockall::automock)]
pub trait Indexer: Send + Sync {
    /// Regenerate barrel files for the project at `project_root`.
    fn regenerate(&self, project_root: &Path) -> IndexerOutcome;

    /// Human-readable command line, for messages.
    fn command_line(&self) -> String;
}

/// Result of one indexer invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IndexerOutcome {
    /// Exit code zero.
    Succeeded { stdout: String },
    /// The tool ran but reported failure. `code` is `None` when killed by a
    /// signal.
    NonZeroExit { code: Option<i32>, stderr: String },
    /// The tool could not be started (usually not installed).
    LaunchFailed { reason: String },
    /// Indexing was disabled for this run.
    Skipped,
}

impl IndexerOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    /// `true` for outcomes that should be surfaced as warnings.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::NonZeroExit { .. } | Self::LaunchFailed { .. })
    }
}
