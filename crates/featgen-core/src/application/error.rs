//! Application layer errors.
//!
//! These errors represent failures in orchestration, not planning logic.
//! Planning errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while applying a scaffold plan.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The index generator config does not exist. It is never created.
    #[error("Index config not found: {path}")]
    MissingConfigFile { path: PathBuf },

    /// Filesystem adapter state was poisoned.
    #[error("Filesystem state lock poisoned")]
    FilesystemLocked,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before the failure were kept; re-run after fixing the cause".into(),
            ],
            Self::MissingConfigFile { path } => vec![
                format!("Expected an index generator config at {}", path.display()),
                "Run featgen from the project root, or pass --project-root".into(),
                "Create the file first; featgen only appends to an existing config".into(),
                "Generated feature files were kept and will be overwritten on re-run".into(),
            ],
            Self::FilesystemLocked => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::FilesystemLocked => ErrorCategory::Internal,
            Self::MissingConfigFile { .. } => ErrorCategory::Configuration,
        }
    }
}
