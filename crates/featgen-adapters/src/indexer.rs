//! Indexer adapters.
//!
//! The indexer is an external code generator that rebuilds barrel files from
//! the project's index config. It is best-effort: every failure mode is
//! folded into an [`IndexerOutcome`].

use std::path::Path;
use std::process::Command;

use featgen_core::application::ports::{Indexer, IndexerOutcome};
use tracing::{debug, instrument};

/// Default executable name, as installed by `dart pub global activate`.
pub const DEFAULT_INDEXER_COMMAND: &str = "index_generator";

/// Manual fallback suggested when the indexer cannot be run.
pub const MANUAL_FALLBACK: &str = "dart pub global run index_generator";

/// Spawns the indexer as a child process in the project root and waits for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessIndexer {
    command: String,
    args: Vec<String>,
}

impl ProcessIndexer {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for ProcessIndexer {
    fn default() -> Self {
        Self::new(DEFAULT_INDEXER_COMMAND)
    }
}

impl Indexer for ProcessIndexer {
    #[instrument(skip(self), fields(command = %self.command))]
    fn regenerate(&self, project_root: &Path) -> IndexerOutcome {
        let output = Command::new(&self.command)
            .args(&self.args)
            .current_dir(project_root)
            .output();

        match output {
            Ok(o) if o.status.success() => {
                debug!("indexer exited cleanly");
                IndexerOutcome::Succeeded {
                    stdout: String::from_utf8_lossy(&o.stdout).trim().to_string(),
                }
            }
            Ok(o) => IndexerOutcome::NonZeroExit {
                code: o.status.code(),
                stderr: String::from_utf8_lossy(&o.stderr).trim().to_string(),
            },
            Err(e) => IndexerOutcome::LaunchFailed {
                reason: e.to_string(),
            },
        }
    }

    fn command_line(&self) -> String {
        std::iter::once(self.command.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Used for `--skip-index`: the indexer stage reports `Skipped`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkippedIndexer;

impl Indexer for SkippedIndexer {
    fn regenerate(&self, _project_root: &Path) -> IndexerOutcome {
        IndexerOutcome::Skipped
    }

    fn command_line(&self) -> String {
        "(skipped)".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_joins_args() {
        let indexer = ProcessIndexer::new("dart").with_args(["pub", "global", "run", "index_generator"]);
        assert_eq!(indexer.command_line(), "dart pub global run index_generator");
        assert_eq!(ProcessIndexer::default().command_line(), DEFAULT_INDEXER_COMMAND);
    }

    #[test]
    fn missing_binary_is_a_launch_failure() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = ProcessIndexer::new("featgen-test-no-such-indexer").regenerate(dir.path());
        assert!(matches!(outcome, IndexerOutcome::LaunchFailed { .. }));
        assert!(outcome.is_warning());
    }

    #[cfg(unix)]
    #[test]
    fn exit_codes_are_reported() {
        let dir = tempfile::tempdir().unwrap();

        let ok = ProcessIndexer::new("sh").with_args(["-c", "echo indexed"]);
        assert_eq!(
            ok.regenerate(dir.path()),
            IndexerOutcome::Succeeded {
                stdout: "indexed".into()
            }
        );

        let failing = ProcessIndexer::new("sh").with_args(["-c", "echo broken >&2; exit 3"]);
        assert_eq!(
            failing.regenerate(dir.path()),
            IndexerOutcome::NonZeroExit {
                code: Some(3),
                stderr: "broken".into()
            }
        );
    }

    #[cfg(unix)]
    #[test]
    fn runs_in_project_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker.txt"), "").unwrap();
        let outcome = ProcessIndexer::new("sh")
            .with_args(["-c", "test -f marker.txt"])
            .regenerate(dir.path());
        assert!(outcome.is_success());
    }

    #[test]
    fn skipped_never_runs() {
        assert_eq!(
            SkippedIndexer.regenerate(Path::new("/nonexistent")),
            IndexerOutcome::Skipped
        );
    }
}
