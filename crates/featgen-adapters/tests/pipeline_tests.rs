//! End-to-end scaffold runs against the real adapters.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use featgen_adapters::{LocalFilesystem, MemoryFilesystem, ProcessIndexer, SkippedIndexer};
use featgen_core::{
    application::{Indexer, IndexerOutcome, RunState, ScaffoldService},
    domain::{FeatureName, INDEX_CONFIG_FILE, RegistrationStatus, ScaffoldPlan},
};

const CONFIG: &str = "\
index_generator:
  page_width: 80
  libraries:
    - directory_path: lib/src/core
      file_name: core
";

/// Records the directory it was asked to index.
#[derive(Clone, Default)]
struct RecordingIndexer {
    calls: Arc<Mutex<Vec<PathBuf>>>,
}

impl Indexer for RecordingIndexer {
    fn regenerate(&self, project_root: &Path) -> IndexerOutcome {
        self.calls.lock().unwrap().push(project_root.to_path_buf());
        IndexerOutcome::Succeeded {
            stdout: String::new(),
        }
    }

    fn command_line(&self) -> String {
        "recording-indexer".into()
    }
}

fn project_with_config() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(INDEX_CONFIG_FILE), CONFIG).unwrap();
    dir
}

#[test]
fn scaffold_writes_every_planned_file_to_disk() {
    let project = project_with_config();
    let indexer = RecordingIndexer::default();
    let service = ScaffoldService::new(Box::new(LocalFilesystem), Box::new(indexer.clone()))
        .with_project_root(project.path());

    let name = FeatureName::new("Order History");
    let report = service.scaffold(name.clone()).unwrap();

    let plan = ScaffoldPlan::build(&name);
    for dir in plan.directories() {
        assert!(project.path().join(dir).is_dir(), "missing {}", dir.display());
    }
    for file in plan.files() {
        let on_disk = std::fs::read_to_string(project.path().join(&file.path)).unwrap();
        assert_eq!(on_disk, file.content);
    }

    assert_eq!(report.registration(), Some(RegistrationStatus::Registered));
    assert_eq!(*indexer.calls.lock().unwrap(), vec![project.path().to_path_buf()]);
}

#[test]
fn rerun_overwrites_files_and_registers_once() {
    let project = project_with_config();
    let service = ScaffoldService::new(Box::new(LocalFilesystem), Box::new(SkippedIndexer))
        .with_project_root(project.path());

    let entity = project
        .path()
        .join("lib/src/features/order_history/domain/entities/order_history_entity.dart");

    service.scaffold(FeatureName::new("Order History")).unwrap();
    let first = std::fs::read_to_string(&entity).unwrap();

    std::fs::write(&entity, "hand edited").unwrap();

    let second = service.scaffold(FeatureName::new("Order History")).unwrap();
    assert_eq!(
        second.registration(),
        Some(RegistrationStatus::AlreadyRegistered)
    );
    assert_eq!(std::fs::read_to_string(&entity).unwrap(), first);

    let config = std::fs::read_to_string(project.path().join(INDEX_CONFIG_FILE)).unwrap();
    assert_eq!(config.matches("# FEATURE : ORDER_HISTORY").count(), 1);
    assert!(config.starts_with(CONFIG.trim_end()));
}

#[test]
fn missing_config_is_not_created_and_files_remain() {
    let project = tempfile::tempdir().unwrap();
    let service = ScaffoldService::new(Box::new(LocalFilesystem), Box::new(SkippedIndexer))
        .with_project_root(project.path());

    let failure = service.scaffold(FeatureName::new("cart")).unwrap_err();

    assert!(failure.error.is_missing_config());
    assert_eq!(failure.reached, RunState::FilesWritten);
    assert!(!project.path().join(INDEX_CONFIG_FILE).exists());
    assert!(
        project
            .path()
            .join("lib/src/features/cart/cart.dart")
            .is_file()
    );
}

#[test]
fn indexer_launch_failure_still_succeeds() {
    let project = project_with_config();
    let service = ScaffoldService::new(
        Box::new(LocalFilesystem),
        Box::new(ProcessIndexer::new("featgen-test-no-such-indexer")),
    )
    .with_project_root(project.path());

    let report = service.scaffold(FeatureName::new("cart")).unwrap();
    assert!(matches!(
        report.indexer_outcome(),
        Some(IndexerOutcome::LaunchFailed { .. })
    ));
}

#[test]
fn memory_filesystem_counts_overwrites() {
    let fs = MemoryFilesystem::new().with_file(INDEX_CONFIG_FILE, CONFIG);
    let service = ScaffoldService::new(Box::new(fs.clone()), Box::new(SkippedIndexer))
        .with_project_root("");

    let name = FeatureName::new("cart");
    let files = ScaffoldPlan::build(&name).files().len();

    service.scaffold(name.clone()).unwrap();
    assert_eq!(fs.write_count(), files + 1);

    service.scaffold(name).unwrap();
    assert_eq!(fs.write_count(), 2 * files + 1);

    let config = fs.read_file(Path::new(INDEX_CONFIG_FILE)).unwrap();
    assert_eq!(config.matches("# FEATURE : CART").count(), 1);
}
