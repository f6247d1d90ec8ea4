//! Scaffold Service - main application orchestrator.
//!
//! A run is a linear state machine:
//!
//! ```text
//! Start ─▶ DirectoriesCreated ─▶ FilesWritten ─▶ ConfigUpdated ─▶ IndexerInvoked ─▶ Done
//!   │              │                   │               │
//!   └──────────────┴───────────────────┴───────────────┴──▶ Failed
//! ```
//!
//! Each transition is one call to [`ScaffoldRun::advance`] and yields one
//! [`StageReport`]. Nothing is rolled back: a failed run keeps whatever was
//! written and the [`RunFailure`] lists the stages that completed. The indexer
//! stage never fails the run.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, Indexer, IndexerOutcome},
    },
    domain::{
        ConfigDocument, DomainValidator as validator, FeatureLayout, FeatureName,
        INDEX_CONFIG_FILE, Registration, RegistrationStatus, ScaffoldPlan, register_feature,
    },
    error::{FeatgenError, FeatgenResult},
};

/// Position of a run in its pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    Start,
    DirectoriesCreated,
    FilesWritten,
    ConfigUpdated,
    IndexerInvoked,
    Done,
    Failed,
}

impl RunState {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::DirectoriesCreated => "directories-created",
            Self::FilesWritten => "files-written",
            Self::ConfigUpdated => "config-updated",
            Self::IndexerInvoked => "indexer-invoked",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }

    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one completed stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum StageReport {
    DirectoriesCreated {
        count: usize,
    },
    FilesWritten {
        count: usize,
        bytes: usize,
    },
    ConfigUpdated {
        path: PathBuf,
        status: RegistrationStatus,
    },
    IndexerInvoked {
        command: String,
        outcome: IndexerOutcome,
    },
}

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub feature: FeatureName,
    pub files: Vec<PathBuf>,
    pub stages: Vec<StageReport>,
}

impl RunReport {
    pub fn registration(&self) -> Option<RegistrationStatus> {
        self.stages.iter().find_map(|s| match s {
            StageReport::ConfigUpdated { status, .. } => Some(*status),
            _ => None,
        })
    }

    pub fn indexer_outcome(&self) -> Option<&IndexerOutcome> {
        self.stages.iter().find_map(|s| match s {
            StageReport::IndexerInvoked { outcome, .. } => Some(outcome),
            _ => None,
        })
    }
}

/// A run that stopped before `Done`.
///
/// `reached` is the last state entered successfully; `completed` holds the
/// reports of those stages so partial progress stays visible.
#[derive(Debug, Clone, Error)]
#[error("scaffolding '{feature}' stopped after {reached}: {error}")]
pub struct RunFailure {
    pub feature: FeatureName,
    pub reached: RunState,
    pub completed: Vec<StageReport>,
    #[source]
    pub error: FeatgenError,
}

/// Main scaffolding service.
///
/// Holds the adapters and the project-level settings shared by every run.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    indexer: Box<dyn Indexer>,
    project_root: PathBuf,
    layout: FeatureLayout,
    config_file: PathBuf,
}

impl ScaffoldService {
    /// Create a new scaffold service rooted at the current directory.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use featgen_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     filesystem, // impl Filesystem
    ///     indexer,    // impl Indexer
    /// )
    /// .with_project_root("./my_app");
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>, indexer: Box<dyn Indexer>) -> Self {
        Self {
            filesystem,
            indexer,
            project_root: PathBuf::from("."),
            layout: FeatureLayout::default(),
            config_file: PathBuf::from(INDEX_CONFIG_FILE),
        }
    }

    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = root.into();
        self
    }

    pub fn with_layout(mut self, layout: FeatureLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Config file path, relative to the project root.
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = path.into();
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn layout(&self) -> &FeatureLayout {
        &self.layout
    }

    /// Absolute-or-relative location of the index config on disk.
    pub fn config_path(&self) -> PathBuf {
        self.project_root.join(&self.config_file)
    }

    /// Build and validate the plan for `name` without touching the disk.
    pub fn plan(&self, name: &FeatureName) -> FeatgenResult<ScaffoldPlan> {
        validator::validate_layout(&self.layout)?;
        let plan = ScaffoldPlan::build_with_layout(name, &self.layout);
        validator::validate_plan(&plan)?;
        Ok(plan)
    }

    /// Begin a run positioned at [`RunState::Start`].
    pub fn start(&self, name: FeatureName) -> ScaffoldRun<'_> {
        ScaffoldRun {
            service: self,
            plan: ScaffoldPlan::build_with_layout(&name, &self.layout),
            state: RunState::Start,
            reports: Vec::new(),
        }
    }

    /// Drive a full run for `name`.
    #[instrument(
        skip_all,
        fields(
            feature = %name,
            project_root = %self.project_root.display()
        )
    )]
    pub fn scaffold(&self, name: FeatureName) -> Result<RunReport, RunFailure> {
        info!(
            snake = name.snake_case(),
            pascal = name.pascal_case(),
            "Scaffolding feature"
        );
        self.start(name).run()
    }

    /// Append the feature block to the index config.
    ///
    /// Fails with [`ApplicationError::MissingConfigFile`] when the file is
    /// absent; the file is never created. Writes nothing when the feature is
    /// already registered.
    pub fn register_in_config(&self, name: &FeatureName) -> FeatgenResult<Registration> {
        let (path, registration) = self.pending_registration(name)?;

        match &registration {
            Registration::Updated(updated) => {
                self.filesystem.write_file(&path, updated.as_str())?;
                info!(path = %path.display(), "Feature registered in index config");
            }
            Registration::Unchanged => {
                info!(path = %path.display(), "Feature already registered, config left as is");
            }
        }

        Ok(registration)
    }

    /// What [`Self::register_in_config`] would do, without writing.
    pub fn check_registration(&self, name: &FeatureName) -> FeatgenResult<RegistrationStatus> {
        self.pending_registration(name)
            .map(|(_, registration)| registration.status())
    }

    fn pending_registration(&self, name: &FeatureName) -> FeatgenResult<(PathBuf, Registration)> {
        let path = self.config_path();

        if !self.filesystem.exists(&path) {
            return Err(ApplicationError::MissingConfigFile { path }.into());
        }

        let document = ConfigDocument::new(self.filesystem.read_to_string(&path)?);
        let registration = register_feature(&document, name, &self.layout.base_path);
        Ok((path, registration))
    }

    // -------------------------------------------------------------------------
    // Stage bodies
    // -------------------------------------------------------------------------

    fn create_directories(&self, plan: &ScaffoldPlan) -> FeatgenResult<StageReport> {
        for dir in plan.directories() {
            let path = self.project_root.join(dir);
            debug!(path = %path.display(), "Creating directory");
            self.filesystem.create_dir_all(&path)?;
        }

        Ok(StageReport::DirectoriesCreated {
            count: plan.directories().len(),
        })
    }

    fn write_files(&self, plan: &ScaffoldPlan) -> FeatgenResult<StageReport> {
        let mut bytes = 0;

        for file in plan.files() {
            let path = self.project_root.join(&file.path);
            if self.filesystem.exists(&path) {
                debug!(path = %path.display(), "Overwriting existing file");
            }
            self.filesystem.write_file(&path, &file.content)?;
            bytes += file.size();
        }

        Ok(StageReport::FilesWritten {
            count: plan.files().len(),
            bytes,
        })
    }

    fn invoke_indexer(&self) -> StageReport {
        let command = self.indexer.command_line();
        let outcome = self.indexer.regenerate(&self.project_root);

        match &outcome {
            IndexerOutcome::Succeeded { .. } => info!(%command, "Indexer finished"),
            IndexerOutcome::NonZeroExit { code, .. } => {
                warn!(%command, code = ?code, "Indexer exited with failure")
            }
            IndexerOutcome::LaunchFailed { reason } => {
                warn!(%command, %reason, "Indexer could not be started")
            }
            IndexerOutcome::Skipped => debug!("Indexer skipped"),
        }

        StageReport::IndexerInvoked { command, outcome }
    }
}

/// One in-flight run. See the module docs for the state diagram.
pub struct ScaffoldRun<'a> {
    service: &'a ScaffoldService,
    plan: ScaffoldPlan,
    state: RunState,
    reports: Vec<StageReport>,
}

impl ScaffoldRun<'_> {
    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn plan(&self) -> &ScaffoldPlan {
        &self.plan
    }

    pub fn reports(&self) -> &[StageReport] {
        &self.reports
    }

    /// Perform exactly one transition and return the new state.
    ///
    /// `Done` is absorbing. Advancing a `Failed` run is an error. On failure
    /// the run moves to `Failed` and the error is returned.
    pub fn advance(&mut self) -> FeatgenResult<RunState> {
        let service = self.service;

        let step = match self.state {
            RunState::Start => validator::validate_layout(&service.layout)
                .and_then(|()| validator::validate_plan(&self.plan))
                .map_err(FeatgenError::from)
                .and_then(|()| service.create_directories(&self.plan))
                .map(|r| (RunState::DirectoriesCreated, Some(r))),
            RunState::DirectoriesCreated => service
                .write_files(&self.plan)
                .map(|r| (RunState::FilesWritten, Some(r))),
            RunState::FilesWritten => {
                let path = service.config_path();
                service
                    .register_in_config(self.plan.feature())
                    .map(|registration| {
                        let report = StageReport::ConfigUpdated {
                            path,
                            status: registration.status(),
                        };
                        (RunState::ConfigUpdated, Some(report))
                    })
            }
            RunState::ConfigUpdated => {
                Ok((RunState::IndexerInvoked, Some(service.invoke_indexer())))
            }
            RunState::IndexerInvoked | RunState::Done => Ok((RunState::Done, None)),
            RunState::Failed => Err(FeatgenError::Internal {
                message: "cannot advance a failed scaffold run".into(),
            }),
        };

        match step {
            Ok((next, report)) => {
                debug!(from = %self.state, to = %next, "Stage complete");
                self.state = next;
                self.reports.extend(report);
                Ok(next)
            }
            Err(e) => {
                warn!(at = %self.state, error = %e, "Stage failed");
                self.state = RunState::Failed;
                Err(e)
            }
        }
    }

    /// Advance until `Done`, or stop at the first failure.
    pub fn run(mut self) -> Result<RunReport, RunFailure> {
        loop {
            let before = self.state;
            match self.advance() {
                Ok(RunState::Done) => break,
                Ok(_) => continue,
                Err(error) => {
                    return Err(RunFailure {
                        feature: self.plan.feature().clone(),
                        reached: before,
                        completed: self.reports,
                        error,
                    });
                }
            }
        }

        info!("Scaffold completed successfully");
        Ok(RunReport {
            feature: self.plan.feature().clone(),
            files: self.plan.files().iter().map(|f| f.path.clone()).collect(),
            stages: self.reports,
        })
    }
}
