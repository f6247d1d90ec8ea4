//! Feature generation: `featgen <NAME>`.
//!
//! Responsibility: build the service from config and flags, run (or plan)
//! the scaffold, and report each stage. Stages that completed before a
//! failure are still reported so a partial run is visible.

use std::path::PathBuf;

use featgen_adapters::{LocalFilesystem, MANUAL_FALLBACK, SkippedIndexer};
use featgen_core::{
    application::{Indexer, IndexerOutcome, RunReport, ScaffoldService, StageReport},
    domain::{FeatureName, RegistrationStatus, ScaffoldPlan},
};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Inputs resolved from the command line.
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    pub name: String,
    pub project_root: PathBuf,
    pub dry_run: bool,
    pub skip_index: bool,
}

#[instrument(skip_all, fields(feature = %args.name))]
pub fn execute(args: GenerateArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let name = FeatureName::new(&args.name);
    let service = build_service(&args, config);

    debug!(
        snake = name.snake_case(),
        pascal = name.pascal_case(),
        root = %args.project_root.display(),
        dry_run = args.dry_run,
        "Resolved feature"
    );

    if args.dry_run {
        let plan = service.plan(&name)?;
        return render_plan(&service, &plan, output);
    }

    output.header(&format!(
        "Scaffolding feature '{}' ({})",
        name,
        name.snake_case()
    ))?;

    match service.scaffold(name) {
        Ok(report) => render_report(&service, &report, output),
        Err(failure) => {
            if !output.is_json() {
                render_stages(&failure.completed, output)?;
            }
            Err(CliError::RunFailed(failure))
        }
    }
}

fn build_service(args: &GenerateArgs, config: &AppConfig) -> ScaffoldService {
    let indexer: Box<dyn Indexer> = if args.skip_index {
        Box::new(SkippedIndexer)
    } else {
        Box::new(config.indexer())
    };

    ScaffoldService::new(Box::new(LocalFilesystem::new()), indexer)
        .with_project_root(&args.project_root)
        .with_layout(config.feature_layout())
        .with_config_file(&config.index.config_file)
}

fn render_report(
    service: &ScaffoldService,
    report: &RunReport,
    output: &OutputManager,
) -> CliResult<()> {
    if output.is_json() {
        output.json(report)?;
        return Ok(());
    }

    render_stages(&report.stages, output)?;
    output.success(&format!(
        "\u{1f389} Feature '{}' is ready at {}",
        report.feature,
        service
            .project_root()
            .join(service.layout().feature_root(&report.feature))
            .display()
    ))?;
    Ok(())
}

fn render_stages(stages: &[StageReport], output: &OutputManager) -> CliResult<()> {
    for stage in stages {
        match stage {
            StageReport::DirectoriesCreated { count } => {
                output.success(&format!("Created {count} directories"))?;
            }
            StageReport::FilesWritten { count, bytes } => {
                output.success(&format!("Wrote {count} files ({bytes} bytes)"))?;
            }
            StageReport::ConfigUpdated { path, status } => match status {
                RegistrationStatus::Registered => {
                    output.success(&format!("Registered feature in {}", path.display()))?;
                }
                RegistrationStatus::AlreadyRegistered => {
                    output.info(&format!(
                        "Feature already registered in {}, left unchanged",
                        path.display()
                    ))?;
                }
            },
            StageReport::IndexerInvoked { command, outcome } => {
                render_indexer(command, outcome, output)?;
            }
        }
    }
    Ok(())
}

fn render_indexer(command: &str, outcome: &IndexerOutcome, output: &OutputManager) -> CliResult<()> {
    match outcome {
        IndexerOutcome::Succeeded { .. } => output.success(&format!("Ran {command}"))?,
        IndexerOutcome::NonZeroExit { code, stderr } => {
            let code = code.map_or_else(|| "a signal".to_string(), |c| format!("code {c}"));
            output.warning(&format!("{command} exited with {code}"))?;
            for line in stderr.lines() {
                output.print(&format!("    {line}"))?;
            }
        }
        IndexerOutcome::LaunchFailed { reason } => {
            output.warning(&format!("Could not run {command}: {reason}"))?;
            output.info(&format!("Run it manually: {MANUAL_FALLBACK}"))?;
        }
        IndexerOutcome::Skipped => output.info("Skipped index generation")?,
    }
    Ok(())
}

/// JSON shape of a dry run.
#[derive(Serialize)]
struct DryRun<'a> {
    dry_run: bool,
    project_root: &'a std::path::Path,
    config_file: PathBuf,
    config_file_exists: bool,
    /// `None` when the config file is absent.
    registration: Option<RegistrationStatus>,
    plan: &'a ScaffoldPlan,
}

fn render_plan(service: &ScaffoldService, plan: &ScaffoldPlan, output: &OutputManager) -> CliResult<()> {
    let config_file = service.config_path();
    let registration = match service.check_registration(plan.feature()) {
        Ok(status) => Some(status),
        Err(e) if e.is_missing_config() => None,
        Err(e) => return Err(e.into()),
    };

    if output.is_json() {
        output.json(&DryRun {
            dry_run: true,
            project_root: service.project_root(),
            config_file,
            config_file_exists: registration.is_some(),
            registration,
            plan,
        })?;
        return Ok(());
    }

    output.header(&format!(
        "Dry run: feature '{}' ({})",
        plan.feature(),
        plan.feature().snake_case()
    ))?;
    output.info(&format!(
        "Would create {} directories under {}",
        plan.directories().len(),
        service.project_root().display()
    ))?;
    output.info(&format!("Would write {} files:", plan.files().len()))?;
    for file in plan.files() {
        output.bullet(&file.path.display().to_string())?;
    }

    match registration {
        Some(RegistrationStatus::Registered) => {
            output.info(&format!("Would register the feature in {}", config_file.display()))?;
        }
        Some(RegistrationStatus::AlreadyRegistered) => {
            output.info(&format!(
                "Feature already registered in {}, would leave it unchanged",
                config_file.display()
            ))?;
        }
        None => {
            output.warning(&format!(
                "{} does not exist; a real run would stop after writing files",
                config_file.display()
            ))?;
        }
    }
    Ok(())
}
