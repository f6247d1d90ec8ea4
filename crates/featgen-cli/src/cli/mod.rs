//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_complete::Shell;
use featgen_core::domain::Layer;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Main CLI entry-point.
///
/// There are no subcommands: the positional NAME generates a feature, and the
/// informational flags (`--list-templates`, `--show-config`, `--completions`)
/// replace it.
#[derive(Debug, Parser)]
#[command(
    name     = "featgen",
    bin_name = "featgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Scaffold a layered Flutter feature",
    long_about = "featgen generates the data/domain/presentation skeleton of a \
                  Flutter feature, registers it in index_generator.yaml and runs \
                  the index generator.",
    after_help = "EXAMPLES:\n\
        \x20 featgen \"Order History\"\n\
        \x20 featgen cart --project-root ../my_app\n\
        \x20 featgen cart --dry-run --output-format json\n\
        \x20 featgen --list-templates\n\
        \x20 featgen --list-templates --layer presentation\n\
        \x20 featgen --completions bash > ~/.local/share/bash-completion/completions/featgen",
)]
pub struct Cli {
    /// Flags shared by every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Feature name, free-form. `"Order History"`, `orderHistory` and
    /// `order_history` all produce `order_history`.
    #[arg(value_name = "NAME", help = "Feature name")]
    pub name: Option<String>,

    /// Root of the Flutter project (where index_generator.yaml lives).
    #[arg(
        short = 'C',
        long = "project-root",
        value_name = "DIR",
        default_value = ".",
        help = "Project root directory"
    )]
    pub project_root: PathBuf,

    /// Print the plan without touching the disk.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Do not run the index generator after scaffolding.
    #[arg(long = "skip-index", help = "Skip the index generator step")]
    pub skip_index: bool,

    #[arg(
        long = "list-templates",
        conflicts_with_all = ["name", "show_config", "completions"],
        help = "List the generated file templates"
    )]
    pub list_templates: bool,

    /// Restrict `--list-templates` to one layer.
    #[arg(
        long = "layer",
        value_name = "LAYER",
        value_enum,
        requires = "list_templates",
        help = "Only list templates of this layer"
    )]
    pub layer: Option<LayerArg>,

    #[arg(
        long = "show-config",
        conflicts_with_all = ["name", "completions"],
        help = "Print the effective configuration"
    )]
    pub show_config: bool,

    #[arg(
        long = "completions",
        value_name = "SHELL",
        value_enum,
        conflicts_with = "name",
        help = "Generate shell completions"
    )]
    pub completions: Option<Shell>,
}

/// Layer filter for `--list-templates`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LayerArg {
    Data,
    Domain,
    Presentation,
    /// The top-level feature barrel.
    Feature,
}

impl From<LayerArg> for Layer {
    fn from(arg: LayerArg) -> Self {
        match arg {
            LayerArg::Data => Layer::Data,
            LayerArg::Domain => Layer::Domain,
            LayerArg::Presentation => Layer::Presentation,
            LayerArg::Feature => Layer::Feature,
        }
    }
}

/// What one invocation does, decided from the parsed flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Generate(String),
    ListTemplates(Option<Layer>),
    ShowConfig,
    Completions(Shell),
    /// No name and no informational flag.
    Usage,
}

impl Cli {
    pub fn action(&self) -> Action {
        if let Some(shell) = self.completions {
            Action::Completions(shell)
        } else if self.list_templates {
            Action::ListTemplates(self.layer.map(Layer::from))
        } else if self.show_config {
            Action::ShowConfig
        } else {
            match &self.name {
                Some(name) if !name.is_empty() => Action::Generate(name.clone()),
                _ => Action::Usage,
            }
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
