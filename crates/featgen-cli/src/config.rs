//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate only receives the values it needs
//! (a `FeatureLayout`, a config file path, an indexer).
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied at the call-site, not here)
//! 2. Environment variables: `FEATGEN_INDEX__COMMAND=fvm`
//! 3. Config file: `--config <FILE>`, or [`AppConfig::config_path`]
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, Map};
use featgen_adapters::{DEFAULT_INDEXER_COMMAND, ProcessIndexer};
use featgen_core::domain::{FeatureLayout, INDEX_CONFIG_FILE};
use serde::{Deserialize, Serialize};
use tracing::debug;

const ENV_PREFIX: &str = "FEATGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub layout: LayoutConfig,
    pub index: IndexConfig,
    pub output: OutputConfig,
}

/// Where features are generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub base_path: String,
    pub test_base_path: String,
}

/// The index config file and the tool that consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Relative to the project root.
    pub config_file: PathBuf,
    pub command: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_path: FeatureLayout::DEFAULT_BASE_PATH.into(),
            test_base_path: FeatureLayout::DEFAULT_TEST_BASE_PATH.into(),
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            config_file: PathBuf::from(INDEX_CONFIG_FILE),
            command: DEFAULT_INDEXER_COMMAND.into(),
            args: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, file and environment.
    ///
    /// A file passed via `--config` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> Result<Self, config::ConfigError> {
        let (path, required) = match config_file {
            Some(p) => (p.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        Self::load_with_env(&path, required, None)
    }

    /// `env` replaces the process environment when set.
    fn load_with_env(
        path: &Path,
        required: bool,
        env: Option<Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from(path).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(" ")
                    .with_list_parse_key("index.args")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.featgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "featgen", "featgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".featgen.toml"))
    }

    pub fn feature_layout(&self) -> FeatureLayout {
        FeatureLayout::new(&self.layout.base_path, &self.layout.test_base_path)
    }

    pub fn indexer(&self) -> ProcessIndexer {
        ProcessIndexer::new(&self.index.command).with_args(self.index.args.iter().cloned())
    }

    /// Effective configuration as TOML, for `--show-config`.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
