//! `featgen --show-config`

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(config)?;
        return Ok(());
    }

    output.info(&format!(
        "Default config file: {}",
        AppConfig::config_path().display()
    ))?;
    let toml = config.to_toml().map_err(|e| CliError::ConfigError {
        message: format!("could not render configuration: {e}"),
        source: Some(Box::new(e)),
    })?;
    output.print(toml.trim_end())?;

    Ok(())
}
