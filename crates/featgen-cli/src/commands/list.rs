//! `featgen --list-templates [--layer <LAYER>]`

use featgen_core::{application::TemplateService, domain::Layer};

use crate::{error::CliResult, output::OutputManager};

pub fn execute(layer: Option<Layer>, output: &OutputManager) -> CliResult<()> {
    let service = TemplateService::new();
    let templates = match layer {
        Some(layer) => service.list_layer(layer),
        None => service.list(),
    };

    if output.is_json() {
        output.json(&templates)?;
        return Ok(());
    }

    output.header("Templates (paths relative to the feature root):")?;
    let width = templates
        .iter()
        .map(|t| t.role.as_str().len())
        .max()
        .unwrap_or(0);

    for t in &templates {
        output.bullet(&format!(
            "{:<width$}  {:<13} {}",
            t.role.as_str(),
            t.layer.as_str(),
            t.path,
        ))?;
        output.print(&format!("    {}", t.description))?;
    }

    Ok(())
}
