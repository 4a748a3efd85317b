use anyhow::{anyhow, Context, Result};
use quality_core::product_rules;
use quality_parser::{detect_format, RuleFormat};
use std::path::Path;
use tracing::info;

use crate::output;

pub async fn execute(
    output_path: Option<&str>,
    name: Option<String>,
    description: Option<String>,
) -> Result<()> {
    info!("Initializing rule set from the product listing defaults");

    let mut rules = product_rules();
    if let Some(name) = name {
        rules.name = name;
    }
    if let Some(description) = description {
        rules.description = Some(description);
    }

    let format = match output_path {
        Some(path) => detect_format(Path::new(path))
            .with_context(|| format!("Cannot write rule set to {}", path))?,
        None => RuleFormat::Yaml,
    };

    let content = match format {
        RuleFormat::Yaml => {
            serde_yaml_ng::to_string(&rules).context("Failed to serialize rule set to YAML")?
        }
        RuleFormat::Toml => {
            toml::to_string_pretty(&rules).context("Failed to serialize rule set to TOML")?
        }
        RuleFormat::Json => serde_json::to_string_pretty(&rules)
            .context("Failed to serialize rule set to JSON")?,
    };

    match output_path {
        Some(path) => {
            if Path::new(path).exists() {
                return Err(anyhow!("Refusing to overwrite existing file: {}", path));
            }
            tokio::fs::write(path, content)
                .await
                .with_context(|| format!("Failed to write rule set file: {}", path))?;
            output::print_success(&format!(
                "Rule set '{}' written to {}",
                rules.name, path
            ));
        }
        None => print!("{}", content),
    }

    Ok(())
}
