use anyhow::{Context, Result};
use quality_parser::parse_file;
use std::path::Path;
use tracing::info;

use crate::output;

pub async fn execute(rules_path: &str, format: &str) -> Result<()> {
    info!("Checking rule set: {}", rules_path);

    let path = Path::new(rules_path);
    let rules = parse_file(path)
        .with_context(|| format!("Failed to parse rule set file: {}", rules_path))?;

    rules
        .validate_definition()
        .with_context(|| format!("Rule set '{}' is invalid", rules.name))?;

    match format {
        "json" => return output::print_json(&rules),
        "yaml" => return output::print_yaml(&rules),
        _ => {}
    }

    output::print_info(&format!(
        "Rule set loaded: {} v{}",
        rules.name, rules.version
    ));
    output::print_success("Rule set is valid");

    println!("\nRule Set Summary:");
    println!("  Name:        {}", rules.name);
    println!("  Version:     {}", rules.version);
    println!(
        "  Description: {}",
        rules.description.as_deref().unwrap_or("N/A")
    );
    println!("  Identifier:  {}", rules.identifier_field());
    println!("  Label:       {}", rules.label_field());
    println!("  Rules:       {}", rules.rules.len());
    println!("  Constraints: {}", rules.constraint_count());

    if !rules.rules.is_empty() {
        println!("\nRules:");
        for rule in &rules.rules {
            let mut parts = Vec::new();
            if rule.required {
                parts.push("required".to_string());
            }
            parts.extend(rule.constraints.iter().map(|c| c.kind().to_string()));
            println!("  - {} [{}]", rule.field, parts.join(", "));
        }
    }

    Ok(())
}
