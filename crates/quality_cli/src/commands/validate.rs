use anyhow::{Context, Result};
use quality_core::{product_rules, RuleSet, ValidationOptions};
use quality_parser::load_rules;
use quality_validator::{DataSet, DataValidator};
use std::path::Path;
use tracing::{info, warn};

use crate::output::{self, Sample};

pub async fn execute(
    records_path: &str,
    rules_path: Option<&str>,
    options: ValidationOptions,
    sample_size: Option<usize>,
    format: &str,
) -> Result<()> {
    info!("Validating records: {}", records_path);

    let rules = rules(rules_path)?;
    if format == "text" {
        output::print_info(&format!(
            "Rule set loaded: {} v{} ({} rules)",
            rules.name,
            rules.version,
            rules.rules.len()
        ));
    }

    let content = tokio::fs::read_to_string(records_path)
        .await
        .with_context(|| format!("Failed to read records file: {}", records_path))?;
    let dataset = DataSet::from_json_str(&content)
        .with_context(|| format!("Failed to decode records file: {}", records_path))?;

    let all = dataset.as_slice();
    let (records, sample) = match sample_size {
        Some(size) if size < all.len() => {
            warn!("Checking only the first {} of {} records", size, all.len());
            (
                &all[..size],
                Some(Sample {
                    checked: size,
                    total: all.len(),
                }),
            )
        }
        _ => (all, None),
    };

    let validator = DataValidator::with_options(options);
    let report = validator
        .validate(records, &rules)
        .with_context(|| format!("Rule set '{}' is invalid", rules.name))?;

    output::print_validation_report(&report, sample, format)?;

    if !report.passed() {
        std::process::exit(1);
    }

    Ok(())
}

fn rules(rules_path: Option<&str>) -> Result<RuleSet> {
    match rules_path {
        Some(path) => load_rules(Path::new(path))
            .with_context(|| format!("Failed to load rule set file: {}", path)),
        None => {
            info!("No rule set given, using the product listing rules");
            Ok(product_rules())
        }
    }
}
