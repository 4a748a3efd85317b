//! Parser for rule set files (YAML/TOML/JSON formats).
//!
//! This module provides functionality to parse rule sets from YAML, TOML and
//! JSON files into the strongly-typed `RuleSet` structure.
//!
//! # Example
//!
//! ```rust
//! use quality_parser::parse_yaml;
//!
//! let yaml = r#"
//! name: product_listing
//! rules:
//!   - field: title
//!     required: true
//!     constraints:
//!       - type: non_empty_string
//!   - field: rating.rate
//!     constraints:
//!       - type: numeric_range
//!         min: 0
//!         max: 5
//! "#;
//!
//! let rules = parse_yaml(yaml).expect("Failed to parse rule set");
//! assert_eq!(rules.name, "product_listing");
//! assert_eq!(rules.rules[1].label(), "rating");
//! ```

use quality_core::{RuleError, RuleSet};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during rule set parsing.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// JSON parsing or deserialization failed
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,

    /// The file parsed but the rule set is malformed
    #[error("Invalid rule set: {0}")]
    InvalidRules(#[from] RuleError),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported rule set file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
    /// JSON format (.json)
    Json,
}

/// Parse a rule set from a YAML string.
pub fn parse_yaml(content: &str) -> Result<RuleSet> {
    let rules: RuleSet = serde_yaml_ng::from_str(content)?;
    Ok(rules)
}

/// Parse a rule set from a TOML string.
///
/// # Example
///
/// ```rust
/// use quality_parser::parse_toml;
///
/// let toml = r#"
/// name = "product_listing"
///
/// [[rules]]
/// field = "price"
/// required = true
///
/// [[rules.constraints]]
/// type = "numeric_non_negative"
/// "#;
///
/// let rules = parse_toml(toml).unwrap();
/// assert_eq!(rules.rules[0].constraints.len(), 1);
/// ```
pub fn parse_toml(content: &str) -> Result<RuleSet> {
    let rules: RuleSet =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    Ok(rules)
}

/// Parse a rule set from a JSON string.
pub fn parse_json(content: &str) -> Result<RuleSet> {
    let rules: RuleSet = serde_json::from_str(content)?;
    Ok(rules)
}

/// Detect the rule set format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `RuleFormat::Yaml`
/// * `.toml` → `RuleFormat::Toml`
/// * `.json` → `RuleFormat::Json`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<RuleFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(RuleFormat::Yaml),
        "toml" => Ok(RuleFormat::Toml),
        "json" => Ok(RuleFormat::Json),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a rule set string in the given format.
pub fn parse_str(content: &str, format: RuleFormat) -> Result<RuleSet> {
    match format {
        RuleFormat::Yaml => parse_yaml(content),
        RuleFormat::Toml => parse_toml(content),
        RuleFormat::Json => parse_json(content),
    }
}

/// Parse a rule set from a file with automatic format detection.
///
/// # Example
///
/// ```no_run
/// use quality_parser::parse_file;
/// use std::path::Path;
///
/// let rules = parse_file(Path::new("rules/products.yml")).unwrap();
/// println!("Loaded rule set: {}", rules.name);
/// ```
pub fn parse_file(path: &Path) -> Result<RuleSet> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    debug!("Parsing {:?} rule set from {}", format, path.display());
    parse_str(&content, format)
}

/// Parse a rule set file and check its definition.
///
/// A rule set that parses but cannot be evaluated (for example an inverted
/// `numeric_range`) is returned as `ParserError::InvalidRules`.
pub fn load_rules(path: &Path) -> Result<RuleSet> {
    let rules = parse_file(path)?;
    rules.validate_definition()?;
    Ok(rules)
}
