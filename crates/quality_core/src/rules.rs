//! Rule set types and structures.
//!
//! This module contains the declarative rule model: a [`RuleSet`] groups
//! [`FieldRule`]s, and each rule carries zero or more [`Constraint`]s that
//! are evaluated against a single field value.

use crate::{Result, RuleError};
use serde::{Deserialize, Serialize};

/// Default field used to identify a record in reports.
pub const DEFAULT_IDENTIFIER_FIELD: &str = "id";

/// Default field used to label a record in reports.
pub const DEFAULT_LABEL_FIELD: &str = "title";

/// A named collection of field rules.
///
/// A `RuleSet` is the unit handed to the validation engine. Rules are kept in
/// declaration order, which drives the order of defect messages and of the
/// summary entries in the report.
///
/// # Example
///
/// ```rust
/// use quality_core::{Constraint, FieldRule, RuleSet};
///
/// let rules = RuleSet {
///     name: "products".to_string(),
///     version: "1.0.0".to_string(),
///     description: None,
///     identifier: None,
///     label: None,
///     rules: vec![FieldRule {
///         field: "title".to_string(),
///         required: true,
///         label: None,
///         description: None,
///         constraints: vec![Constraint::NonEmptyString],
///     }],
/// };
///
/// assert!(rules.validate_definition().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Unique name identifying this rule set
    pub name: String,

    /// Semantic version of the rule set (e.g., "1.0.0")
    #[serde(default = "default_version")]
    pub version: String,

    /// Human-readable description
    #[serde(default)]
    pub description: Option<String>,

    /// Field holding the record identifier (defaults to `id`)
    #[serde(default)]
    pub identifier: Option<String>,

    /// Field holding the record label shown in reports (defaults to `title`)
    #[serde(default)]
    pub label: Option<String>,

    /// Field rules in declaration order
    #[serde(default)]
    pub rules: Vec<FieldRule>,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

impl RuleSet {
    /// Returns the identifier field path.
    pub fn identifier_field(&self) -> &str {
        self.identifier
            .as_deref()
            .unwrap_or(DEFAULT_IDENTIFIER_FIELD)
    }

    /// Returns the label field path.
    pub fn label_field(&self) -> &str {
        self.label.as_deref().unwrap_or(DEFAULT_LABEL_FIELD)
    }

    /// Returns the rules marked as required, in declaration order.
    pub fn required_rules(&self) -> impl Iterator<Item = &FieldRule> {
        self.rules.iter().filter(|rule| rule.required)
    }

    /// Returns the number of constraints across all rules.
    pub fn constraint_count(&self) -> usize {
        self.rules.iter().map(|rule| rule.constraints.len()).sum()
    }

    /// Checks that the rule set itself is well-formed.
    ///
    /// This never looks at data. It rejects definitions that can not be
    /// evaluated, such as a `numeric_range` whose minimum exceeds its maximum.
    pub fn validate_definition(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(RuleError::EmptyName);
        }

        validate_path(self.identifier_field())?;
        validate_path(self.label_field())?;

        for rule in &self.rules {
            rule.validate_definition()?;
        }

        Ok(())
    }
}

/// A single field rule.
///
/// Declares which field is checked, whether it must be present, and the
/// constraints its value must satisfy when it is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRule {
    /// Field path, dotted for nested access (e.g., `rating.rate`)
    pub field: String,

    /// Whether the field must resolve to a non-null value
    #[serde(default)]
    pub required: bool,

    /// Display label used in defect messages
    #[serde(default)]
    pub label: Option<String>,

    /// Optional human-readable description
    #[serde(default)]
    pub description: Option<String>,

    /// Constraints evaluated when the field is present
    #[serde(default)]
    pub constraints: Vec<Constraint>,
}

impl FieldRule {
    /// Returns the label used in messages.
    ///
    /// Falls back to the first segment of the field path, so `rating.rate`
    /// is reported as `rating`.
    pub fn label(&self) -> &str {
        match &self.label {
            Some(label) if !label.trim().is_empty() => label,
            _ => self.field.split('.').next().unwrap_or(&self.field),
        }
    }

    /// Returns the segments of the field path.
    pub fn path_segments(&self) -> impl Iterator<Item = &str> {
        self.field.split('.')
    }

    /// Checks that this rule is well-formed.
    pub fn validate_definition(&self) -> Result<()> {
        validate_path(&self.field)?;

        for constraint in &self.constraints {
            constraint.validate_definition(&self.field)?;
        }

        Ok(())
    }
}

/// Constraints that can be applied to a field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Constraint {
    /// Value must be text that is non-empty after trimming
    NonEmptyString,

    /// Value must be a finite number greater than or equal to zero
    NumericNonNegative,

    /// Value must be a finite number within the inclusive range
    NumericRange {
        /// Minimum value (inclusive)
        min: f64,
        /// Maximum value (inclusive)
        max: f64,
    },

    /// Value must parse as a finite number
    NumericType,
}

impl Constraint {
    /// Returns the constraint kind as written in rule files.
    pub fn kind(&self) -> &'static str {
        match self {
            Constraint::NonEmptyString => "non_empty_string",
            Constraint::NumericNonNegative => "numeric_non_negative",
            Constraint::NumericRange { .. } => "numeric_range",
            Constraint::NumericType => "numeric_type",
        }
    }

    /// Returns true if the constraint requires a numeric value.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Constraint::NonEmptyString)
    }

    fn validate_definition(&self, field: &str) -> Result<()> {
        if let Constraint::NumericRange { min, max } = self {
            if !min.is_finite() || !max.is_finite() {
                return Err(RuleError::non_finite_bound(field));
            }
            if min > max {
                return Err(RuleError::invalid_range(field, *min, *max));
            }
        }
        Ok(())
    }
}

/// Rejects empty paths and paths with empty segments (`a..b`, `.a`).
fn validate_path(path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(RuleError::EmptyFieldPath);
    }
    if path.split('.').any(|segment| segment.trim().is_empty()) {
        return Err(RuleError::InvalidFieldPath(path.to_string()));
    }
    Ok(())
}
