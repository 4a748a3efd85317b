//! Builder pattern for creating rule sets.
//!
//! This module provides ergonomic builders for constructing rule sets
//! and field rules with a fluent API, plus the default product listing rules.

use crate::{Constraint, FieldRule, RuleSet};

/// Builder for creating a `RuleSet`.
///
/// # Example
///
/// ```rust
/// use quality_core::{Constraint, FieldRuleBuilder, RuleSetBuilder};
///
/// let rules = RuleSetBuilder::new("products")
///     .description("Product listing checks")
///     .rule(
///         FieldRuleBuilder::new("price")
///             .required(true)
///             .constraint(Constraint::NumericNonNegative)
///             .build(),
///     )
///     .build();
///
/// assert_eq!(rules.rules.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    name: String,
    version: Option<String>,
    description: Option<String>,
    identifier: Option<String>,
    label: Option<String>,
    rules: Vec<FieldRule>,
}

impl RuleSetBuilder {
    /// Creates a new rule set builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the rule set version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the rule set description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the identifier field.
    pub fn identifier(mut self, field: impl Into<String>) -> Self {
        self.identifier = Some(field.into());
        self
    }

    /// Sets the label field.
    pub fn label(mut self, field: impl Into<String>) -> Self {
        self.label = Some(field.into());
        self
    }

    /// Adds a rule.
    pub fn rule(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds multiple rules.
    pub fn rules(mut self, rules: Vec<FieldRule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Builds the rule set.
    ///
    /// The definition is not checked here; the engine checks it before
    /// processing records.
    pub fn build(self) -> RuleSet {
        RuleSet {
            name: self.name,
            version: self.version.unwrap_or_else(|| "1.0.0".to_string()),
            description: self.description,
            identifier: self.identifier,
            label: self.label,
            rules: self.rules,
        }
    }
}

/// Builder for creating a `FieldRule`.
#[derive(Debug, Default)]
pub struct FieldRuleBuilder {
    field: String,
    required: bool,
    label: Option<String>,
    description: Option<String>,
    constraints: Vec<Constraint>,
}

impl FieldRuleBuilder {
    /// Creates a new field rule builder for a (possibly dotted) field path.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ..Default::default()
        }
    }

    /// Sets whether the field is required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the label used in messages.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the rule description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a constraint.
    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Builds the field rule.
    pub fn build(self) -> FieldRule {
        FieldRule {
            field: self.field,
            required: self.required,
            label: self.label,
            description: self.description,
            constraints: self.constraints,
        }
    }
}

/// Default rules for a product listing.
///
/// `id`, `title`, `price` and `rating` are required; titles must be
/// non-empty, prices non-negative and `rating.rate` within 0-5.
pub fn product_rules() -> RuleSet {
    RuleSetBuilder::new("product_listing")
        .description("Product listing data quality checks")
        .identifier("id")
        .label("title")
        .rule(FieldRuleBuilder::new("id").required(true).build())
        .rule(
            FieldRuleBuilder::new("title")
                .required(true)
                .constraint(Constraint::NonEmptyString)
                .build(),
        )
        .rule(
            FieldRuleBuilder::new("price")
                .required(true)
                .constraint(Constraint::NumericNonNegative)
                .build(),
        )
        .rule(FieldRuleBuilder::new("rating").required(true).build())
        .rule(
            FieldRuleBuilder::new("rating.rate")
                .constraint(Constraint::NumericRange { min: 0.0, max: 5.0 })
                .build(),
        )
        .build()
}
