//! Main validation engine.
//!
//! This module provides the `DataValidator` that runs the required-fields
//! check and every constraint of a rule set over a batch of records, and
//! assembles the resulting [`Report`].

use crate::{
    ConstraintValidator, DataSet, Record, RequiredFieldValidator, SummaryBuilder, REQUIRED_RULE,
};
use quality_core::{
    truncate, CheckId, Defect, DefectGroup, Report, Result, RuleSet, Totals, ValidationOptions,
};
use tracing::{debug, info};

/// Identifier shown for records without an identifier value.
pub const UNKNOWN_IDENTIFIER: &str = "Unknown";

/// Main validation engine for record batches.
///
/// The engine is stateless between calls: the same records and rules always
/// produce an equal report.
///
/// # Example
///
/// ```rust
/// use quality_core::product_rules;
/// use quality_validator::{DataValidator, Record};
///
/// let records = vec![
///     Record::new()
///         .with("id", 2)
///         .with("title", "Shirt")
///         .with("price", -5)
///         .with("rating", Record::new().with("rate", 3)),
/// ];
///
/// let report = DataValidator::new().validate(&records, &product_rules()).unwrap();
///
/// assert!(!report.passed());
/// assert_eq!(report.defective_records[0].defects[0].message, "Negative price: -5");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DataValidator {
    options: ValidationOptions,
}

impl DataValidator {
    /// Creates a new data validator with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a data validator with the given options.
    pub fn with_options(options: ValidationOptions) -> Self {
        Self { options }
    }

    /// Returns the options in use.
    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Validates a batch of records against a rule set.
    ///
    /// The rule set is checked first; a malformed definition is returned as
    /// an error before any record is looked at. Data problems never fail the
    /// call, they are reported as defects. Every record in `records` ends up
    /// either valid or defective.
    pub fn validate(&self, records: &[Record], rules: &RuleSet) -> Result<Report> {
        self.validate_definition(rules)?;

        info!(
            "Validating {} records against rule set '{}'",
            records.len(),
            rules.name
        );

        let identifier_field = self
            .options
            .identifier_field
            .as_deref()
            .unwrap_or(rules.identifier_field());
        let label_field = self
            .options
            .label_field
            .as_deref()
            .unwrap_or(rules.label_field());

        let required = RequiredFieldValidator::new();
        let constraints = ConstraintValidator::with_label_limit(self.options.label_limit);
        let mut summary = SummaryBuilder::new(rules);
        let mut defective_records = Vec::new();

        for (index, record) in records.iter().enumerate() {
            let defects = self.check_record(index, record, rules, &required, &constraints);
            summary.record(&defects);

            if defects.is_empty() {
                continue;
            }

            debug!(record = index, defects = defects.len(), "Record has defects");
            defective_records.push(DefectGroup {
                index,
                identifier: self.identifier(record, identifier_field),
                label: self.label(record, label_field),
                defects,
            });
        }

        let totals = Totals {
            records: records.len(),
            valid: records.len() - defective_records.len(),
            defects_count: defective_records.len(),
        };

        info!(
            "Validation finished: {} valid, {} defective",
            totals.valid, totals.defects_count
        );

        Ok(Report {
            rule_set: rules.name.clone(),
            totals,
            summary: summary.build(),
            defective_records,
        })
    }

    /// Validates every record of a dataset.
    pub fn validate_dataset(&self, dataset: &DataSet, rules: &RuleSet) -> Result<Report> {
        self.validate(dataset.as_slice(), rules)
    }

    /// Validates only the rule set definition (no data).
    pub fn validate_definition(&self, rules: &RuleSet) -> Result<()> {
        rules.validate_definition()?;
        debug!(
            "Rule set '{}' is well-formed ({} rules, {} constraints)",
            rules.name,
            rules.rules.len(),
            rules.constraint_count()
        );
        Ok(())
    }

    /// Collects all defects of one record: missing fields first, then
    /// constraint violations in declaration order.
    fn check_record(
        &self,
        index: usize,
        record: &Record,
        rules: &RuleSet,
        required: &RequiredFieldValidator,
        constraints: &ConstraintValidator,
    ) -> Vec<Defect> {
        let mut defects = Vec::new();

        if let Some(message) = required.check(rules, record) {
            defects.push(Defect {
                record: index,
                rule: REQUIRED_RULE.to_string(),
                check: CheckId::RequiredFields,
                message,
            });
        }

        let mut category = 0;
        for rule in &rules.rules {
            let value = record.get_present(&rule.field);
            for constraint in &rule.constraints {
                let check = CheckId::Constraint(category);
                category += 1;

                // Absent fields are only the required check's concern
                let Some(value) = value else { continue };
                if let Some(message) = constraints.check(rule, constraint, value) {
                    defects.push(Defect {
                        record: index,
                        rule: rule.field.clone(),
                        check,
                        message,
                    });
                }
            }
        }

        defects
    }

    fn identifier(&self, record: &Record, field: &str) -> String {
        record
            .get_present(field)
            .map(|value| truncate(&value.to_string(), self.options.label_limit))
            .unwrap_or_else(|| UNKNOWN_IDENTIFIER.to_string())
    }

    fn label(&self, record: &Record, field: &str) -> String {
        record
            .get_present(field)
            .map(|value| truncate(&value.to_string(), self.options.label_limit))
            .unwrap_or_else(|| format!("No {}", field))
    }
}

/// Validates records against a rule set with default options.
///
/// Shorthand for `DataValidator::new().validate(records, rules)`.
pub fn validate(records: &[Record], rules: &RuleSet) -> Result<Report> {
    DataValidator::new().validate(records, rules)
}
