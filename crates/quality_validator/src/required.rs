//! Required field validation.
//!
//! A required field must resolve to a non-null value. All missing fields of
//! one record are reported together in a single message.

use crate::Record;
use quality_core::RuleSet;

/// Rule name recorded on missing-field defects.
pub const REQUIRED_RULE: &str = "required";

/// Checks the presence of required fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredFieldValidator;

impl RequiredFieldValidator {
    /// Creates a new required field validator.
    pub fn new() -> Self {
        Self
    }

    /// Returns the required field paths missing from `record`, in declaration
    /// order.
    pub fn missing_fields<'a>(&self, rules: &'a RuleSet, record: &Record) -> Vec<&'a str> {
        rules
            .required_rules()
            .filter(|rule| record.get_present(&rule.field).is_none())
            .map(|rule| rule.field.as_str())
            .collect()
    }

    /// Checks a record, returning the `Missing fields: ...` message if any
    /// required field is absent.
    pub fn check(&self, rules: &RuleSet, record: &Record) -> Option<String> {
        let missing = self.missing_fields(rules, record);
        if missing.is_empty() {
            return None;
        }
        Some(format!("Missing fields: {}", missing.join(", ")))
    }
}
