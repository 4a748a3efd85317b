//! Constraint validation logic.
//!
//! This module evaluates the constraints of a field rule against a single,
//! present value:
//! - NonEmptyString: text must be non-empty after trimming
//! - NumericNonNegative: value must be a finite number `>= 0`
//! - NumericRange: value must be a finite number within `[min, max]`
//! - NumericType: value must be a finite number
//!
//! Raw values quoted in messages are truncated to the configured label limit.

use crate::DataValue;
use quality_core::{truncate, Constraint, FieldRule, DEFAULT_LABEL_LIMIT};

/// Validates field constraints on individual values.
#[derive(Debug, Clone)]
pub struct ConstraintValidator {
    label_limit: usize,
}

impl ConstraintValidator {
    /// Creates a new constraint validator with the default label limit.
    pub fn new() -> Self {
        Self::with_label_limit(DEFAULT_LABEL_LIMIT)
    }

    /// Creates a constraint validator that quotes at most `limit` characters
    /// of a raw value.
    pub fn with_label_limit(limit: usize) -> Self {
        Self { label_limit: limit }
    }

    /// Checks one constraint against a present value.
    ///
    /// Returns the defect message, or `None` when the value satisfies the
    /// constraint. Absent and null values are the required check's concern
    /// and must not be passed here.
    pub fn check(
        &self,
        rule: &FieldRule,
        constraint: &Constraint,
        value: &DataValue,
    ) -> Option<String> {
        let label = rule.label();

        match constraint {
            Constraint::NonEmptyString => self.check_non_empty(label, value),
            Constraint::NumericNonNegative => match value.to_number() {
                Some(n) if n >= 0.0 => None,
                Some(_) => Some(format!("Negative {}: {}", label, self.raw(value))),
                None => Some(format!(
                    "Invalid {}: {} (must be a non-negative number)",
                    label,
                    self.raw(value)
                )),
            },
            Constraint::NumericRange { min, max } => match value.to_number() {
                Some(n) if n >= *min && n <= *max => None,
                Some(_) => Some(format!(
                    "Invalid {}: {} (must be {}-{})",
                    label,
                    self.raw(value),
                    min,
                    max
                )),
                None => Some(format!(
                    "Invalid {}: {} (not a number, must be {}-{})",
                    label,
                    self.raw(value),
                    min,
                    max
                )),
            },
            Constraint::NumericType => match value.to_number() {
                Some(_) => None,
                None => Some(format!("Non-numeric {}: {}", label, self.raw(value))),
            },
        }
    }

    fn check_non_empty(&self, label: &str, value: &DataValue) -> Option<String> {
        match value {
            DataValue::String(s) if s.trim().is_empty() => Some(format!("Empty {}", label)),
            DataValue::Map(_) | DataValue::List(_) => {
                Some(format!("Invalid {}: expected text", label))
            }
            // Numbers and booleans always have a non-empty text form
            _ => None,
        }
    }

    fn raw(&self, value: &DataValue) -> String {
        truncate(&value.to_string(), self.label_limit)
    }
}

impl Default for ConstraintValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Record;
    use pretty_assertions::assert_eq;
    use quality_core::FieldRuleBuilder;

    fn rule(field: &str) -> FieldRule {
        FieldRuleBuilder::new(field).build()
    }

    #[test]
    fn test_non_empty_string() {
        let validator = ConstraintValidator::new();
        let title = rule("title");
        let c = Constraint::NonEmptyString;

        assert_eq!(validator.check(&title, &c, &"Hat".into()), None);
        assert_eq!(
            validator.check(&title, &c, &"   ".into()),
            Some("Empty title".to_string())
        );
        assert_eq!(validator.check(&title, &c, &DataValue::Int(0)), None);
        assert_eq!(
            validator.check(&title, &c, &Record::new().with("a", 1).into()),
            Some("Invalid title: expected text".to_string())
        );
    }

    #[test]
    fn test_numeric_non_negative() {
        let validator = ConstraintValidator::new();
        let price = rule("price");
        let c = Constraint::NumericNonNegative;

        assert_eq!(validator.check(&price, &c, &DataValue::Int(0)), None);
        assert_eq!(validator.check(&price, &c, &"12.5".into()), None);
        assert_eq!(
            validator.check(&price, &c, &DataValue::Int(-5)),
            Some("Negative price: -5".to_string())
        );
        assert_eq!(
            validator.check(&price, &c, &"cheap".into()),
            Some("Invalid price: cheap (must be a non-negative number)".to_string())
        );
    }

    #[test]
    fn test_numeric_range_uses_path_label() {
        let validator = ConstraintValidator::new();
        let rate = rule("rating.rate");
        let c = Constraint::NumericRange { min: 0.0, max: 5.0 };

        assert_eq!(validator.check(&rate, &c, &DataValue::Float(5.0)), None);
        assert_eq!(validator.check(&rate, &c, &DataValue::Int(0)), None);
        assert_eq!(
            validator.check(&rate, &c, &DataValue::Int(7)),
            Some("Invalid rating: 7 (must be 0-5)".to_string())
        );
        assert_eq!(
            validator.check(&rate, &c, &"great".into()),
            Some("Invalid rating: great (not a number, must be 0-5)".to_string())
        );
    }

    #[test]
    fn test_fractional_bounds_in_message() {
        let validator = ConstraintValidator::new();
        let rate = rule("score");
        let c = Constraint::NumericRange { min: 0.5, max: 2.5 };

        assert_eq!(
            validator.check(&rate, &c, &DataValue::Float(3.25)),
            Some("Invalid score: 3.25 (must be 0.5-2.5)".to_string())
        );
    }

    #[test]
    fn test_numeric_type() {
        let validator = ConstraintValidator::new();
        let price = FieldRuleBuilder::new("price").label("cost").build();
        let c = Constraint::NumericType;

        assert_eq!(validator.check(&price, &c, &" 3 ".into()), None);
        assert_eq!(
            validator.check(&price, &c, &DataValue::Bool(true)),
            Some("Non-numeric cost: true".to_string())
        );
    }

    #[test]
    fn test_raw_value_truncated() {
        let validator = ConstraintValidator::with_label_limit(5);
        let price = rule("price");
        let long = "abcdefghij".to_string();

        assert_eq!(
            validator.check(&price, &Constraint::NumericType, &long.into()),
            Some("Non-numeric price: abcde...".to_string())
        );
    }
}
