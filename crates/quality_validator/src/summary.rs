//! Summary entries for a validation run.
//!
//! The summary is derived from the same per-record defects that populate the
//! report, so a record counted against a category here always carries a
//! defect of that category.

use quality_core::{CheckId, Constraint, Defect, RuleSet, SummaryEntry};

/// Name of the required-fields summary entry.
pub const REQUIRED_CHECK_NAME: &str = "Records with complete data";

/// Name of the terminal summary entry.
pub const OVERALL_CHECK_NAME: &str = "Overall data quality";

/// One constraint category: a single constraint of a single rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    /// Label of the owning rule
    pub label: String,
    /// The constraint
    pub constraint: Constraint,
    /// Whether the owning rule has other constraints too
    pub shared: bool,
}

impl Category {
    /// Name of the summary entry for this category.
    ///
    /// Categories of a rule with several constraints carry the constraint
    /// kind so that their entries stay distinct.
    pub fn name(&self) -> String {
        if self.shared {
            format!("Records with valid {} ({})", self.label, self.constraint.kind())
        } else {
            format!("Records with valid {}", self.label)
        }
    }

    fn entry(&self, failures: usize) -> SummaryEntry {
        let label = &self.label;
        let message = match (&self.constraint, failures) {
            (Constraint::NonEmptyString, 0) => format!("All records have a non-empty {}", label),
            (Constraint::NonEmptyString, n) => format!("{} records with empty {}", n, label),
            (Constraint::NumericNonNegative, 0) => {
                format!("All records have a non-negative {}", label)
            }
            (Constraint::NumericNonNegative, n) => {
                format!("{} records with negative or invalid {}", n, label)
            }
            (Constraint::NumericRange { min, max }, 0) => {
                format!("All records have a valid {} ({}-{})", label, min, max)
            }
            (Constraint::NumericRange { min, max }, n) => {
                format!("{} records with invalid {} (must be {}-{})", n, label, min, max)
            }
            (Constraint::NumericType, 0) => format!("All records have a numeric {}", label),
            (Constraint::NumericType, n) => format!("{} records with non-numeric {}", n, label),
        };
        SummaryEntry::new(self.name(), failures == 0, message)
    }
}

/// Lists the constraint categories of a rule set in declaration order.
///
/// The position of a category in this list is the index carried by
/// [`CheckId::Constraint`].
pub fn categories(rules: &RuleSet) -> Vec<Category> {
    rules
        .rules
        .iter()
        .flat_map(|rule| {
            let shared = rule.constraints.len() > 1;
            rule.constraints.iter().map(move |constraint| Category {
                label: rule.label().to_string(),
                constraint: constraint.clone(),
                shared,
            })
        })
        .collect()
}

/// Tallies per-record defects into summary entries.
#[derive(Debug, Clone)]
pub struct SummaryBuilder {
    categories: Vec<Category>,
    missing: usize,
    failures: Vec<usize>,
    defective: usize,
}

impl SummaryBuilder {
    /// Creates a builder for the categories of `rules`.
    pub fn new(rules: &RuleSet) -> Self {
        let categories = categories(rules);
        let failures = vec![0; categories.len()];
        Self {
            categories,
            missing: 0,
            failures,
            defective: 0,
        }
    }

    /// Counts one record given all of its defects.
    ///
    /// A record counts at most once per category, however many defects of
    /// that category it has.
    pub fn record(&mut self, defects: &[Defect]) {
        if defects.is_empty() {
            return;
        }
        self.defective += 1;

        if defects.iter().any(|d| d.check == CheckId::RequiredFields) {
            self.missing += 1;
        }
        for (index, count) in self.failures.iter_mut().enumerate() {
            if defects.iter().any(|d| d.check == CheckId::Constraint(index)) {
                *count += 1;
            }
        }
    }

    /// Builds the entries: required fields, each category, then overall.
    pub fn build(self) -> Vec<SummaryEntry> {
        let mut entries = Vec::with_capacity(self.categories.len() + 2);

        entries.push(match self.missing {
            0 => SummaryEntry::new(REQUIRED_CHECK_NAME, true, "All records have required fields"),
            n => SummaryEntry::new(
                REQUIRED_CHECK_NAME,
                false,
                format!("{} records missing required fields", n),
            ),
        });

        entries.extend(
            self.categories
                .iter()
                .zip(&self.failures)
                .map(|(category, failures)| category.entry(*failures)),
        );

        entries.push(match self.defective {
            0 => SummaryEntry::new(OVERALL_CHECK_NAME, true, "All records passed validation"),
            n => SummaryEntry::new(
                OVERALL_CHECK_NAME,
                false,
                format!("{} records have data quality issues", n),
            ),
        });

        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quality_core::{product_rules, FieldRuleBuilder, RuleSetBuilder};

    fn defect(check: CheckId) -> Defect {
        Defect {
            record: 0,
            rule: "test".to_string(),
            check,
            message: "bad".to_string(),
        }
    }

    #[test]
    fn test_categories_follow_declaration_order() {
        let names: Vec<String> = categories(&product_rules())
            .iter()
            .map(Category::name)
            .collect();
        assert_eq!(
            names,
            vec![
                "Records with valid title",
                "Records with valid price",
                "Records with valid rating",
            ]
        );
    }

    #[test]
    fn test_rule_with_several_constraints_gets_distinct_names() {
        let rules = RuleSetBuilder::new("inventory")
            .rule(
                FieldRuleBuilder::new("stock")
                    .label("stock level")
                    .constraint(Constraint::NumericType)
                    .constraint(Constraint::NumericNonNegative)
                    .build(),
            )
            .build();

        let mut builder = SummaryBuilder::new(&rules);
        builder.record(&[defect(CheckId::Constraint(1))]);
        let entries = builder.build();

        assert_eq!(entries[1].name, "Records with valid stock level (numeric_type)");
        assert!(entries[1].passed);
        assert_eq!(
            entries[2].name,
            "Records with valid stock level (numeric_non_negative)"
        );
        assert!(!entries[2].passed);
    }

    #[test]
    fn test_all_passed() {
        let entries = SummaryBuilder::new(&product_rules()).build();

        assert_eq!(entries.len(), 5);
        assert!(entries.iter().all(|e| e.passed));
        assert_eq!(entries[0].name, REQUIRED_CHECK_NAME);
        assert_eq!(entries[3].message, "All records have a valid rating (0-5)");
        assert_eq!(entries[4].name, OVERALL_CHECK_NAME);
    }

    #[test]
    fn test_record_counted_once_per_category() {
        let mut builder = SummaryBuilder::new(&product_rules());
        builder.record(&[defect(CheckId::Constraint(1)), defect(CheckId::Constraint(1))]);
        builder.record(&[defect(CheckId::RequiredFields)]);
        builder.record(&[]);

        let entries = builder.build();
        assert_eq!(entries[0].message, "1 records missing required fields");
        assert!(entries[1].passed);
        assert_eq!(entries[2].message, "1 records with negative or invalid price");
        assert!(!entries[2].passed);
        assert_eq!(entries[4].message, "2 records have data quality issues");
    }
}
