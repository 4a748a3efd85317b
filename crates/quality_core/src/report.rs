//! Validation options and report types.
//!
//! A [`Report`] is built fresh for every validation call. It holds the
//! totals, the ordered summary entries and one [`DefectGroup`] per defective
//! record. Reports serialize to camelCase JSON for presentation layers.

use serde::{Deserialize, Serialize};

/// Default number of characters kept from string values in reports.
pub const DEFAULT_LABEL_LIMIT: usize = 50;

/// Marker appended to truncated values.
pub const ELLIPSIS: &str = "...";

/// Options for a validation run.
///
/// # Example
///
/// ```rust
/// use quality_core::ValidationOptions;
///
/// let options = ValidationOptions::new()
///     .with_label_limit(20)
///     .with_identifier_field("sku");
///
/// assert_eq!(options.label_limit, 20);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationOptions {
    /// Maximum characters of a string value shown in labels and messages
    pub label_limit: usize,

    /// Overrides the rule set's identifier field
    pub identifier_field: Option<String>,

    /// Overrides the rule set's label field
    pub label_field: Option<String>,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            label_limit: DEFAULT_LABEL_LIMIT,
            identifier_field: None,
            label_field: None,
        }
    }
}

impl ValidationOptions {
    /// Creates new options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the truncation limit for labels and raw values.
    pub fn with_label_limit(mut self, limit: usize) -> Self {
        self.label_limit = limit;
        self
    }

    /// Sets the identifier field.
    pub fn with_identifier_field(mut self, field: impl Into<String>) -> Self {
        self.identifier_field = Some(field.into());
        self
    }

    /// Sets the label field.
    pub fn with_label_field(mut self, field: impl Into<String>) -> Self {
        self.label_field = Some(field.into());
        self
    }
}

/// Identifies which check produced a defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "index")]
pub enum CheckId {
    /// The required-fields check
    RequiredFields,
    /// The n-th constraint category, in declaration order
    Constraint(usize),
}

/// A single rule violation on one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Defect {
    /// Position of the record in the input
    pub record: usize,
    /// Rule that was violated (field path, or `required` for missing fields)
    pub rule: String,
    /// Check category the defect counts towards
    pub check: CheckId,
    /// Human-readable message
    pub message: String,
}

/// All defects found on one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefectGroup {
    /// Position of the record in the input
    pub index: usize,
    /// Value of the identifier field, or `Unknown`
    pub identifier: String,
    /// Truncated value of the label field
    pub label: String,
    /// Defects in rule declaration order
    pub defects: Vec<Defect>,
}

impl DefectGroup {
    /// Returns the defect messages in order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.defects.iter().map(|d| d.message.as_str())
    }
}

/// Aggregate pass/fail statement about one check category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryEntry {
    /// Check name
    pub name: String,
    /// Whether no record violated the check
    pub passed: bool,
    /// Human-readable outcome
    pub message: String,
}

impl SummaryEntry {
    /// Creates a new summary entry.
    pub fn new(name: impl Into<String>, passed: bool, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed,
            message: message.into(),
        }
    }
}

/// Record counts for one validation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Number of records validated
    pub records: usize,
    /// Number of records without defects
    pub valid: usize,
    /// Number of records with at least one defect
    pub defects_count: usize,
}

/// Complete output of one validation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Name of the rule set used
    pub rule_set: String,
    /// Record counts
    pub totals: Totals,
    /// Summary entries: required fields, constraint categories, overall
    pub summary: Vec<SummaryEntry>,
    /// One group per defective record, in input order
    pub defective_records: Vec<DefectGroup>,
}

impl Report {
    /// Returns true if no record has defects.
    pub fn passed(&self) -> bool {
        self.totals.defects_count == 0
    }

    /// Returns the total number of defects across all records.
    pub fn defect_total(&self) -> usize {
        self.defective_records.iter().map(|g| g.defects.len()).sum()
    }

    /// Returns the summary entries that failed.
    pub fn failed_checks(&self) -> impl Iterator<Item = &SummaryEntry> {
        self.summary.iter().filter(|entry| !entry.passed)
    }
}

/// Truncates `value` to `limit` characters, appending [`ELLIPSIS`] when cut.
///
/// Counts characters, not bytes, so multi-byte text is never split.
pub fn truncate(value: &str, limit: usize) -> String {
    match value.char_indices().nth(limit) {
        Some((byte_idx, _)) => format!("{}{}", &value[..byte_idx], ELLIPSIS),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_truncate_short_value_unchanged() {
        assert_eq!(truncate("Hat", 50), "Hat");
        assert_eq!(truncate(&"a".repeat(50), 50), "a".repeat(50));
    }

    #[test]
    fn test_truncate_long_value() {
        let long = "x".repeat(200);
        let cut = truncate(&long, 50);
        assert_eq!(cut.chars().count(), 53);
        assert!(cut.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_truncate_multibyte() {
        let text = "é".repeat(10);
        assert_eq!(truncate(&text, 3), "ééé...");
    }

    #[test]
    fn test_report_json_shape() {
        let report = Report {
            rule_set: "products".to_string(),
            totals: Totals {
                records: 2,
                valid: 1,
                defects_count: 1,
            },
            summary: vec![SummaryEntry::new("Overall data quality", false, "1 records have data quality issues")],
            defective_records: vec![DefectGroup {
                index: 1,
                identifier: "2".to_string(),
                label: "Shirt".to_string(),
                defects: vec![Defect {
                    record: 1,
                    rule: "price".to_string(),
                    check: CheckId::Constraint(1),
                    message: "Negative price: -5".to_string(),
                }],
            }],
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["totals"]["defectsCount"], 1);
        assert_eq!(json["defectiveRecords"][0]["defects"][0]["message"], "Negative price: -5");
        assert!(!report.passed());
        assert_eq!(report.failed_checks().count(), 1);
    }

    #[test]
    fn test_options_builder() {
        let options = ValidationOptions::new()
            .with_label_field("name");
        assert_eq!(options.label_limit, DEFAULT_LABEL_LIMIT);
        assert_eq!(options.label_field.as_deref(), Some("name"));
    }
}
