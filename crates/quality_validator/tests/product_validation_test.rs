//! Integration tests for the validation engine.
//!
//! These tests run end-to-end validation scenarios over product listings
//! decoded from JSON with the default product rules.

use pretty_assertions::assert_eq;
use quality_core::{product_rules, CheckId, RuleSet, ValidationOptions};
use quality_validator::{
    validate, DataSet, DataValidator, Record, OVERALL_CHECK_NAME, REQUIRED_CHECK_NAME,
};

/// A realistic batch of product listings with one defect of each kind.
fn create_product_listings() -> DataSet {
    DataSet::from_json_str(
        r#"[
            {"id": 1, "title": "", "price": 10, "rating": {"rate": 3, "count": 120}},
            {"id": 2, "title": "Shirt", "price": -5, "rating": {"rate": 3, "count": 80}},
            {"id": 3, "title": "Hat", "price": 10, "rating": {"rate": 7, "count": 4}},
            {"id": 4, "title": "Backpack", "price": 109.95, "rating": {"rate": 3.9, "count": 120}},
            {"id": 5, "title": "Jacket", "category": "men's clothing"},
            {"id": 6, "title": "Ring", "price": "cheap", "rating": {"rate": "n/a"}}
        ]"#,
    )
    .unwrap()
}

fn run(dataset: &DataSet) -> quality_core::Report {
    validate(dataset.as_slice(), &product_rules()).unwrap()
}

fn messages_for(dataset: &DataSet, id: &str) -> Vec<String> {
    run(dataset)
        .defective_records
        .iter()
        .find(|group| group.identifier == id)
        .map(|group| group.messages().map(str::to_string).collect())
        .unwrap_or_default()
}

#[test]
fn test_empty_title() {
    let dataset = create_product_listings();
    assert_eq!(messages_for(&dataset, "1"), vec!["Empty title"]);
}

#[test]
fn test_negative_price() {
    let dataset = create_product_listings();
    assert_eq!(messages_for(&dataset, "2"), vec!["Negative price: -5"]);
}

#[test]
fn test_rating_out_of_range() {
    let dataset = create_product_listings();
    assert_eq!(
        messages_for(&dataset, "3"),
        vec!["Invalid rating: 7 (must be 0-5)"]
    );
}

#[test]
fn test_missing_fields() {
    let dataset = create_product_listings();
    assert_eq!(
        messages_for(&dataset, "5"),
        vec!["Missing fields: price, rating"]
    );
}

#[test]
fn test_non_numeric_values() {
    let dataset = create_product_listings();
    assert_eq!(
        messages_for(&dataset, "6"),
        vec![
            "Invalid price: cheap (must be a non-negative number)",
            "Invalid rating: n/a (not a number, must be 0-5)",
        ]
    );
}

#[test]
fn test_report_totals_and_summary() {
    let report = run(&create_product_listings());

    assert_eq!(report.rule_set, "product_listing");
    assert_eq!(report.totals.records, 6);
    assert_eq!(report.totals.valid, 1);
    assert_eq!(report.totals.defects_count, 5);
    assert_eq!(report.totals.defects_count, report.defective_records.len());

    let summary: Vec<(&str, bool, &str)> = report
        .summary
        .iter()
        .map(|e| (e.name.as_str(), e.passed, e.message.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (REQUIRED_CHECK_NAME, false, "1 records missing required fields"),
            ("Records with valid title", false, "1 records with empty title"),
            (
                "Records with valid price",
                false,
                "2 records with negative or invalid price"
            ),
            (
                "Records with valid rating",
                false,
                "2 records with invalid rating (must be 0-5)"
            ),
            (OVERALL_CHECK_NAME, false, "5 records have data quality issues"),
        ]
    );
}

#[test]
fn test_every_record_classified_once() {
    let dataset = create_product_listings();
    let report = run(&dataset);

    assert_eq!(
        report.totals.valid + report.totals.defects_count,
        dataset.len()
    );

    let mut indices: Vec<usize> = report.defective_records.iter().map(|g| g.index).collect();
    indices.dedup();
    assert_eq!(indices, vec![0, 1, 2, 4, 5]);

    for group in &report.defective_records {
        assert!(!group.defects.is_empty());
        assert!(group.defects.iter().all(|d| d.record == group.index));
    }
}

#[test]
fn test_summary_consistent_with_defects() {
    let report = run(&create_product_listings());

    for (position, entry) in report.summary.iter().enumerate() {
        if entry.name == OVERALL_CHECK_NAME {
            assert_eq!(entry.passed, report.passed());
            continue;
        }
        let check = if position == 0 {
            CheckId::RequiredFields
        } else {
            CheckId::Constraint(position - 1)
        };
        let failing = report
            .defective_records
            .iter()
            .any(|g| g.defects.iter().any(|d| d.check == check));
        assert_eq!(entry.passed, !failing, "entry {}", entry.name);
    }
}

#[test]
fn test_validation_is_idempotent() {
    let dataset = create_product_listings();
    let rules = product_rules();

    let first = validate(dataset.as_slice(), &rules).unwrap();
    let second = validate(dataset.as_slice(), &rules).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_input() {
    let report = validate(&[], &product_rules()).unwrap();

    assert_eq!(report.totals.records, 0);
    assert_eq!(report.totals.defects_count, 0);
    assert!(report.defective_records.is_empty());
    assert!(report.summary.iter().all(|e| e.passed));
    assert_eq!(report.summary.len(), 5);
}

#[test]
fn test_long_title_truncated() {
    let title = "x".repeat(200);
    let records = vec![Record::new()
        .with("id", 7)
        .with("title", title.as_str())
        .with("price", -1)
        .with("rating", Record::new().with("rate", 1))];

    let report = validate(&records, &product_rules()).unwrap();
    let label = &report.defective_records[0].label;

    assert_eq!(label.chars().count(), 53);
    assert_eq!(label, &format!("{}...", "x".repeat(50)));
}

#[test]
fn test_custom_label_limit() {
    let records = vec![Record::new()
        .with("id", 8)
        .with("title", "A very long product title")
        .with("price", "not-a-price-at-all")
        .with("rating", Record::new().with("rate", 1))];

    let validator = DataValidator::with_options(ValidationOptions::new().with_label_limit(6));
    let report = validator.validate(&records, &product_rules()).unwrap();
    let group = &report.defective_records[0];

    assert_eq!(group.label, "A very...");
    assert_eq!(
        group.defects[0].message,
        "Invalid price: not-a-... (must be a non-negative number)"
    );
}

#[test]
fn test_rules_from_json() {
    let rules: RuleSet = serde_json::from_str(
        r#"{
            "name": "inventory",
            "identifier": "sku",
            "label": "name",
            "rules": [
                {"field": "sku", "required": true},
                {"field": "stock", "label": "stock level",
                 "constraints": [{"type": "numeric_type"}, {"type": "numeric_non_negative"}]}
            ]
        }"#,
    )
    .unwrap();

    let dataset = DataSet::from_json_str(
        r#"[{"sku": "A1", "name": "Bolt", "stock": "lots"}, {"name": "Nut", "stock": 4}]"#,
    )
    .unwrap();
    let report = validate(dataset.as_slice(), &rules).unwrap();

    let first: Vec<&str> = report.defective_records[0].messages().collect();
    assert_eq!(
        first,
        vec![
            "Non-numeric stock level: lots",
            "Invalid stock level: lots (must be a non-negative number)",
        ]
    );
    assert_eq!(report.defective_records[0].identifier, "A1");
    assert_eq!(report.defective_records[1].identifier, "Unknown");
    assert_eq!(report.defective_records[1].label, "Nut");
}
