//! Tests to verify correct handling of null and absent values across checks.
//!
//! Null values are handled consistently:
//! - The required check treats null exactly like an absent field
//! - Constraint checks skip null and absent values (presence is the required check's job)
//! - Summary categories only count records that actually carry a defect of that category

use quality_core::{Constraint, FieldRuleBuilder, RuleSetBuilder};
use quality_validator::{validate, DataSet, DataValue, Record};

#[test]
fn test_null_in_required_field_fails() {
    let rules = RuleSetBuilder::new("test")
        .rule(FieldRuleBuilder::new("id").required(true).build())
        .build();

    let records = vec![Record::new().with("id", DataValue::Null)];
    let report = validate(&records, &rules).unwrap();

    assert!(!report.passed(), "Null in required field should fail");
    assert_eq!(report.defect_total(), 1);
    assert_eq!(
        report.defective_records[0].defects[0].message,
        "Missing fields: id"
    );
}

#[test]
fn test_null_in_optional_field_passes() {
    let rules = RuleSetBuilder::new("test")
        .rule(FieldRuleBuilder::new("note").build())
        .build();

    let records = vec![Record::new().with("note", DataValue::Null)];
    let report = validate(&records, &rules).unwrap();

    assert!(
        report.passed(),
        "Null in optional field should pass, defects: {:?}",
        report.defective_records
    );
}

#[test]
fn test_null_skips_constraint_validation() {
    let rules = RuleSetBuilder::new("test")
        .rule(
            FieldRuleBuilder::new("title")
                .constraint(Constraint::NonEmptyString)
                .build(),
        )
        .rule(
            FieldRuleBuilder::new("price")
                .constraint(Constraint::NumericNonNegative)
                .constraint(Constraint::NumericType)
                .build(),
        )
        .build();

    let records = vec![Record::new()
        .with("title", DataValue::Null)
        .with("price", DataValue::Null)];
    let report = validate(&records, &rules).unwrap();

    assert!(
        report.passed(),
        "Null should skip constraint validation, defects: {:?}",
        report.defective_records
    );
}

#[test]
fn test_null_required_field_reported_once() {
    // A required, constrained field that is null yields only the missing-field defect
    let rules = RuleSetBuilder::new("test")
        .rule(
            FieldRuleBuilder::new("price")
                .required(true)
                .constraint(Constraint::NumericNonNegative)
                .build(),
        )
        .build();

    let records = vec![Record::new().with("price", DataValue::Null)];
    let report = validate(&records, &rules).unwrap();

    let group = &report.defective_records[0];
    assert_eq!(group.defects.len(), 1);
    assert_eq!(group.defects[0].message, "Missing fields: price");

    assert!(!report.summary[0].passed);
    assert!(report.summary[1].passed, "Constraint category should not count nulls");
}

#[test]
fn test_missing_field_vs_null_field() {
    let rules = RuleSetBuilder::new("test")
        .rule(FieldRuleBuilder::new("a").required(true).build())
        .rule(FieldRuleBuilder::new("b").required(true).build())
        .build();

    let records = vec![Record::new().with("b", DataValue::Null)];
    let report = validate(&records, &rules).unwrap();

    assert_eq!(
        report.defective_records[0].defects[0].message,
        "Missing fields: a, b"
    );
}

#[test]
fn test_null_nested_parent() {
    let rules = RuleSetBuilder::new("test")
        .rule(
            FieldRuleBuilder::new("rating.rate")
                .required(true)
                .constraint(Constraint::NumericRange { min: 0.0, max: 5.0 })
                .build(),
        )
        .build();

    let dataset = DataSet::from_json_str(r#"[{"rating": null}, {"rating": {"rate": null}}]"#)
        .unwrap();
    let report = validate(dataset.as_slice(), &rules).unwrap();

    assert_eq!(report.totals.defects_count, 2);
    for group in &report.defective_records {
        let messages: Vec<&str> = group.messages().collect();
        assert_eq!(messages, vec!["Missing fields: rating.rate"]);
    }
}
