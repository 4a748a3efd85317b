//! # Data Quality Validator
//!
//! Validation engine for record batches. This crate turns a list of records
//! and a [`quality_core::RuleSet`] into a [`quality_core::Report`]:
//!
//! - Required field checks (presence, nulls count as missing)
//! - Constraint checks (non-empty text, non-negative numbers, ranges, numeric type)
//! - Summary entries per rule category plus an overall verdict
//!
//! It also carries the result matcher used by the SQL sandbox and the
//! expense ledger.
//!
//! ## Example
//!
//! ```rust
//! use quality_core::product_rules;
//! use quality_validator::{validate, DataSet};
//!
//! let dataset = DataSet::from_json_str(
//!     r#"[{"id": 3, "title": "Hat", "price": 10, "rating": {"rate": 7}}]"#,
//! )
//! .unwrap();
//!
//! let report = validate(dataset.as_slice(), &product_rules()).unwrap();
//!
//! if report.passed() {
//!     println!("Validation passed!");
//! } else {
//!     for group in &report.defective_records {
//!         println!("{}: {:?}", group.identifier, group.messages().collect::<Vec<_>>());
//!     }
//! }
//! ```

mod constraints;
mod dataset;
mod engine;
mod error;
mod ledger;
mod matching;
mod required;
mod summary;

pub use constraints::*;
pub use dataset::*;
pub use engine::*;
pub use error::*;
pub use ledger::*;
pub use matching::*;
pub use required::*;
pub use summary::*;
