//! # Data Quality Core
//!
//! Core data structures and types for the Data Quality Engine.
//!
//! This crate provides the declarative rule model and the report model shared
//! by the validator, the parser and the CLI.
//!
//! ## Key Concepts
//!
//! - **RuleSet**: A named, ordered collection of field rules
//! - **FieldRule**: What makes one field valid (required-ness and constraints)
//! - **Constraint**: A pure predicate over a single field value
//! - **Report**: Totals, summary entries and per-record defect groups
//!
//! ## Example
//!
//! ```rust
//! use quality_core::{product_rules, ValidationOptions};
//!
//! let rules = product_rules();
//! assert!(rules.validate_definition().is_ok());
//!
//! let options = ValidationOptions::new().with_label_limit(30);
//! assert_eq!(options.label_limit, 30);
//! ```

pub mod builder;
pub mod error;
pub mod report;
pub mod rules;

pub use builder::*;
pub use error::*;
pub use report::*;
pub use rules::*;
