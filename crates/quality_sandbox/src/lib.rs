//! In-memory SQL sandbox for the Data Quality Engine.
//!
//! This module provides a small `orders` table held in memory and queried
//! through DataFusion, a set of canned query tasks with expected results,
//! and the conversion of Arrow results into validator values.
//!
//! # Example
//!
//! ```no_run
//! use quality_sandbox::{QueryTask, SandboxConfig, SqlSandbox};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let sandbox = SqlSandbox::new(SandboxConfig::default())?;
//!
//! let outcome = sandbox.run_task(QueryTask::TopCustomer, None).await?;
//! assert_eq!(outcome.passed, Some(true));
//!
//! let stats = sandbox.stats().await?;
//! println!("{} orders from {} customers", stats.orders, stats.customers);
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

mod config;
mod converter;
mod orders;
mod sandbox;
mod tasks;

pub use config::{SandboxConfig, SandboxConfigBuilder, DEFAULT_TABLE_NAME};
pub use converter::{arrow_value_to_data_value, record_batches_to_result_set};
pub use orders::{orders_batch, orders_schema, seed_orders, Order};
pub use sandbox::{format_query, OrderStats, SqlSandbox, TaskOutcome};
pub use tasks::QueryTask;

/// Error types specific to sandbox operations.
#[derive(Error, Debug)]
pub enum SandboxError {
    /// Query planning or execution failed
    #[error("Query failed: {0}")]
    Query(#[from] datafusion::error::DataFusionError),

    /// Building or reading Arrow data failed
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow_schema::ArrowError),

    /// A result column has a type that cannot be converted
    #[error("Unsupported column type: {0}")]
    UnsupportedType(String),

    /// A value could not be converted
    #[error("Failed to convert value: {0}")]
    TypeConversionError(String),

    /// Configuration error
    #[error("Invalid sandbox configuration: {0}")]
    ConfigurationError(String),

    /// Unknown task identifier
    #[error("Unknown task '{0}' (expected task1, task2, task3 or custom)")]
    UnknownTask(String),

    /// Nothing to execute
    #[error("No query to execute")]
    EmptyQuery,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SandboxError::UnknownTask("task9".to_string());
        assert_eq!(
            err.to_string(),
            "Unknown task 'task9' (expected task1, task2, task3 or custom)"
        );
    }

    #[test]
    fn test_error_from_datafusion() {
        let df_err = datafusion::error::DataFusionError::Plan("test error".to_string());
        let err = SandboxError::from(df_err);
        assert!(matches!(err, SandboxError::Query(_)));
    }
}
