//! Main sandbox implementation.

use crate::{
    orders_batch, record_batches_to_result_set, QueryTask, SandboxConfig, SandboxError,
};
use arrow_array::RecordBatch;
use datafusion::prelude::SessionContext;
use futures::TryStreamExt;
use quality_validator::{matches_expected, ResultSet};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::{debug, info};

/// SQL sandbox over an in-memory orders table.
///
/// Each sandbox owns its own DataFusion session, so statements run in one
/// sandbox never affect another.
pub struct SqlSandbox {
    config: SandboxConfig,
    ctx: SessionContext,
}

/// Result of running a task.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskOutcome {
    /// The task that was run
    pub task: QueryTask,
    /// The SQL that was executed
    pub sql: String,
    /// Query output
    pub result: ResultSet,
    /// Whether the result matched the task's expectation; `None` when the
    /// task has none
    pub passed: Option<bool>,
}

/// Headline figures for the orders table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrderStats {
    /// Number of rows
    pub orders: i64,
    /// Distinct customer names
    pub customers: i64,
    /// Sum of all amounts, `0` for an empty table
    pub revenue: f64,
}

impl SqlSandbox {
    /// Creates a sandbox and registers the configured orders.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the table cannot
    /// be registered.
    pub fn new(config: SandboxConfig) -> Result<Self, SandboxError> {
        config.validate()?;

        let ctx = SessionContext::new();
        let batch = orders_batch(&config.orders)?;
        ctx.register_batch(&config.table_name, batch)?;

        info!(
            "SQL sandbox ready: table '{}' with {} orders",
            config.table_name,
            config.orders.len()
        );

        Ok(Self { config, ctx })
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &SandboxConfig {
        &self.config
    }

    /// Executes a single SQL statement and returns its rows.
    pub async fn execute(&self, sql: &str) -> Result<ResultSet, SandboxError> {
        let sql = sql.trim().trim_end_matches(';').trim();
        if sql.is_empty() {
            return Err(SandboxError::EmptyQuery);
        }

        debug!("Executing query: {}", sql);

        let df = self.ctx.sql(sql).await?;
        let columns: Vec<String> = df
            .schema()
            .fields()
            .iter()
            .map(|field| field.name().to_string())
            .collect();

        let batches: Vec<RecordBatch> = df.execute_stream().await?.try_collect().await?;
        let result = record_batches_to_result_set(columns, &batches)?;

        debug!("Query returned {} rows", result.row_count());
        Ok(result)
    }

    /// Runs a task, optionally with user-supplied SQL in place of the canned
    /// query, and checks the result against the task's expectation.
    pub async fn run_task(
        &self,
        task: QueryTask,
        sql_override: Option<&str>,
    ) -> Result<TaskOutcome, SandboxError> {
        let sql = match sql_override {
            Some(sql) => sql.to_string(),
            None => task.sql(&self.config.table_name),
        };

        let result = self.execute(&sql).await?;
        let passed = task
            .expected()
            .map(|expected| matches_expected(&result, &expected));

        info!(task = %task, passed = ?passed, "Task finished");

        Ok(TaskOutcome {
            task,
            sql,
            result,
            passed,
        })
    }

    /// Computes order count, distinct customers and total revenue.
    pub async fn stats(&self) -> Result<OrderStats, SandboxError> {
        let sql = format!(
            "SELECT COUNT(*) AS order_count, COUNT(DISTINCT customer) AS customer_count, \
             COALESCE(SUM(amount), 0) AS revenue FROM {}",
            self.config.table_name
        );
        let result = self.execute(&sql).await?;

        let int = |column: &str| result.get(0, column).and_then(|v| v.as_int()).unwrap_or(0);
        Ok(OrderStats {
            orders: int("order_count"),
            customers: int("customer_count"),
            revenue: result
                .get(0, "revenue")
                .and_then(|v| v.to_number())
                .unwrap_or(0.0),
        })
    }
}

static FORMAT_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"--[^\n]*", ""),
        (r"\s+", " "),
        (r"\s*,\s*", ",\n  "),
        (r"(?i)\bSELECT\b\s*", "SELECT "),
        (r"(?i)\s*\bFROM\b\s*", "\nFROM "),
        (r"(?i)\s*\bWHERE\b\s*", "\nWHERE "),
        (r"(?i)\s*\bGROUP\s+BY\b\s*", "\nGROUP BY "),
        (r"(?i)\s*\bORDER\s+BY\b\s*", "\nORDER BY "),
        (r"(?i)\s*\bLIMIT\b\s*", "\nLIMIT "),
        (r"(?i)\s*\bJOIN\b\s*", "\nJOIN "),
        (r"(?i)\s*\bUNION\b\s*", "\nUNION "),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        #[allow(clippy::expect_used)]
        let regex = Regex::new(pattern).expect("Hard-coded regex pattern should be valid");
        (regex, replacement)
    })
    .collect()
});

/// Lays a query out one clause per line.
///
/// Line comments are dropped, whitespace is collapsed, select-list items go
/// on indented lines and the main clause keywords start new lines in upper
/// case.
///
/// ```rust
/// use quality_sandbox::format_query;
///
/// assert_eq!(
///     format_query("select customer, sum(amount) from orders group by customer"),
///     "SELECT customer,\n  sum(amount)\nFROM orders\nGROUP BY customer"
/// );
/// ```
pub fn format_query(sql: &str) -> String {
    FORMAT_RULES
        .iter()
        .fold(sql.to_string(), |query, (regex, replacement)| {
            regex.replace_all(&query, *replacement).into_owned()
        })
        .trim()
        .to_string()
}
