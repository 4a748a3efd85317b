//! Canned query tasks.
//!
//! Each task carries its own SQL and the literal first row it should yield.
//! The task is always passed explicitly next to the query; query text is
//! never inspected to guess which task it belongs to.

use crate::SandboxError;
use quality_validator::ExpectedRow;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A canned query task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueryTask {
    /// Total sales volume for March 2024
    #[serde(rename = "task1")]
    MarchSales,
    /// Customer with the highest total spend
    #[serde(rename = "task2")]
    TopCustomer,
    /// Average order value since February 2024
    #[serde(rename = "task3")]
    AverageOrderValue,
    /// Free exploration, no expected result
    #[serde(rename = "custom")]
    Custom,
}

impl QueryTask {
    /// All tasks in display order.
    pub const ALL: [QueryTask; 4] = [
        QueryTask::MarchSales,
        QueryTask::TopCustomer,
        QueryTask::AverageOrderValue,
        QueryTask::Custom,
    ];

    /// Short identifier (`task1`, `task2`, `task3`, `custom`).
    pub fn id(&self) -> &'static str {
        match self {
            QueryTask::MarchSales => "task1",
            QueryTask::TopCustomer => "task2",
            QueryTask::AverageOrderValue => "task3",
            QueryTask::Custom => "custom",
        }
    }

    /// One-line description shown above the task's output.
    pub fn title(&self) -> &'static str {
        match self {
            QueryTask::MarchSales => "Calculate total sales volume for March 2024",
            QueryTask::TopCustomer => "Find the customer who spent the most overall",
            QueryTask::AverageOrderValue => {
                "Calculate average order value for the last three months"
            }
            QueryTask::Custom => "Explore the data",
        }
    }

    /// The canned query against `table`.
    pub fn sql(&self, table: &str) -> String {
        match self {
            QueryTask::MarchSales => format!(
                "SELECT SUM(amount) AS total_sales\nFROM {table}\n\
                 WHERE order_date >= DATE '2024-03-01' AND order_date < DATE '2024-04-01'"
            ),
            QueryTask::TopCustomer => format!(
                "SELECT customer, SUM(amount) AS total_spent\nFROM {table}\n\
                 GROUP BY customer\nORDER BY total_spent DESC\nLIMIT 1"
            ),
            QueryTask::AverageOrderValue => format!(
                "SELECT ROUND(AVG(amount), 2) AS average_order_value\nFROM {table}\n\
                 WHERE order_date >= DATE '2024-02-01'"
            ),
            QueryTask::Custom => format!("SELECT *\nFROM {table}\nORDER BY order_date DESC"),
        }
    }

    /// The expected first row, or `None` for tasks without one.
    pub fn expected(&self) -> Option<ExpectedRow> {
        match self {
            QueryTask::MarchSales => Some(ExpectedRow::new().with("total_sales", 27000)),
            QueryTask::TopCustomer => Some(
                ExpectedRow::new()
                    .with("customer", "Alice")
                    .with("total_spent", 20000),
            ),
            QueryTask::AverageOrderValue => {
                Some(ExpectedRow::new().with("average_order_value", 6000))
            }
            QueryTask::Custom => None,
        }
    }
}

impl fmt::Display for QueryTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for QueryTask {
    type Err = SandboxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        QueryTask::ALL
            .into_iter()
            .find(|task| task.id() == wanted)
            .ok_or_else(|| SandboxError::UnknownTask(s.to_string()))
    }
}
