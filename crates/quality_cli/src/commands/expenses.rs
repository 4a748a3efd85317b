use anyhow::{Context, Result};
use quality_validator::{Expense, ExpenseLedger};
use tracing::info;

use crate::output;

pub async fn execute(path: &str, format: &str) -> Result<()> {
    info!("Summarizing expenses: {}", path);

    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read expenses file: {}", path))?;
    let entries: Vec<Expense> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to decode expenses file: {}", path))?;

    let ledger = ExpenseLedger::from_expenses(entries).context("Invalid expense entry")?;
    let summary = ledger.summary().context("Cannot summarize expenses")?;

    output::print_expense_summary(&ledger, &summary, format)
}
