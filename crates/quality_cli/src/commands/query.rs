use anyhow::{Context, Result};
use quality_sandbox::{Order, QueryTask, SandboxConfig, SqlSandbox};
use tracing::info;

use crate::output;

pub async fn execute(
    task: QueryTask,
    sql: Option<&str>,
    orders_path: Option<&str>,
    format: &str,
) -> Result<()> {
    info!("Running task {} ({})", task.id(), task.title());

    let mut builder = SandboxConfig::builder();
    if let Some(path) = orders_path {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read orders file: {}", path))?;
        let orders: Vec<Order> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to decode orders file: {}", path))?;
        builder = builder.orders(orders);
    }
    let config = builder.build().context("Invalid sandbox configuration")?;

    let sandbox = SqlSandbox::new(config).context("Failed to start SQL sandbox")?;
    let outcome = sandbox
        .run_task(task, sql)
        .await
        .context("Query execution failed")?;
    let stats = sandbox
        .stats()
        .await
        .context("Failed to compute order statistics")?;

    output::print_query_outcome(&outcome, &stats, format)?;

    if outcome.passed == Some(false) {
        std::process::exit(1);
    }

    Ok(())
}
