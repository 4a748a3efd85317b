use anyhow::Result;
use chrono::Utc;
use colored::*;
use quality_core::Report;
use quality_sandbox::{format_query, OrderStats, TaskOutcome};
use quality_validator::{ExpenseLedger, ExpenseSummary};
use serde::Serialize;
use serde_json::{json, Value};

/// How much of the input a sampled run looked at.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Sample {
    pub checked: usize,
    pub total: usize,
}

pub fn print_validation_report(
    report: &Report,
    sample: Option<Sample>,
    format: &str,
) -> Result<()> {
    match format {
        "json" => print_json_report(report, sample),
        _ => {
            print_text_report(report, sample);
            Ok(())
        }
    }
}

fn print_text_report(report: &Report, sample: Option<Sample>) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));
    println!("  Rule set: {}", report.rule_set);
    if let Some(sample) = sample {
        println!(
            "  {}",
            format!(
                "Sampled: first {} of {} records, the rest were not checked",
                sample.checked, sample.total
            )
            .yellow()
        );
    }

    if report.passed() {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Validation PASSED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Validation FAILED".red().bold()
        );
    }

    println!("\n{}", "Checks:".bold());
    for entry in &report.summary {
        if entry.passed {
            println!("  {} {}: {}", "✓".green(), entry.name, entry.message);
        } else {
            println!("  {} {}: {}", "✗".red(), entry.name, entry.message.red());
        }
    }

    if !report.defective_records.is_empty() {
        println!("\n{}", "Defective records:".red().bold());
        for group in &report.defective_records {
            println!(
                "  #{} {} (id: {})",
                group.index + 1,
                group.label.bold(),
                group.identifier
            );
            for defect in &group.defects {
                println!("     - {}", defect.message.red());
            }
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Records:   {}", report.totals.records);
    println!("  Valid:     {}", report.totals.valid);
    println!("  Defective: {}", report.totals.defects_count);
    println!("{}", "═".repeat(60));
}

fn print_json_report(report: &Report, sample: Option<Sample>) -> Result<()> {
    let mut output = serde_json::to_value(report)?;
    if let Value::Object(map) = &mut output {
        map.insert("passed".to_string(), Value::Bool(report.passed()));
        if let Some(sample) = sample {
            map.insert("sample".to_string(), serde_json::to_value(sample)?);
        }
        map.insert(
            "generatedAt".to_string(),
            Value::String(Utc::now().to_rfc3339()),
        );
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn print_query_outcome(outcome: &TaskOutcome, stats: &OrderStats, format: &str) -> Result<()> {
    if format == "json" {
        let rows: Vec<Vec<Value>> = outcome
            .result
            .rows
            .iter()
            .map(|row| row.iter().map(Value::from).collect())
            .collect();

        let output = json!({
            "task": outcome.task,
            "sql": outcome.sql,
            "columns": outcome.result.columns,
            "rows": rows,
            "passed": outcome.passed,
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("\n{}", "═".repeat(60));
    println!(
        "{}",
        format!("  {}: {}", outcome.task.id().to_uppercase(), outcome.task.title()).bold()
    );
    println!("{}", "═".repeat(60));

    println!("\n{}", "Query:".bold());
    for line in format_query(&outcome.sql).lines() {
        println!("  {}", line.cyan());
    }

    println!("\n{}", "Results:".bold());
    print_table(&outcome.result.columns, &outcome.result.rows);
    println!("  ({} rows)", outcome.result.row_count());

    match outcome.passed {
        Some(true) => println!(
            "\n{} {}",
            "✓".green().bold(),
            "Result matches the expected value".green().bold()
        ),
        Some(false) => println!(
            "\n{} {}",
            "✗".red().bold(),
            "Result doesn't match the expected value".red().bold()
        ),
        None => {}
    }

    println!("\n{}", "Database:".bold());
    println!("  Orders:    {}", stats.orders);
    println!("  Customers: {}", stats.customers);
    println!("  Revenue:   {}", stats.revenue);
    println!("{}", "═".repeat(60));
    Ok(())
}

fn print_table<T: ToString>(columns: &[String], rows: &[Vec<T>]) {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            cells
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(column.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let render = |values: &[String]| {
        values
            .iter()
            .zip(&widths)
            .map(|(value, width)| format!("{:<width$}", value, width = *width))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    println!("  {}", render(columns).bold());
    println!(
        "  {}",
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-")
    );
    for row in &cells {
        println!("  {}", render(row));
    }
}

pub fn print_expense_summary(
    ledger: &ExpenseLedger,
    summary: &ExpenseSummary,
    format: &str,
) -> Result<()> {
    if format == "json" {
        let output = json!({
            "expenses": ledger.expenses(),
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("\n{}", "═".repeat(60));
    println!("{}", "  MONTHLY EXPENSES".bold());
    println!("{}", "═".repeat(60));
    println!("  Entries:       {}", ledger.len());
    println!("  Total:         {:.2}", summary.total);
    println!("  Average / day: {:.2}", summary.average_daily);

    println!("\n{}", "Top expenses:".bold());
    for (rank, expense) in summary.top.iter().enumerate() {
        println!(
            "  {}. {:<20} {:>12.2}",
            rank + 1,
            expense.category,
            expense.amount
        );
    }
    println!("{}", "═".repeat(60));
    Ok(())
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_yaml<T: Serialize>(value: &T) -> Result<()> {
    print!("{}", serde_yaml_ng::to_string(value)?);
    Ok(())
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
