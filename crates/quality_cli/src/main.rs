mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use quality_core::{ValidationOptions, DEFAULT_LABEL_LIMIT};
use quality_sandbox::QueryTask;
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Environment variable holding a log filter (e.g. `quality_validator=debug`).
const LOG_ENV_VAR: &str = "DQE_LOG";

#[derive(Parser)]
#[command(name = "dqe")]
#[command(version, about = "Data Quality Engine CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON array of records against a rule set
    Validate {
        /// Path to the records file (JSON array of objects)
        records: String,

        /// Path to the rule set file (YAML, TOML or JSON); defaults to the product listing rules
        #[arg(short, long)]
        rules: Option<String>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Maximum characters of a value shown in labels and messages
        #[arg(long, default_value_t = DEFAULT_LABEL_LIMIT)]
        label_limit: usize,

        /// Field identifying a record (overrides the rule set)
        #[arg(long)]
        identifier: Option<String>,

        /// Field labelling a record (overrides the rule set)
        #[arg(long)]
        label_field: Option<String>,

        /// Only validate the first N records
        #[arg(long)]
        sample_size: Option<usize>,
    },

    /// Check a rule set file without validating data
    Check {
        /// Path to the rule set file (YAML, TOML or JSON)
        rules: String,

        /// Output format: text, json, yaml
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Write the default product listing rule set as a starting point
    Init {
        /// Output file path (defaults to stdout); the extension picks YAML or TOML
        #[arg(short, long)]
        output: Option<String>,

        /// Name of the rule set
        #[arg(short, long)]
        name: Option<String>,

        /// Description of the rule set
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Run a query task against the in-memory orders table
    Query {
        /// Task: task1, task2, task3, custom
        #[arg(short, long, default_value = "custom")]
        task: QueryTask,

        /// SQL to run instead of the task's canned query
        #[arg(long)]
        sql: Option<String>,

        /// JSON file of orders to load instead of the seed data
        #[arg(long)]
        orders: Option<String>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Summarize a JSON list of monthly expenses
    Expenses {
        /// Path to the expenses file (JSON array of {category, amount})
        file: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Validate {
            records,
            rules,
            format,
            label_limit,
            identifier,
            label_field,
            sample_size,
        } => {
            let mut options = ValidationOptions::new().with_label_limit(label_limit);
            options.identifier_field = identifier;
            options.label_field = label_field;

            commands::validate::execute(&records, rules.as_deref(), options, sample_size, &format)
                .await
        }

        Commands::Check { rules, format } => commands::check::execute(&rules, &format).await,

        Commands::Init {
            output,
            name,
            description,
        } => commands::init::execute(output.as_deref(), name, description).await,

        Commands::Query {
            task,
            sql,
            orders,
            format,
        } => commands::query::execute(task, sql.as_deref(), orders.as_deref(), &format).await,

        Commands::Expenses { file, format } => commands::expenses::execute(&file, &format).await,
    }
}
