//! summit-ledger main entry point

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use summit_config::{Config, ConfigError, DateWindow, TypeFilter};
use summit_core::{CoreError, TransactionBook};
use summit_source::{JsonFileSource, SourceRef, StaticSource};
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "summit-ledger")]
#[command(version = "0.1.0")]
#[command(about = "Classify and filter a transfer history from the account holder's point of view", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Case-insensitive text to look for in description, counterpart or category
    #[arg(short, long)]
    search: Option<String>,

    /// Transaction type: all, income or expense
    #[arg(short = 't', long = "type")]
    type_filter: Option<String>,

    /// Date window in days: 7, 30, 90 or all
    #[arg(short, long)]
    window: Option<String>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Use the built-in sample snapshot instead of the data files
    #[arg(long)]
    demo: bool,

    /// Keep running and refresh every `data.poll_interval_secs` seconds
    #[arg(long)]
    watch: bool,

    /// Print a default configuration file and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let (config, config_missing) = match Config::load(args.config.clone()) {
        Ok(config) => (config, false),
        Err(ConfigError::FileNotFound { .. }) => (Config::default(), true),
        Err(e) => {
            eprintln!("{}", e.to_details());
            return Err(e).context("Failed to load configuration");
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    if config_missing {
        log::warn!("Config file {} not found, using defaults", args.config.display());
    }

    let rt = Runtime::new().context("Failed to start runtime")?;
    rt.block_on(run(args, config))
}

async fn run(args: Args, config: Config) -> anyhow::Result<()> {
    let source: SourceRef = if args.demo {
        log::info!("Using demo snapshot");
        Arc::new(StaticSource::demo(Utc::now().naive_utc()))
    } else {
        log::info!(
            "Reading snapshot: transfers={}, accounts={}",
            config.transfers_path().display(),
            config.accounts_path().display()
        );
        Arc::new(JsonFileSource::new(config.transfers_path(), config.accounts_path()))
    };

    let poll_interval = Duration::from_secs(config.data.poll_interval_secs);
    let book = TransactionBook::new(config, source);
    apply_criteria(&book, &args).map_err(|e| {
        eprintln!("{}", e.to_details());
        anyhow::Error::new(e)
    })?;

    if !args.watch {
        book.refresh().await;
        return render(&book, args.json);
    }

    let mut ticker = tokio::time::interval(poll_interval);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                book.refresh().await;
                render(&book, args.json)?;
            }
            _ = tokio::signal::ctrl_c() => {
                log::info!("Interrupted, stopping");
                return Ok(());
            }
        }
    }
}

/// Layer command-line criteria over the configured defaults
fn apply_criteria(book: &TransactionBook, args: &Args) -> Result<(), CoreError> {
    if let Some(search) = &args.search {
        book.set_search(search.clone());
    }
    if let Some(type_filter) = &args.type_filter {
        let type_filter: TypeFilter = type_filter
            .parse()
            .map_err(|message| CoreError::InvalidCriteria { message })?;
        book.set_type_filter(type_filter);
    }
    if let Some(window) = &args.window {
        let window: DateWindow = window
            .parse()
            .map_err(|message| CoreError::InvalidCriteria { message })?;
        book.set_date_window(window);
    }
    Ok(())
}

fn render(book: &TransactionBook, json: bool) -> anyhow::Result<()> {
    let now = Utc::now().naive_utc();
    let rows = book.display_rows_at(now);
    let summary = book.summary_at(now);

    if json {
        let output = serde_json::json!({
            "criteria": book.criteria(),
            "summary": summary,
            "transactions": rows,
        });
        println!("{}", serde_json::to_string_pretty(&output).context("Failed to encode output")?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No transactions found");
        println!("{}", book.empty_state_message());
        return Ok(());
    }

    println!(
        "{:<14} {:<28} {:<36} {:<10} {:<12} {:>14}",
        "DATE", "TRANSACTION", "COUNTERPART", "CATEGORY", "ACCOUNT", "AMOUNT"
    );
    for row in &rows {
        println!(
            "{:<14} {:<28} {:<36} {:<10} {:<12} {:>14}",
            row.date_text,
            row.description,
            row.merchant_label,
            row.category,
            row.account_text,
            row.amount_text
        );
    }
    println!(
        "\n{} transactions ({} in, {} out, {} internal); in {} / out {}",
        summary.count,
        summary.credit_count,
        summary.debit_count,
        summary.transfer_count,
        summary.total_in,
        summary.total_out
    );

    Ok(())
}
