//! Agent Portal CLI
//!
//! Terminal front end for the maturity calculator, the customer table and
//! the daily notification list.

use agent_portal::{
    config::DEFAULT_CONFIG_PATH,
    projection::round_to_cents,
    records::load_customers,
    EventScheduler, MaturityCalculator, PortalConfig, RecordStore,
};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "agent_portal", version, about = "Insurance agent back office")]
struct Cli {
    /// JSON config file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Project a policy amount to maturity
    Maturity {
        /// Policy amount (defaults to the configured amount)
        #[arg(long)]
        amount: Option<f64>,
        /// Annual interest rate in percent
        #[arg(long)]
        rate: Option<f64>,
        /// Policy duration in years
        #[arg(long, allow_negative_numbers = true)]
        years: Option<i32>,
    },
    /// List stored customers with their projected maturity
    Customers {
        /// Customer table (overrides the configured one)
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// List customers whose event falls on a date
    Due {
        /// Customer table (overrides the configured one)
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Date to check, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Print the sent confirmation for each due customer
        #[arg(long)]
        send: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = PortalConfig::load_or_default(&cli.config)
        .with_context(|| format!("reading config {}", cli.config.display()))?;

    match cli.command {
        Command::Maturity { amount, rate, years } => {
            let calc = MaturityCalculator::new(config.calculator.clone());
            let projection = calc.project(
                amount.unwrap_or(config.calculator.default_amount),
                rate.unwrap_or(config.calculator.rate_percent),
                years.unwrap_or(config.calculator.years),
            )?;

            println!("{:>4} {:>16}", "Year", "Value");
            println!("{}", "-".repeat(21));
            for point in &projection.series {
                println!("{:>4} {:>16.2}", point.year, point.value);
            }
            println!("\nMaturity Amount: {:.2}", projection.rounded_maturity());
        }
        Command::Customers { csv } => {
            let store = open_store(&config, csv)?;
            let calc = MaturityCalculator::new(config.calculator.clone());

            if store.customer_count() == 0 {
                println!("No customer data available.");
                return Ok(());
            }

            println!(
                "{:<20} {:<12} {:>14} {:<10} {:<20} {:>14}",
                "Customer", "Policy", "Amount", "Due", "Event", "Maturity"
            );
            println!("{}", "-".repeat(95));
            for record in store.customers() {
                let projection = calc.project_customer(record)?;
                println!(
                    "{:<20} {:<12} {:>14.2} {:<10} {:<20} {:>14.2}",
                    record.customer_name,
                    record.policy_number,
                    record.policy_amount,
                    record.due_date,
                    record.event_type,
                    round_to_cents(projection.maturity_value),
                );
            }
        }
        Command::Due { csv, date, send } => {
            let store = open_store(&config, csv)?;
            let as_of = date.unwrap_or_else(|| Local::now().date_naive());
            let mut scheduler = EventScheduler::new();

            let due = scheduler.due_on(&store, as_of);
            if due.is_empty() {
                println!("Nothing due on {}", as_of);
                return Ok(());
            }

            println!("Due on {}:", as_of);
            for notification in &due {
                if send {
                    scheduler.mark_notified(notification.customer_name(), as_of);
                    println!("  {}", notification.confirmation());
                } else {
                    println!("  {}", notification.action_label());
                }
            }
        }
    }

    Ok(())
}

/// Build the store from the configured snapshot and customer table
fn open_store(config: &PortalConfig, csv_override: Option<PathBuf>) -> Result<RecordStore> {
    let mut store = match &config.snapshot_path {
        Some(path) if path.exists() => RecordStore::load_json(path)
            .with_context(|| format!("restoring snapshot {}", path.display()))?,
        _ => RecordStore::new(),
    };

    if let Some(path) = csv_override.or_else(|| config.customers_csv.clone()) {
        load_customers(&mut store, &path)
            .with_context(|| format!("loading customers from {}", path.display()))?;
    }

    Ok(store)
}
