mod config;
mod error;
mod models;
mod pipeline;
mod source;
mod summary;
mod utils;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::pipeline::Pipeline;

#[derive(Parser)]
#[command(name = "earnings-calendar", about = "Daily earnings calendar newsletter strings", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Print the am/pm earnings summary strings for a date
    Summary {
        /// Calendar date (YYYY-MM-DD, default: today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Render <h6>-wrapped markup instead of plain text
        #[arg(long)]
        markup: bool,
    },

    /// Dump the day's normalized announcement records
    Records {
        /// Calendar date (YYYY-MM-DD, default: today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "earnings_calendar=info,warn",
        1 => "earnings_calendar=debug,info",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = AppConfig::load()?;

    match cli.command {
        Command::Summary { date, markup } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let _t = utils::Timer::start("Daily summary");

            let pipeline = Pipeline::from_config(&config)?;
            let summary = if markup {
                pipeline.markup_summary(date).await?
            } else {
                pipeline.plain_summary(date).await?
            };

            println!("AM: {}", summary.am);
            println!("PM: {}", summary.pm);
        }

        Command::Records { date } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let source = source::from_config(&config)?;
            let records = source.fetch_day(date).await?;

            if records.is_empty() {
                println!("No announcements for {}.", date);
            } else {
                println!("{} announcements for {}:", records.len(), date);
                for r in &records {
                    println!("  {:<8} {}  importance {}", r.symbol, r.time, r.importance);
                }
            }
        }
    }

    Ok(())
}
