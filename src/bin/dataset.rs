//! Historical dataset export.
//!
//! Pulls daily close history for a symbol and writes it to a CSV file of
//! `date,close` rows, suitable for offline model training.

use anyhow::{Context, bail};
use chrono::{Duration, NaiveDate, Utc};
use clap::Parser;
use goldcast::config::ProviderEnvConfig;
use goldcast::domain::ports::PriceProvider;
use goldcast::infrastructure::yahoo::YahooMarketData;
use std::fs::File;
use tracing::{info, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Symbol to export (Yahoo Finance notation)
    #[arg(short, long, default_value = "GC=F")]
    symbol: String,

    /// Start date (YYYY-MM-DD)
    #[arg(long, default_value = "2015-01-01")]
    start: String,

    /// End date (YYYY-MM-DD, exclusive). Defaults to the day after today.
    #[arg(long)]
    end: Option<String>,

    /// Output CSV path
    #[arg(short, long, default_value = "gold_dataset.csv")]
    output: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    let cli = Cli::parse();

    let start = NaiveDate::parse_from_str(&cli.start, "%Y-%m-%d")
        .context("Invalid --start date, expected YYYY-MM-DD")?;
    let end = match &cli.end {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .context("Invalid --end date, expected YYYY-MM-DD")?,
        None => Utc::now().date_naive() + Duration::days(1),
    };
    if start >= end {
        bail!("--start {} must be before --end {}", start, end);
    }

    let provider_config = ProviderEnvConfig::from_env();
    let provider = YahooMarketData::new(provider_config.base_url, provider_config.timeout_secs)?;

    info!("📦 EXPORTING DAILY CLOSES");
    info!("Symbol: {}", cli.symbol);
    info!("Period: {} to {}", start, end);
    info!("Output: {}", cli.output);

    let series = provider.daily_closes(&cli.symbol, start, end).await?;
    let rows = series.valid_closes();

    let skipped = series.len() - rows.len();
    if skipped > 0 {
        warn!("Skipping {} rows without a usable close", skipped);
    }
    if rows.is_empty() {
        bail!(
            "No usable close prices for {} between {} and {}",
            cli.symbol,
            start,
            end
        );
    }

    let file =
        File::create(&cli.output).with_context(|| format!("Failed to create {}", cli.output))?;
    let mut wtr = csv::WriterBuilder::new().has_headers(true).from_writer(file);
    for row in &rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    info!("✅ Wrote {} rows to {}", rows.len(), cli.output);

    Ok(())
}
