//! Goldcast - next trading-day close forecaster
//!
//! Fetches recent daily closes for a symbol, runs the pretrained sequence
//! model and prints the forecast together with change figures and window
//! statistics.
//!
//! # Usage
//! ```sh
//! cargo run -- --symbol GC=F --window 7
//! ```
//!
//! # Environment Variables
//! - `SYMBOL` - Symbol to forecast (default: GC=F)
//! - `MODEL_PATH` - Path to the ONNX model (default: models/gold_lstm.onnx)
//! - `FORECAST_WINDOW` - History window length, 7 or 30 (default: 30)
//! - `PROVIDER_BASE_URL` - Price data endpoint (default: Yahoo chart API)

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use goldcast::application::forecast::{
    ForecastOutcome, ForecastReport, ForecastRequest, Forecaster,
};
use goldcast::application::ml::onnx_model;
use goldcast::config::{Config, WindowLength};
use goldcast::domain::calendar::WeekdayCalendar;
use goldcast::infrastructure::yahoo::YahooMarketData;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(author, version, about = "Next trading-day close price forecaster", long_about = None)]
struct Cli {
    /// Symbol to forecast (overrides SYMBOL)
    #[arg(short, long)]
    symbol: Option<String>,

    /// History window length in closes, 7 or 30 (overrides FORECAST_WINDOW)
    #[arg(short, long)]
    window: Option<String>,

    /// Path to the ONNX model file (overrides MODEL_PATH)
    #[arg(short, long)]
    model: Option<String>,

    /// Target date candidate (YYYY-MM-DD), adjusted to the next business day
    #[arg(long)]
    date: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Setup logging
    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Goldcast {} starting...", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let symbol = cli.symbol.unwrap_or(config.symbol);
    let window = match cli.window {
        Some(w) => WindowLength::from_str(&w)?,
        None => config.window,
    };
    let model_path = cli.model.unwrap_or(config.model_path);

    let target_candidate = cli
        .date
        .map(|d| {
            NaiveDate::parse_from_str(&d, "%Y-%m-%d")
                .context(format!("Invalid date format: {}", d))
        })
        .transpose()?;

    info!(
        "Configuration loaded: Symbol={}, Window={} closes, Model={}",
        symbol,
        window.closes(),
        model_path
    );

    let provider = Arc::new(YahooMarketData::new(
        config.provider_base_url,
        config.provider_timeout_secs,
    )?);
    let model = onnx_model::shared_model(Path::new(&model_path))?;

    let forecaster = Forecaster::new(provider, model, Arc::new(WeekdayCalendar));

    let request = ForecastRequest {
        symbol,
        window_len: window.closes(),
        today: Utc::now().date_naive(),
        target_candidate,
    };

    match forecaster.run(&request).await? {
        ForecastOutcome::Primary(report) => print_report(&report, false),
        ForecastOutcome::Fallback(report) => print_report(&report, true),
        ForecastOutcome::Failed {
            available,
            required,
        } => {
            println!(
                "❌ Not enough history to forecast: {} valid closes available, {} required.",
                available, required
            );
            println!("   Try a shorter window or a more liquid symbol.");
        }
    }

    Ok(())
}

fn print_report(report: &ForecastReport, fallback: bool) {
    println!();
    println!("{}", "=".repeat(64));
    println!(
        "📈 {} - predicted close for {}",
        report.symbol, report.prediction.target_date
    );
    println!("{}", "=".repeat(64));

    if fallback {
        println!(
            "⚠️  Requested window unavailable; used all {} valid closes instead.",
            report.used_window_len
        );
    }

    println!("\nCloses used ({}):", report.used_window_len);
    for entry in report.window.entries() {
        println!("  {}  {:>10.2}", entry.date, entry.close);
    }

    let change = &report.change;
    println!(
        "\nLast close:      {:>10.2}  ({} {:+.2} / {:+.2}%)",
        report.window.last_close(),
        change.prev_direction,
        change.prev_delta,
        change.prev_percent
    );
    println!(
        "Predicted close: {:>10.2}  ({} {:+.2} / {:+.2}%)",
        report.prediction.price,
        change.pred_direction,
        change.pred_delta,
        change.pred_percent
    );

    let stats = &report.stats;
    println!(
        "\nWindow stats: mean {:.2} | min {:.2} | max {:.2} | std {:.2}",
        stats.mean, stats.min, stats.max, stats.std_dev
    );
    println!(
        "Model: {} (input length {}, single-step)",
        report.model_name, report.model_sequence_len
    );
}
