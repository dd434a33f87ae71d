//! Yahoo Finance Market Data
//!
//! Fetches daily close history through the v8 chart API. Rows the venue
//! reports without a close (halts, partial sessions) come back as missing
//! points rather than being dropped here; window selection decides what
//! counts. No retry layer: callers over-fetch their date range instead.

use crate::domain::ports::PriceProvider;
use crate::domain::series::{PriceSeries, SeriesPoint};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use std::time::Duration;
use tracing::info;

// Yahoo rejects the default reqwest user agent
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36";

pub struct YahooMarketData {
    client: reqwest::Client,
    base_url: String,
}

impl YahooMarketData {
    pub fn new(base_url: String, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl PriceProvider for YahooMarketData {
    async fn daily_closes(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries> {
        let period1 = start
            .and_hms_opt(0, 0, 0)
            .context("Invalid start date")?
            .and_utc()
            .timestamp();
        let period2 = end
            .and_hms_opt(0, 0, 0)
            .context("Invalid end date")?
            .and_utc()
            .timestamp();

        let url = format!("{}/v8/finance/chart/{}", self.base_url, symbol);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("period1", period1.to_string()),
                ("period2", period2.to_string()),
                ("interval", "1d".to_string()),
            ])
            .send()
            .await
            .context("Failed to fetch daily closes from Yahoo")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Yahoo chart fetch failed ({}): {}", status, error_text);
        }

        #[derive(Debug, Deserialize)]
        struct ChartResponse {
            chart: Chart,
        }

        #[derive(Debug, Deserialize)]
        struct Chart {
            result: Option<Vec<ChartResult>>,
            error: Option<ChartError>,
        }

        #[derive(Debug, Deserialize)]
        struct ChartError {
            code: String,
            description: String,
        }

        #[derive(Debug, Deserialize)]
        struct ChartResult {
            timestamp: Option<Vec<i64>>,
            indicators: Indicators,
        }

        #[derive(Debug, Deserialize)]
        struct Indicators {
            quote: Vec<Quote>,
        }

        #[derive(Debug, Deserialize)]
        struct Quote {
            close: Option<Vec<Option<f64>>>,
        }

        let body = response
            .text()
            .await
            .context("Failed to read Yahoo chart response")?;
        let payload: ChartResponse = serde_json::from_str(&body).map_err(|e| {
            anyhow::anyhow!("Failed to decode Yahoo chart response: {}. Body: {}", e, body)
        })?;

        if let Some(err) = payload.chart.error {
            anyhow::bail!(
                "Yahoo chart error for {}: {} ({})",
                symbol,
                err.description,
                err.code
            );
        }

        let result = payload
            .chart
            .result
            .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
            .context("Yahoo chart response contained no result")?;

        let timestamps = result.timestamp.unwrap_or_default();
        let closes = result
            .indicators
            .quote
            .into_iter()
            .next()
            .and_then(|q| q.close)
            .unwrap_or_default();

        let points: Vec<SeriesPoint> = timestamps
            .iter()
            .zip(closes)
            .filter_map(|(ts, close)| {
                let date = DateTime::from_timestamp(*ts, 0)?.date_naive();
                Some(SeriesPoint { date, close })
            })
            .collect();

        info!(
            "YahooMarketData: Fetched {} daily rows for {}",
            points.len(),
            symbol
        );

        Ok(PriceSeries::new(symbol.to_string(), points))
    }
}
