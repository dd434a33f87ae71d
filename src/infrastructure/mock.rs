use crate::domain::ports::PriceProvider;
use crate::domain::series::{PriceSeries, SeriesPoint};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use tracing::info;

/// Serves a fixed close series on consecutive weekdays, for tests and
/// offline runs.
pub struct MockPriceProvider {
    closes: Vec<f64>,
    last_date: NaiveDate,
}

impl MockPriceProvider {
    /// `closes` land on consecutive weekdays walking backwards from
    /// `last_date` (weekends are skipped, like a real venue).
    pub fn new(closes: Vec<f64>, last_date: NaiveDate) -> Self {
        Self { closes, last_date }
    }
}

#[async_trait]
impl PriceProvider for MockPriceProvider {
    async fn daily_closes(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries> {
        let mut points = Vec::with_capacity(self.closes.len());
        let mut date = self.last_date;

        for close in self.closes.iter().rev() {
            while matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
                date -= Duration::days(1);
            }
            points.push(SeriesPoint {
                date,
                close: Some(*close),
            });
            date -= Duration::days(1);
        }

        points.reverse();
        points.retain(|p| p.date >= start && p.date < end);

        info!(
            "MockPriceProvider: Serving {} rows for {}",
            points.len(),
            symbol
        );

        Ok(PriceSeries::new(symbol.to_string(), points))
    }
}
