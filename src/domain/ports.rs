use crate::domain::series::PriceSeries;
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Daily closes for `symbol` over [start, end), oldest first. The
    /// result may be shorter than the requested span and rows may lack a
    /// usable close; callers must not assume exact counts.
    async fn daily_closes(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries>;
}
