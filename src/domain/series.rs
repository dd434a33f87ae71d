use chrono::NaiveDate;
use serde::Serialize;

/// One provider row. `close` is None when the venue reported the date
/// without a usable closing price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub close: Option<f64>,
}

/// A validated (date, close) pair inside a selected window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyClose {
    pub date: NaiveDate,
    pub close: f64,
}

/// Ordered daily price history for one symbol. Dates are strictly
/// increasing; duplicate provider rows collapse to the first one seen.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    symbol: String,
    points: Vec<SeriesPoint>,
}

impl PriceSeries {
    pub fn new(symbol: String, mut points: Vec<SeriesPoint>) -> Self {
        points.sort_by_key(|p| p.date);
        points.dedup_by_key(|p| p.date);
        Self { symbol, points }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Rows carrying a finite close, in date order. Missing and non-finite
    /// values are dropped.
    pub fn valid_closes(&self) -> Vec<DailyClose> {
        self.points
            .iter()
            .filter_map(|p| match p.close {
                Some(close) if close.is_finite() => Some(DailyClose {
                    date: p.date,
                    close,
                }),
                _ => None,
            })
            .collect()
    }
}
