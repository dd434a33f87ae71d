use crate::domain::errors::ForecastError;
use crate::domain::series::{DailyClose, PriceSeries};

/// Minimum number of valid closes the fallback path will still forecast on.
pub const FALLBACK_MIN_CLOSES: usize = 7;

/// Calendar days to over-fetch so weekends, holidays and data gaps still
/// leave enough valid closes behind.
pub fn fetch_buffer_days(window_len: usize) -> i64 {
    (window_len as i64 * 2).max(180)
}

/// Trailing run of valid closes selected for one forecast request.
/// Holds at least one entry, oldest first.
#[derive(Debug, Clone)]
pub struct HistoryWindow {
    entries: Vec<DailyClose>,
}

impl HistoryWindow {
    /// The last `n` valid closes of the series. Insufficiency is reported,
    /// never silently truncated.
    pub fn select_trailing(series: &PriceSeries, n: usize) -> Result<Self, ForecastError> {
        let valid = series.valid_closes();
        if valid.len() < n {
            return Err(ForecastError::InsufficientHistory {
                available: valid.len(),
                required: n,
            });
        }
        Ok(Self {
            entries: valid[valid.len() - n..].to_vec(),
        })
    }

    /// Every valid close in the series, for the fallback path.
    pub fn select_all(series: &PriceSeries) -> Result<Self, ForecastError> {
        let valid = series.valid_closes();
        if valid.is_empty() {
            return Err(ForecastError::InsufficientHistory {
                available: 0,
                required: 1,
            });
        }
        Ok(Self { entries: valid })
    }

    pub fn entries(&self) -> &[DailyClose] {
        &self.entries
    }

    pub fn closes(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.close).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last_close(&self) -> f64 {
        self.entries[self.entries.len() - 1].close
    }

    /// Close before the last one, absent for single-entry windows.
    pub fn previous_close(&self) -> Option<f64> {
        if self.entries.len() < 2 {
            None
        } else {
            Some(self.entries[self.entries.len() - 2].close)
        }
    }
}
