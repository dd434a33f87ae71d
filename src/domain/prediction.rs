use crate::domain::scaling::MinMaxScaler;
use chrono::NaiveDate;

/// Model output mapped back to price units for one target date.
#[derive(Debug, Clone, Copy)]
pub struct Prediction {
    pub price: f64,
    pub target_date: NaiveDate,
}

impl Prediction {
    /// Recover a price from the model's scaled scalar using the scaler fit
    /// on the same request's window.
    pub fn from_scaled_output(
        scaled: f64,
        scaler: &MinMaxScaler,
        target_date: NaiveDate,
    ) -> Self {
        Self {
            price: scaler.inverse(scaled),
            target_date,
        }
    }
}
