use thiserror::Error;

/// Errors raised by the forecasting pipeline
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Data fetch failed for {symbol}: {reason}")]
    DataFetch { symbol: String, reason: String },

    #[error("Insufficient history: {available} valid closes available, {required} required")]
    InsufficientHistory { available: usize, required: usize },

    #[error("Model inference failed: {reason}")]
    ModelInference { reason: String },
}
