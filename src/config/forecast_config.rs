//! Forecast configuration parsing from environment variables.

use std::env;

/// Forecast environment configuration
#[derive(Debug, Clone)]
pub struct ForecastEnvConfig {
    pub symbol: String,
    pub model_path: String,
}

impl Default for ForecastEnvConfig {
    fn default() -> Self {
        Self {
            symbol: "GC=F".to_string(),
            model_path: "models/gold_lstm.onnx".to_string(),
        }
    }
}

impl ForecastEnvConfig {
    pub fn from_env() -> Self {
        Self {
            symbol: env::var("SYMBOL").unwrap_or_else(|_| "GC=F".to_string()),
            model_path: env::var("MODEL_PATH")
                .unwrap_or_else(|_| "models/gold_lstm.onnx".to_string()),
        }
    }
}
