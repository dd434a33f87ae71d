//! Configuration module for Goldcast.
//!
//! This module provides structured configuration loading from environment
//! variables, organized by domain: Forecast and Provider.

mod forecast_config;
mod provider_config;

pub use forecast_config::ForecastEnvConfig;
pub use provider_config::ProviderEnvConfig;

use anyhow::Result;
use std::env;
use std::str::FromStr;

/// Requested history window length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowLength {
    Seven,
    Thirty,
}

impl WindowLength {
    /// Number of trailing closes the window holds.
    pub fn closes(self) -> usize {
        match self {
            WindowLength::Seven => 7,
            WindowLength::Thirty => 30,
        }
    }
}

impl FromStr for WindowLength {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "7" => Ok(WindowLength::Seven),
            "30" => Ok(WindowLength::Thirty),
            _ => anyhow::bail!("Invalid FORECAST_WINDOW: {}. Must be '7' or '30'", s),
        }
    }
}

/// Main application configuration.
///
/// This struct aggregates all configuration from sub-modules.
#[derive(Debug, Clone)]
pub struct Config {
    pub symbol: String,
    pub model_path: String,
    pub window: WindowLength,
    pub provider_base_url: String,
    pub provider_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let window_str = env::var("FORECAST_WINDOW").unwrap_or_else(|_| "30".to_string());
        let window = WindowLength::from_str(&window_str)?;

        let forecast = ForecastEnvConfig::from_env();
        let provider = ProviderEnvConfig::from_env();

        Ok(Self {
            symbol: forecast.symbol,
            model_path: forecast.model_path,
            window,
            provider_base_url: provider.base_url,
            provider_timeout_secs: provider.timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_length_parsing() {
        assert!(matches!(
            WindowLength::from_str("7").unwrap(),
            WindowLength::Seven
        ));
        assert!(matches!(
            WindowLength::from_str("30").unwrap(),
            WindowLength::Thirty
        ));
        assert!(WindowLength::from_str("14").is_err());
        assert!(WindowLength::from_str("week").is_err());
    }

    #[test]
    fn test_window_length_close_counts() {
        assert_eq!(WindowLength::Seven.closes(), 7);
        assert_eq!(WindowLength::Thirty.closes(), 30);
    }

    #[test]
    fn test_config_from_env_defaults() {
        let config = Config::from_env().expect("Should parse with defaults");
        assert_eq!(config.symbol, "GC=F");
        assert_eq!(config.window.closes(), 30);
        assert_eq!(config.provider_timeout_secs, 30);
    }
}
