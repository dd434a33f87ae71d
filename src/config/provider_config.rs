//! Price provider configuration parsing from environment variables.

use std::env;

/// Provider environment configuration
#[derive(Debug, Clone)]
pub struct ProviderEnvConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ProviderEnvConfig {
    fn default() -> Self {
        Self {
            base_url: "https://query1.finance.yahoo.com".to_string(),
            timeout_secs: 30,
        }
    }
}

impl ProviderEnvConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("PROVIDER_BASE_URL")
                .unwrap_or_else(|_| "https://query1.finance.yahoo.com".to_string()),
            timeout_secs: env::var("PROVIDER_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<u64>()
                .unwrap_or(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_config_defaults() {
        let config = ProviderEnvConfig::default();
        assert_eq!(config.base_url, "https://query1.finance.yahoo.com");
        assert_eq!(config.timeout_secs, 30);
    }
}
