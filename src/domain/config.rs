//! Config - Application Configuration

use serde::{Deserialize, Serialize};

use crate::constants::{BASE_URL, FETCH_TIMEOUT_SECS};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// COVID Tracking API configuration
    pub api: ApiConfig,
}

/// COVID Tracking API connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API base URL, with trailing slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout_secs: FETCH_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: AppConfig = toml::from_str("").expect("empty config");
        assert_eq!(config.api.base_url, BASE_URL);
        assert_eq!(config.api.timeout_secs, FETCH_TIMEOUT_SECS);
    }

    #[test]
    fn test_partial_override() {
        let config: AppConfig =
            toml::from_str("[api]\nbase_url = \"http://localhost:8080/\"\n").expect("config");
        assert_eq!(config.api.base_url, "http://localhost:8080/");
        assert_eq!(config.api.timeout_secs, FETCH_TIMEOUT_SECS);
    }
}
