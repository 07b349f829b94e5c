//! COVID Tracking API Client
//!
//! Thin reqwest wrapper over the two daily-statistics endpoints. No retry;
//! the only timeout is the client-level request timeout.

use std::time::Duration;

use crate::constants::{NATIONAL_DAILY_ENDPOINT, STATES_DAILY_ENDPOINT};
use crate::domain::config::ApiConfig;
use crate::domain::record::DailyCases;
use crate::error::Result;

/// HTTP client for the COVID Tracking API
pub struct CovidApi {
    config: ApiConfig,
    http: reqwest::Client,
}

impl CovidApi {
    /// Create a new API client from the given configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            config: config.clone(),
            http,
        })
    }

    /// Fetch the nationwide daily series (newest-first, as delivered)
    pub async fn fetch_national_daily(&self) -> Result<Vec<DailyCases>> {
        self.fetch_daily(NATIONAL_DAILY_ENDPOINT).await
    }

    /// Fetch the per-state daily series (newest-first, as delivered)
    pub async fn fetch_states_daily(&self) -> Result<Vec<DailyCases>> {
        self.fetch_daily(STATES_DAILY_ENDPOINT).await
    }

    async fn fetch_daily(&self, endpoint: &str) -> Result<Vec<DailyCases>> {
        let url = format!("{}{}", self.config.base_url, endpoint);
        tracing::debug!("Fetching {url}");

        let body = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        // One malformed record aborts the whole batch
        let records: Vec<DailyCases> = serde_json::from_str(&body)?;
        tracing::info!("Fetched {} records from {endpoint}", records.len());
        Ok(records)
    }

    /// Get the current configuration
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

impl std::fmt::Debug for CovidApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CovidApi")
            .field("config", &self.config)
            .finish()
    }
}
