//! Blocking client for the Census Reporter API.

use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::error::{CurateError, Result};
use crate::input::ApiResponse;
use crate::render::RenderConfig;

use super::DataSource;

/// Client for `{api_url}/data/show/{release}`.
pub struct CensusReporterClient {
    client: Client,
    api_url: String,
}

impl CensusReporterClient {
    /// Create a client for the default API root.
    pub fn new() -> Result<Self> {
        Self::with_config(&RenderConfig::default())
    }

    /// Create a client from a render configuration.
    pub fn with_config(config: &RenderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CurateError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Request URL for a query. Table ids are uppercased.
    pub fn url(&self, tables: &[&str], geo_filter: &str, release: &str) -> Result<Url> {
        let table_ids = tables.join(",").to_uppercase();
        Url::parse_with_params(
            &format!("{}/data/show/{}", self.api_url, release),
            &[("table_ids", table_ids.as_str()), ("geo_ids", geo_filter)],
        )
        .map_err(|e| CurateError::Config(format!("Invalid API URL '{}': {}", self.api_url, e)))
    }
}

impl DataSource for CensusReporterClient {
    fn fetch(&self, tables: &[&str], geo_filter: &str, release: &str) -> Result<ApiResponse> {
        let url = self.url(tables, geo_filter, release)?;
        info!(%url, "fetching tables");

        let response = self.client.get(url.clone()).send()?;
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().unwrap_or_default();
            return Err(CurateError::Http(format!(
                "API error ({}) for {}: {}",
                status, url, error_text
            )));
        }

        let body = response.text()?;
        debug!(bytes = body.len(), "received response");
        Ok(serde_json::from_str(&body)?)
    }
}
