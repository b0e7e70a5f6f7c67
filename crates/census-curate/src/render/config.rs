//! Renderer configuration.

use serde::{Deserialize, Serialize};

use crate::error::{CurateError, Result};

/// Default Census Reporter API root.
pub const DEFAULT_API_URL: &str = "https://api.censusreporter.org/1.0";

/// Default ACS release.
pub const DEFAULT_RELEASE: &str = "latest";

/// Configuration for fetching and rendering topic tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// API root, without trailing `/data/show`.
    pub api_url: String,
    /// Release id such as `latest` or `acs2019_5yr`.
    pub release: String,
    /// HTTP timeout in seconds.
    pub timeout_secs: u64,
    /// Include margin-of-error columns in raw output.
    pub include_moe: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            release: DEFAULT_RELEASE.to_string(),
            timeout_secs: 30,
            include_moe: false,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `CENSUS_REPORTER_API_URL`,
    /// `CENSUS_REPORTER_RELEASE` and `CENSUS_REPORTER_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(url) = lookup("CENSUS_REPORTER_API_URL") {
            config.api_url = url;
        }
        if let Some(release) = lookup("CENSUS_REPORTER_RELEASE") {
            config.release = release;
        }
        if let Some(timeout) = lookup("CENSUS_REPORTER_TIMEOUT_SECS") {
            config.timeout_secs = timeout.parse().map_err(|_| {
                CurateError::Config(format!(
                    "CENSUS_REPORTER_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                    timeout
                ))
            })?;
        }
        Ok(config)
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_release(mut self, release: impl Into<String>) -> Self {
        self.release = release.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_moe(mut self, include: bool) -> Self {
        self.include_moe = include;
        self
    }
}
