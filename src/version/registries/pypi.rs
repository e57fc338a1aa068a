//! PyPI registry client for fetching Python package releases

use std::time::Duration;

use async_trait::async_trait;
use indexmap::IndexMap;
use reqwest::Client;
use serde::Deserialize;
use serde::de::IgnoredAny;
use tracing::debug;

use crate::config::{DEFAULT_PYPI_REGISTRY, FETCH_TIMEOUT_MS, RegistryConfig};
use crate::version::error::RegistryError;
use crate::version::registry::Registry;

/// PyPI registry client
pub struct PypiRegistry {
    client: Client,
    base_url: String,
}

impl Default for PypiRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_PYPI_REGISTRY.to_string())
    }
}

impl PypiRegistry {
    pub fn new(base_url: String) -> Self {
        Self::with_timeout(base_url, Duration::from_millis(FETCH_TIMEOUT_MS))
    }

    /// Creates a client whose requests give up after `timeout`
    pub fn with_timeout(base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .user_agent(concat!("version-fallback/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &RegistryConfig) -> Self {
        Self::with_timeout(
            config.base_url.clone(),
            Duration::from_millis(config.timeout_ms),
        )
    }
}

/// PyPI JSON API response structure
///
/// Only the keys of `releases` are consumed; the per-file metadata is skipped.
#[derive(Debug, Deserialize)]
struct PypiResponse {
    releases: IndexMap<String, IgnoredAny>,
}

#[async_trait]
impl Registry for PypiRegistry {
    async fn fetch_releases(&self, package_name: &str) -> Result<Vec<String>, RegistryError> {
        let url = format!("{}/pypi/{}/json", self.base_url, package_name);
        debug!("Fetching PyPI package: {}", url);

        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(package_name.to_string()));
        }

        if !response.status().is_success() {
            return Err(RegistryError::InvalidResponse(format!(
                "PyPI API returned status {}",
                response.status()
            )));
        }

        let pypi_response: PypiResponse = response
            .json()
            .await
            .map_err(|e| RegistryError::InvalidResponse(e.to_string()))?;

        let releases: Vec<String> = pypi_response.releases.into_keys().collect();

        debug!(
            "Found {} releases for package {}",
            releases.len(),
            package_name
        );

        Ok(releases)
    }
}
