//! Configuration for the Foodboard API client
//!
//! Supports environment-based configuration with sensible defaults.

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::env;

/// Default backend origin (local development server)
const DEFAULT_API_URL: &str = "http://localhost:9091/api";

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL for the Foodboard backend, including the `/api` prefix
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create configuration from environment variables
    ///
    /// Reads `FOODBOARD_API_URL` for the backend origin, falling back to the
    /// local development default.
    pub fn from_env() -> ApiResult<Self> {
        let base_url =
            env::var("FOODBOARD_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let config = Self { base_url };
        config.validate()?;
        Ok(config)
    }

    /// Builder-style method to set the base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.is_empty() {
            return Err(ApiError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::config(
                "base_url must start with http:// or https://",
            ));
        }

        Ok(())
    }
}
