//! Session configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.

use std::time::Duration;

use serde::Deserialize;

use crate::panel::color::ColorPolicy;

pub const DEFAULT_ENDPOINT: &str = "https://api.entur.io/journey-planner/v3/graphql";
pub const DEFAULT_CLIENT_NAME: &str = "stopmap";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Below this zoom level no markers are shown and nothing is fetched
    pub min_zoom: f64,
    /// Quiet period of the refresh debounce
    pub debounce_ms: u64,
    pub api: ApiConfig,
    pub colors: ColorPolicy,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub endpoint: String,
    /// Sent as the `ET-Client-Name` header
    pub client_name: String,
    pub timeout_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_zoom: 14.0,
            debounce_ms: 75,
            api: ApiConfig::default(),
            colors: ColorPolicy::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            client_name: DEFAULT_CLIENT_NAME.to_owned(),
            timeout_ms: 10_000,
        }
    }
}

impl SessionConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_zoom.is_finite() || self.min_zoom < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "min_zoom must be a non-negative number, got {}",
                self.min_zoom
            )));
        }
        if self.api.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("api.endpoint is empty".into()));
        }
        if self.api.client_name.trim().is_empty() {
            return Err(ConfigError::Invalid("api.client_name is empty".into()));
        }
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
