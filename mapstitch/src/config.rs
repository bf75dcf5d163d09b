//! Run configuration and credential lookup.

use std::time::Duration;

use thiserror::Error;

use crate::grid::GridConfig;
use crate::output::OutputFormat;
use crate::provider::{DEFAULT_TIMEOUT_SECS, STATIC_MAPS_URL};
use crate::stitch::DEFAULT_DELAY;

/// Environment variable holding the Maps Platform API key.
pub const API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Please set your {0} environment variable")]
    MissingApiKey(&'static str),
}

/// Everything needed for one stitching run apart from the area itself.
#[derive(Debug, Clone, PartialEq)]
pub struct StitchConfig {
    pub grid: GridConfig,
    /// Pause between tile requests.
    pub delay: Duration,
    pub endpoint: String,
    pub timeout: Duration,
    pub format: OutputFormat,
}

impl Default for StitchConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            delay: DEFAULT_DELAY,
            endpoint: STATIC_MAPS_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            format: OutputFormat::default(),
        }
    }
}

/// Reads the API key from the process environment.
pub fn api_key_from_env() -> Result<String, ConfigError> {
    api_key_from_lookup(|name| std::env::var(name).ok())
}

/// Reads the API key through `lookup`. Unset and empty values are both missing.
pub fn api_key_from_lookup<F>(lookup: F) -> Result<String, ConfigError>
where
    F: FnOnce(&str) -> Option<String>,
{
    lookup(API_KEY_ENV)
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .ok_or(ConfigError::MissingApiKey(API_KEY_ENV))
}
