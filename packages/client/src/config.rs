//! Client configuration: API base URL and where it comes from

use std::env;

use thiserror::Error;
use url::Url;

/// Base URL used when nothing is configured
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Environment variable read by [`ClientConfig::from_env`]
pub const API_BASE_ENV: &str = "SVARA_API_BASE";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Unsupported URL scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),
}

/// Client configuration, fixed at construction time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Validates `base_url` and strips any trailing slashes so endpoint
    /// paths can be appended directly.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');

        let parsed = Url::parse(trimmed).map_err(|e| ConfigError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Reads `SVARA_API_BASE`, falling back to `http://localhost:8000`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_value(env::var(API_BASE_ENV).ok())
    }

    /// Same fallback rules as [`ClientConfig::from_env`] for an already-read value.
    /// Unset and blank both mean the default.
    pub fn from_value(value: Option<String>) -> Result<Self, ConfigError> {
        match value {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Ok(Self::default()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins an endpoint path (starting with `/`) onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }
}
