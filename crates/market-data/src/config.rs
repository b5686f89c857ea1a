//! Upstream API configuration.
//!
//! Credentials and base address are validated once, when the value is
//! built, and are read-only afterwards.

use std::fmt;

use thiserror::Error;
use url::Url;

/// Query parameter that carries the API key.
pub const API_KEY_PARAM: &str = "p_cert_keystring";

/// Errors raised while building an [`ApiConfig`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required setting: {0}")]
    Missing(&'static str),

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Credentials and base address of the upstream price API.
#[derive(Clone)]
pub struct ApiConfig {
    api_key: String,
    api_id: String,
    base_url: Url,
}

impl ApiConfig {
    /// Builds a configuration, rejecting blank credentials and base URLs
    /// that are not absolute http(s) URLs.
    pub fn new(api_key: &str, api_id: &str, base_url: &str) -> Result<Self, ConfigError> {
        let api_key = required("api key", api_key)?;
        let api_id = required("api id", api_id)?;
        let base_url = required("base url", base_url)?;

        let parsed = Url::parse(&base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: base_url,
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(Self {
            api_key,
            api_id,
            base_url: parsed,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_id(&self) -> &str {
        &self.api_id
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Renders a request URL with the API key parameter masked, for
    /// logging. The rest of the URL is left as is.
    pub fn redact(&self, url: &Url) -> String {
        if !url.query_pairs().any(|(name, _)| name == API_KEY_PARAM) {
            return url.to_string();
        }
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(name, value)| {
                let value = if name == API_KEY_PARAM { "***".into() } else { value };
                (name.into_owned(), value.into_owned())
            })
            .collect();
        let mut redacted = url.clone();
        redacted.query_pairs_mut().clear().extend_pairs(pairs);
        redacted.to_string()
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &"***")
            .field("api_id", &self.api_id)
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

fn required(name: &'static str, value: &str) -> Result<String, ConfigError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ConfigError::Missing(name))
    } else {
        Ok(value.to_string())
    }
}
