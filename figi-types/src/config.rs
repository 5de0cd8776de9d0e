//! Client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default mapping endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.openfigi.com/v1/mapping";

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "OPENFIGI_API_KEY";
/// Environment variable overriding the endpoint.
pub const ENV_API_URL: &str = "OPENFIGI_API_URL";

/// `Content-Type` sent with mapping requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ContentType {
    /// `application/json`.
    #[default]
    Json,
    /// `text/json`, as sent by older reference clients.
    LegacyTextJson,
}

impl ContentType {
    /// Header value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::LegacyTextJson => "text/json",
        }
    }
}

/// Settings for a mapping client and its transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FigiConfig {
    /// Mapping endpoint URL.
    pub endpoint: String,
    /// API key sent as `X-OPENFIGI-APIKEY`; blank keys are not sent.
    pub api_key: Option<String>,
    /// Overall bound for one round trip (connect + read).
    pub timeout: Duration,
    /// Request content type.
    pub content_type: ContentType,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for FigiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            timeout: Duration::from_secs(10),
            content_type: ContentType::Json,
            user_agent: concat!("figi/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FigiConfig {
    /// Defaults overlaid with [`ENV_API_KEY`] and [`ENV_API_URL`] when set
    /// and not blank.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().overlay(|k| std::env::var(k).ok())
    }

    /// Overlay values from a key lookup onto `self`.
    #[must_use]
    pub fn overlay<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |k: &str| lookup(k).filter(|v| !v.trim().is_empty());
        if let Some(key) = non_blank(ENV_API_KEY) {
            self.api_key = Some(key);
        }
        if let Some(url) = non_blank(ENV_API_URL) {
            self.endpoint = url;
        }
        self
    }

    /// API key to send, if any. Empty or whitespace-only keys count as unset.
    #[must_use]
    pub fn effective_api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }
}
