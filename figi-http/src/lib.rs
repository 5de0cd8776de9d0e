//! figi-http
//!
//! Production [`MappingTransport`] that posts mapping requests over HTTPS
//! with `reqwest`. One call is one round trip; nothing is retried.
#![warn(missing_docs)]

use std::time::Duration;

use async_trait::async_trait;
use figi_core::{ContentType, FigiConfig, FigiError, MappingTransport, RawReply};
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use url::Url;

/// Header carrying the caller's API key.
pub const API_KEY_HEADER: &str = "X-OPENFIGI-APIKEY";

/// HTTPS transport backed by a shared `reqwest::Client`.
///
/// `reqwest::Client` is `Clone + Send + Sync`, so a transport can be shared
/// across tasks without locking; every call uses its own buffers.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Url,
    content_type: ContentType,
    user_agent: String,
}

impl HttpTransport {
    /// Transport name used in logs.
    pub const NAME: &'static str = "figi-http";

    /// Build a transport from configuration.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the endpoint is not an absolute http(s) URL or
    /// the timeout is zero, and `Transport` if the HTTP client cannot be
    /// constructed.
    pub fn from_config(cfg: &FigiConfig) -> Result<Self, FigiError> {
        let endpoint = parse_endpoint(&cfg.endpoint)?;
        check_timeout(cfg.timeout)?;
        let client = reqwest::Client::builder()
            .timeout(cfg.timeout)
            .connect_timeout(cfg.timeout)
            .build()
            .map_err(|e| FigiError::transport(format!("building HTTP client: {e}")))?;
        Ok(Self {
            client,
            endpoint,
            content_type: cfg.content_type,
            user_agent: cfg.user_agent.clone(),
        })
    }

    /// Wrap an existing `reqwest::Client`; timeouts are whatever it was
    /// built with.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the endpoint is not an absolute http(s) URL.
    pub fn with_client(
        client: reqwest::Client,
        endpoint: &str,
        content_type: ContentType,
    ) -> Result<Self, FigiError> {
        Ok(Self {
            client,
            endpoint: parse_endpoint(endpoint)?,
            content_type,
            user_agent: FigiConfig::default().user_agent,
        })
    }

    /// Endpoint requests are posted to.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn read_body(mut resp: reqwest::Response) -> Result<String, reqwest::Error> {
        let mut buf: Vec<u8> = Vec::new();
        while let Some(chunk) = resp.chunk().await? {
            buf.extend_from_slice(&chunk);
        }
        Ok(match String::from_utf8(buf) {
            Ok(text) => text,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    valid_up_to = e.utf8_error().valid_up_to(),
                    "reply body is not valid UTF-8; invalid bytes replaced"
                );
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        })
    }
}

/// Parse and check a mapping endpoint URL.
///
/// # Errors
/// Returns `InvalidArg` for unparsable URLs and non-http(s) schemes.
pub fn parse_endpoint(s: &str) -> Result<Url, FigiError> {
    let url = Url::parse(s).map_err(|e| FigiError::InvalidArg(format!("endpoint {s:?}: {e}")))?;
    match url.scheme() {
        "https" | "http" => Ok(url),
        other => Err(FigiError::InvalidArg(format!(
            "endpoint {s:?}: unsupported scheme {other}"
        ))),
    }
}

/// Reject a zero round-trip bound, which would fail every call.
///
/// # Errors
/// Returns `InvalidArg` for `Duration::ZERO`.
pub fn check_timeout(timeout: Duration) -> Result<(), FigiError> {
    if timeout.is_zero() {
        return Err(FigiError::InvalidArg("timeout must be non-zero".to_string()));
    }
    Ok(())
}

#[async_trait]
impl MappingTransport for HttpTransport {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn send(&self, body: &str, api_key: Option<&str>) -> RawReply {
        let mut req = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, self.content_type.as_str())
            .header(USER_AGENT, self.user_agent.as_str())
            .body(body.to_owned());
        if let Some(key) = api_key.filter(|k| !k.is_empty()) {
            req = req.header(API_KEY_HEADER, key);
        }

        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(endpoint = %self.endpoint, error = %e, "mapping request failed");
                return RawReply::transport_failure(e.to_string());
            }
        };

        let code = resp.status().as_u16();
        match Self::read_body(resp).await {
            Ok(text) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(status = code, bytes = text.len(), "mapping reply received");
                RawReply::http(code, text)
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(status = code, error = %e, "reading mapping reply failed");
                RawReply::transport_failure(e.to_string())
            }
        }
    }
}
