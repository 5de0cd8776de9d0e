use std::sync::Arc;

use async_trait::async_trait;
use figi_types::{ApiStatus, FigiError};

/// Raw outcome of one round trip to the mapping service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReply {
    /// Classified status.
    pub status: ApiStatus,
    /// HTTP status code as received; `None` when no HTTP reply arrived.
    pub http_code: Option<u16>,
    /// Reply body; empty when no HTTP reply arrived.
    pub body: String,
    /// Cause of a transport-level failure.
    pub failure: Option<String>,
}

impl RawReply {
    /// A reply that carried an HTTP status.
    pub fn http(code: u16, body: impl Into<String>) -> Self {
        Self {
            status: ApiStatus::from_code(code),
            http_code: Some(code),
            body: body.into(),
            failure: None,
        }
    }

    /// A round trip that failed before any HTTP status arrived.
    pub fn transport_failure(cause: impl Into<String>) -> Self {
        Self {
            status: ApiStatus::OtherError,
            http_code: None,
            body: String::new(),
            failure: Some(cause.into()),
        }
    }

    /// Turn the reply into the body of a successful call.
    ///
    /// # Errors
    /// Returns `Transport` when no HTTP reply arrived and `Http` (carrying the
    /// reply body) for any status other than 200.
    pub fn into_body(self) -> Result<String, FigiError> {
        match (self.status, self.http_code) {
            (ApiStatus::Ok, _) => Ok(self.body),
            (_, None) => Err(FigiError::transport(
                self.failure.unwrap_or_else(|| "no reply".to_string()),
            )),
            (status, Some(_)) => Err(FigiError::http(status, self.body)),
        }
    }
}

/// One HTTP round trip to the mapping endpoint.
///
/// Implementations never fail past this boundary: transport-level problems
/// are reported as [`RawReply::transport_failure`]. There is no retry; each
/// call is exactly one attempt.
#[async_trait]
pub trait MappingTransport: Send + Sync {
    /// Stable transport name for logs and errors.
    fn name(&self) -> &'static str;

    /// Post `body` and return the raw reply. `api_key` is attached as
    /// `X-OPENFIGI-APIKEY` only when present and non-empty.
    async fn send(&self, body: &str, api_key: Option<&str>) -> RawReply;
}

impl dyn MappingTransport {
    /// Build a transport from a closure receiving the request body and key.
    pub fn from_fn<F>(name: &'static str, f: F) -> Arc<dyn MappingTransport>
    where
        F: Send + Sync + 'static + Fn(&str, Option<&str>) -> RawReply,
    {
        struct FnTransport<F> {
            name: &'static str,
            f: F,
        }

        #[async_trait]
        impl<F> MappingTransport for FnTransport<F>
        where
            F: Send + Sync + 'static + Fn(&str, Option<&str>) -> RawReply,
        {
            fn name(&self) -> &'static str {
                self.name
            }

            async fn send(&self, body: &str, api_key: Option<&str>) -> RawReply {
                (self.f)(body, api_key)
            }
        }

        Arc::new(FnTransport { name, f })
    }
}
