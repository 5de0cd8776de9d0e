use std::sync::Arc;
use std::time::Duration;

use figi_core::{
    ContentType, FigiConfig, FigiError, JobResult, MappingJob, MappingResponse, MappingTransport,
    RawReply, decode_response, request_body,
};
use figi_http::{HttpTransport, check_timeout, parse_endpoint};

/// Client for the OpenFIGI mapping endpoint.
///
/// Each call to [`OpenFigi::map`] is one encode, one round trip and one
/// decode. The client holds no per-call state, so it can be shared across
/// tasks behind an `Arc`.
pub struct OpenFigi {
    transport: Arc<dyn MappingTransport>,
    cfg: FigiConfig,
}

/// Builder for an [`OpenFigi`] client.
pub struct OpenFigiBuilder {
    transport: Option<Arc<dyn MappingTransport>>,
    cfg: FigiConfig,
}

impl Default for OpenFigiBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenFigiBuilder {
    /// Start from [`FigiConfig::default`]: the public endpoint, no API key,
    /// a 10s timeout and `application/json`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            transport: None,
            cfg: FigiConfig::default(),
        }
    }

    /// Start from [`FigiConfig::from_env`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::new().config(FigiConfig::from_env())
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: FigiConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Use this transport instead of the default HTTPS one.
    ///
    /// Endpoint, content type and user agent are then up to the transport;
    /// the API key and timeout still apply.
    #[must_use]
    pub fn with_transport(mut self, t: Arc<dyn MappingTransport>) -> Self {
        self.transport = Some(t);
        self
    }

    /// API key sent as `X-OPENFIGI-APIKEY`. Blank keys are not sent.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.cfg.api_key = Some(key.into());
        self
    }

    /// Mapping endpoint URL.
    #[must_use]
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.cfg.endpoint = url.into();
        self
    }

    /// Bound for one round trip.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.cfg.timeout = timeout;
        self
    }

    /// Request content type.
    #[must_use]
    pub const fn content_type(mut self, ct: ContentType) -> Self {
        self.cfg.content_type = ct;
        self
    }

    /// `User-Agent` header value.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.cfg.user_agent = ua.into();
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an unusable endpoint URL or a zero timeout,
    /// and `Transport` if the default HTTP client cannot be constructed.
    pub fn build(self) -> Result<OpenFigi, FigiError> {
        parse_endpoint(&self.cfg.endpoint)?;
        check_timeout(self.cfg.timeout)?;
        let transport = match self.transport {
            Some(t) => t,
            None => Arc::new(HttpTransport::from_config(&self.cfg)?),
        };
        Ok(OpenFigi {
            transport,
            cfg: self.cfg,
        })
    }
}

impl OpenFigi {
    /// Start building a client.
    #[must_use]
    pub fn builder() -> OpenFigiBuilder {
        OpenFigiBuilder::new()
    }

    /// Effective configuration.
    #[must_use]
    pub const fn config(&self) -> &FigiConfig {
        &self.cfg
    }

    /// Name of the transport in use.
    #[must_use]
    pub fn transport_name(&self) -> &'static str {
        self.transport.name()
    }

    /// Encode `jobs` and perform one round trip, returning the raw reply
    /// whatever its status.
    ///
    /// A reply that does not arrive within the configured timeout is
    /// reported as a transport failure.
    ///
    /// # Errors
    /// Returns `Encode` if the request cannot be serialized.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "figi::send_raw",
            skip(self, jobs),
            fields(jobs = jobs.len(), transport = self.transport.name()),
        )
    )]
    pub async fn send_raw(&self, jobs: &[MappingJob]) -> Result<RawReply, FigiError> {
        let body = request_body(jobs)?;
        let key = self.cfg.effective_api_key();
        let reply = tokio::time::timeout(self.cfg.timeout, self.transport.send(&body, key))
            .await
            .unwrap_or_else(|_| {
                RawReply::transport_failure(format!("no reply within {:?}", self.cfg.timeout))
            });
        #[cfg(feature = "tracing")]
        tracing::debug!(status = reply.status.code(), bytes = reply.body.len(), "round trip done");
        Ok(reply)
    }

    /// Map identifiers to FIGIs.
    ///
    /// Job results come back in the order the jobs were given.
    ///
    /// # Errors
    /// - `Encode` if the request cannot be serialized.
    /// - `Transport` if no HTTP reply arrived.
    /// - `Http` for any status other than 200, carrying the reply body.
    /// - `Parse` if the reply body is not a mapping response.
    /// - `JobCountMismatch` if the reply holds a different number of job
    ///   results than jobs were sent.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "figi::map", skip(self, jobs), fields(jobs = jobs.len()), err)
    )]
    pub async fn map(&self, jobs: &[MappingJob]) -> Result<MappingResponse, FigiError> {
        let body = self.send_raw(jobs).await?.into_body()?;
        let resp = decode_response(&body)?;
        if resp.len() != jobs.len() {
            return Err(FigiError::JobCountMismatch {
                expected: jobs.len(),
                actual: resp.len(),
            });
        }
        Ok(resp)
    }

    /// Map a single identifier.
    ///
    /// # Errors
    /// Same as [`OpenFigi::map`].
    pub async fn map_one(&self, job: MappingJob) -> Result<JobResult, FigiError> {
        let resp = self.map(std::slice::from_ref(&job)).await?;
        resp.jobs.into_iter().next().ok_or(FigiError::JobCountMismatch {
            expected: 1,
            actual: 0,
        })
    }
}
