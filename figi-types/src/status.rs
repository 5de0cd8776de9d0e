//! Result codes of a mapping call.

use core::fmt;

use serde::{Deserialize, Serialize};

/// HTTP-derived outcome of a mapping call.
///
/// [`ApiStatus::OtherError`] covers every failure that never produced an HTTP
/// status (DNS, TLS, connection reset, timeout) and any status the service
/// does not document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ApiStatus {
    /// 200: request accepted, body holds one entry per job.
    Ok,
    /// 400: the payload was not a JSON array.
    NotArray,
    /// 401: the API key was rejected.
    InvalidKey,
    /// 404: wrong path.
    InvalidPath,
    /// 405: wrong method.
    InvalidMethod,
    /// 406: unsupported content type.
    InvalidContentType,
    /// 413: too many jobs in one request.
    TooManyJobs,
    /// 429: rate limited.
    TooManyRequests,
    /// 500: service-side failure.
    ServerError,
    /// Transport failure or undocumented status.
    OtherError,
}

impl ApiStatus {
    /// Numeric code of [`ApiStatus::OtherError`]; outside the HTTP range.
    pub const OTHER_ERROR_CODE: u16 = 999;

    /// Classify an HTTP status code.
    #[must_use]
    pub const fn from_code(code: u16) -> Self {
        match code {
            200 => Self::Ok,
            400 => Self::NotArray,
            401 => Self::InvalidKey,
            404 => Self::InvalidPath,
            405 => Self::InvalidMethod,
            406 => Self::InvalidContentType,
            413 => Self::TooManyJobs,
            429 => Self::TooManyRequests,
            500 => Self::ServerError,
            _ => Self::OtherError,
        }
    }

    /// Numeric code; [`Self::OTHER_ERROR_CODE`] for `OtherError`.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::NotArray => 400,
            Self::InvalidKey => 401,
            Self::InvalidPath => 404,
            Self::InvalidMethod => 405,
            Self::InvalidContentType => 406,
            Self::TooManyJobs => 413,
            Self::TooManyRequests => 429,
            Self::ServerError => 500,
            Self::OtherError => Self::OTHER_ERROR_CODE,
        }
    }

    /// True only for [`ApiStatus::Ok`].
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Statuses where repeating the identical request later may succeed.
    #[must_use]
    pub const fn is_retryable(self) -> bool {
        matches!(
            self,
            Self::TooManyRequests | Self::ServerError | Self::OtherError
        )
    }

    /// Short human-readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::NotArray => "request body is not a JSON array",
            Self::InvalidKey => "invalid API key",
            Self::InvalidPath => "invalid path",
            Self::InvalidMethod => "invalid HTTP method",
            Self::InvalidContentType => "invalid content type",
            Self::TooManyJobs => "too many jobs in one request",
            Self::TooManyRequests => "too many requests",
            Self::ServerError => "server error",
            Self::OtherError => "other error",
        }
    }
}

impl fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.description())
    }
}
