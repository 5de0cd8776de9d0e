//! Data types for the OpenFIGI mapping client: the identifier vocabulary,
//! mapping jobs, decoded result records, status codes, and configuration.
#![warn(missing_docs)]

mod config;
pub mod ident;
mod job;
mod response;
mod status;
mod vocabulary;

pub use config::{ContentType, DEFAULT_ENDPOINT, ENV_API_KEY, ENV_API_URL, FigiConfig};
pub use job::MappingJob;
pub use response::{FigiResult, JobResult, MappingResponse, json_text};
pub use status::ApiStatus;
pub use vocabulary::{EXCH_CODE_LEN, FIGI_LEN, IdType, JobModifier, MAX_FIELD_LEN};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the figi workspace.
///
/// Every component returns these as values to its immediate caller; nothing
/// is retried or swallowed. A missing optional field is data, not an error.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FigiError {
    /// Resource exhaustion while building a value.
    #[error("allocation failed: {0}")]
    Allocation(String),

    /// The request could not be serialized.
    #[error("encode failed: {0}")]
    Encode(String),

    /// The round trip failed below HTTP (DNS, TLS, reset, timeout).
    #[error("transport failed: {msg}")]
    Transport {
        /// Human-readable cause.
        msg: String,
    },

    /// The service answered with a non-200 status.
    #[error("service returned {status}: {body}")]
    Http {
        /// Classified status.
        status: ApiStatus,
        /// Raw reply body, usually a human-readable explanation.
        body: String,
    },

    /// The reply body is not a well-formed mapping response.
    #[error("parse failed: {0}")]
    Parse(String),

    /// Invalid input argument or configuration.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The service returned a different number of job results than jobs sent.
    #[error("job count mismatch: sent {expected}, received {actual}")]
    JobCountMismatch {
        /// Jobs submitted.
        expected: usize,
        /// Job results decoded.
        actual: usize,
    },
}

impl FigiError {
    /// Helper: build a `Transport` error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport { msg: msg.into() }
    }

    /// Helper: build an `Http` error from a status and reply body.
    pub fn http(status: ApiStatus, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }

    /// Helper: build a `Parse` error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Status associated with this error, if it came from the service.
    #[must_use]
    pub const fn status(&self) -> Option<ApiStatus> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport { .. } => Some(ApiStatus::OtherError),
            _ => None,
        }
    }

    /// Returns true if repeating the same request later may succeed.
    ///
    /// Rate limiting, server errors and transport failures qualify; the
    /// caller decides whether and when to retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        self.status().is_some_and(ApiStatus::is_retryable)
    }
}
