//! Deterministic [`MappingTransport`]s for tests and examples.
//!
//! - [`MockTransport`] answers from a small fixture table and mimics the
//!   service's request-level errors.
//! - [`EchoTransport`] echoes every submitted job back as its own result.
//! - [`DynamicMockTransport`] is scripted from the outside through a
//!   [`DynamicMockController`].

use async_trait::async_trait;
use figi_core::{JobResult, MappingJob, MappingTransport, RawReply};
use serde_json::Value;

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockTransport, MockBehavior, RecordedRequest};

/// Job limit per request when no API key is sent.
pub const MAX_JOBS_WITHOUT_KEY: usize = 10;
/// Job limit per request with an API key.
pub const MAX_JOBS_WITH_KEY: usize = 100;
/// API key the mock rejects with 401.
pub const REJECTED_KEY: &str = "invalid";

/// Fixture-backed mock of the mapping service.
///
/// Special `idValue`s force failures: `FAIL` fails the round trip before any
/// HTTP status, `RATE_LIMIT` answers 429 and `SERVER_ERROR` answers 500.
/// Unknown identifiers get the service's "No identifier found." warning.
pub struct MockTransport;

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn forced(jobs: &[MappingJob]) -> Option<RawReply> {
        jobs.iter().find_map(|job| match job.id_value.as_str() {
            "FAIL" => Some(RawReply::transport_failure("figi-mock: forced failure")),
            "RATE_LIMIT" => Some(RawReply::http(429, "Too Many Requests")),
            "SERVER_ERROR" => Some(RawReply::http(500, "Internal Server Error")),
            _ => None,
        })
    }

    fn answer(job: &MappingJob) -> JobResult {
        fixtures::by_job(job).map_or_else(
            || JobResult {
                warning: Some("No identifier found.".to_string()),
                ..JobResult::default()
            },
            JobResult::matched,
        )
    }
}

#[async_trait]
impl MappingTransport for MockTransport {
    fn name(&self) -> &'static str {
        "figi-mock"
    }

    async fn send(&self, body: &str, api_key: Option<&str>) -> RawReply {
        let key = api_key.filter(|k| !k.is_empty());
        if key == Some(REJECTED_KEY) {
            return RawReply::http(401, "Invalid API key.");
        }
        let Ok(jobs) = serde_json::from_str::<Vec<MappingJob>>(body) else {
            return RawReply::http(400, "Request body must be a JSON array of mapping jobs.");
        };
        let limit = if key.is_some() {
            MAX_JOBS_WITH_KEY
        } else {
            MAX_JOBS_WITHOUT_KEY
        };
        if jobs.len() > limit {
            return RawReply::http(413, format!("Too many mapping jobs in request ({limit} max)."));
        }
        if let Some(reply) = Self::forced(&jobs) {
            return reply;
        }
        let results: Vec<JobResult> = jobs.iter().map(Self::answer).collect();
        match serde_json::to_string(&results) {
            Ok(text) => RawReply::http(200, text),
            Err(e) => RawReply::http(500, e.to_string()),
        }
    }
}

/// Echo service: each submitted job object comes back as the single result
/// of its job, with its `idValue` also reported as `figi`.
pub struct EchoTransport;

impl EchoTransport {
    fn echo(job: Value) -> Value {
        let mut record = job;
        if let Value::Object(obj) = &mut record
            && let Some(id) = obj.get("idValue").cloned()
        {
            obj.insert("figi".to_string(), id);
        }
        serde_json::json!({ "data": [record] })
    }
}

#[async_trait]
impl MappingTransport for EchoTransport {
    fn name(&self) -> &'static str {
        "figi-echo"
    }

    async fn send(&self, body: &str, _api_key: Option<&str>) -> RawReply {
        match serde_json::from_str::<Vec<Value>>(body) {
            Ok(jobs) => {
                let reply: Vec<Value> = jobs.into_iter().map(Self::echo).collect();
                RawReply::http(200, Value::Array(reply).to_string())
            }
            Err(e) => RawReply::http(400, e.to_string()),
        }
    }
}
