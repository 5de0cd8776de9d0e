use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use figi_core::{MappingTransport, RawReply};

/// Instruction for how the next `send` should behave.
#[derive(Clone, Debug)]
pub enum MockBehavior {
    /// Answer with this HTTP status and body.
    Reply(u16, String),
    /// Fail the round trip before any HTTP status arrives.
    Fail(String),
    /// Never answer (simulate a stalled connection).
    Hang,
}

/// One request as the dynamic mock saw it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedRequest {
    /// Request body text.
    pub body: String,
    /// API key passed by the caller, if any.
    pub api_key: Option<String>,
}

#[derive(Default)]
struct InternalState {
    queued: VecDeque<MockBehavior>,
    fallback: Option<MockBehavior>,
    requests: Vec<RecordedRequest>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Queue a behavior for exactly one upcoming call.
    pub async fn push_behavior(&self, behavior: MockBehavior) {
        let mut guard = self.state.lock().await;
        guard.queued.push_back(behavior);
    }

    /// Behavior used once the queue is empty.
    pub async fn set_behavior(&self, behavior: MockBehavior) {
        let mut guard = self.state.lock().await;
        guard.fallback = Some(behavior);
    }

    /// Copy of every request seen so far, oldest first.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        let guard = self.state.lock().await;
        guard.requests.clone()
    }

    /// Clear queued and fallback behaviors and the request log.
    pub async fn clear_all(&self) {
        let mut guard = self.state.lock().await;
        guard.queued.clear();
        guard.fallback = None;
        guard.requests.clear();
    }
}

/// A transport that defers all behavior to an external controller.
///
/// With nothing queued and no fallback set, calls answer 500.
pub struct DynamicMockTransport {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockTransport {
    /// Create a new dynamic mock transport and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn MappingTransport>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn MappingTransport>, controller)
    }
}

#[async_trait]
impl MappingTransport for DynamicMockTransport {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn send(&self, body: &str, api_key: Option<&str>) -> RawReply {
        // Take the behavior without holding the lock across the await below
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.requests.push(RecordedRequest {
                body: body.to_string(),
                api_key: api_key.map(str::to_string),
            });
            guard
                .queued
                .pop_front()
                .or_else(|| guard.fallback.clone())
        };
        match behavior {
            Some(MockBehavior::Reply(code, text)) => RawReply::http(code, text),
            Some(MockBehavior::Fail(cause)) => RawReply::transport_failure(cause),
            Some(MockBehavior::Hang) => std::future::pending::<RawReply>().await,
            None => RawReply::http(500, "figi-mock: no behavior configured"),
        }
    }
}
