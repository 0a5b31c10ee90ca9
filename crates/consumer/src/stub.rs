//! Scripted request processor for behavioral tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde_json::Value;
use wirestub_runtime::{ClientError, RemoteRequest, RequestProcessor};

/// Test double for [`RequestProcessor`].
///
/// Records every dispatched request, answers `fetch_result` calls with a
/// canned value, and counts `dispose` calls. Clones share state, so a stub
/// can be handed to a client and inspected afterwards.
#[derive(Debug, Clone, Default)]
pub struct StubProcessor {
    inner: Arc<StubState>,
}

#[derive(Debug, Default)]
struct StubState {
    result: Mutex<Value>,
    requests: Mutex<Vec<RemoteRequest>>,
    dispose_calls: AtomicUsize,
}

impl StubProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stub answering every `fetch_result` call with `result`.
    pub fn returning(result: Value) -> Self {
        let stub = Self::default();
        *stub
            .inner
            .result
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = result;
        stub
    }

    /// Requests observed so far, in dispatch order.
    pub fn requests(&self) -> Vec<RemoteRequest> {
        self.inner
            .requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of times disposal was forwarded to this processor.
    pub fn dispose_calls(&self) -> usize {
        self.inner.dispose_calls.load(Ordering::SeqCst)
    }

    fn record(&self, request: RemoteRequest) {
        self.inner
            .requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(request);
    }
}

impl RequestProcessor for StubProcessor {
    async fn fetch_result<T>(&self, request: RemoteRequest) -> Result<T, ClientError>
    where
        T: DeserializeOwned + Send,
    {
        self.record(request);
        let result = self
            .inner
            .result
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();
        Ok(serde_json::from_value(result)?)
    }

    async fn execute(&self, request: RemoteRequest) -> Result<(), ClientError> {
        self.record(request);
        Ok(())
    }

    fn dispose(&self) {
        self.inner.dispose_calls.fetch_add(1, Ordering::SeqCst);
    }
}
