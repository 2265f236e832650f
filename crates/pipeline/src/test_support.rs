//! Canned [`ChatModel`] for stage tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use grow_openai::types::ChatRequest;
use grow_openai::{ChatModel, ModelError};

/// Replies with a fixed answer (or error) and records every request.
pub struct StubModel {
    reply: Result<String, u16>,
    calls: AtomicUsize,
    requests: Mutex<Vec<ChatRequest>>,
}

impl StubModel {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fails every call with an API error of the given status.
    pub fn failing(status: u16) -> Self {
        Self {
            reply: Err(status),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<ChatRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ChatModel for StubModel {
    async fn complete(&self, request: &ChatRequest) -> Result<String, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(ModelError::Api {
                status: *status,
                message: "stubbed failure".to_string(),
            }),
        }
    }
}
