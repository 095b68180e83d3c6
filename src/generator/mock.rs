use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{GenerateRequest, Generation, Generator, TokenUsage};
use crate::error::GenerateError;

/// One scripted outcome.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Reply with this text.
    Text(String),
    /// Succeed at the transport level but carry no text.
    Empty,
    /// Fail as if the endpoint rejected the call.
    Error(String),
}

impl MockReply {
    pub fn json(value: serde_json::Value) -> Self {
        Self::Text(value.to_string())
    }
}

/// A scripted generator for tests. Returns pre-defined replies in order and
/// records every request it receives.
pub struct MockGenerator {
    replies: Vec<MockReply>,
    index: AtomicUsize,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl MockGenerator {
    pub fn new(replies: Vec<MockReply>) -> Self {
        Self {
            replies,
            index: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A generator whose every call fails.
    pub fn failing() -> Self {
        Self::new(Vec::new())
    }

    /// Requests seen so far, oldest first.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    pub fn calls(&self) -> usize {
        self.index.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Generator for MockGenerator {
    async fn generate(&self, request: &GenerateRequest) -> Result<Generation, GenerateError> {
        if let Ok(mut seen) = self.requests.lock() {
            seen.push(request.clone());
        }
        let i = self.index.fetch_add(1, Ordering::SeqCst);
        let reply = self.replies.get(i).ok_or_else(|| {
            GenerateError::Other(format!("MockGenerator: no more replies (called {} times)", i + 1))
        })?;
        match reply {
            MockReply::Text(text) => Ok(Generation {
                text: text.clone(),
                usage: Some(TokenUsage {
                    input_tokens: request.prompt.len() as u64,
                    output_tokens: text.len() as u64,
                }),
            }),
            MockReply::Empty => Ok(Generation {
                text: String::new(),
                usage: None,
            }),
            MockReply::Error(message) => Err(GenerateError::Other(message.clone())),
        }
    }
}
