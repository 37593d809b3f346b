use async_trait::async_trait;
use humancoach::{
    Error, Result,
    llm::{ChatClient, ChatRequest, ChatResponse, ResponseMessage},
};
use std::sync::{Arc, Mutex};

/// Mock chat client for testing. Replies are consumed in order; every
/// request the server sends is recorded for later inspection.
pub struct MockChatClient {
    pub responses: Arc<Mutex<Vec<ChatResponse>>>,
    pub requests: Arc<Mutex<Vec<ChatRequest>>>,
    pub error: Option<String>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_responses(self, responses: Vec<ChatResponse>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn request_log(&self) -> Arc<Mutex<Vec<ChatRequest>>> {
        Arc::clone(&self.requests)
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::llm("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

/// A well-formed Ollama reply carrying the given assistant text.
pub fn assistant_reply(content: &str) -> ChatResponse {
    ChatResponse {
        model: Some("llama2:latest".to_string()),
        message: Some(ResponseMessage {
            role: Some("assistant".to_string()),
            content: Some(content.to_string()),
        }),
        done: true,
    }
}

/// A reply that parses but carries no assistant text.
pub fn reply_without_message() -> ChatResponse {
    ChatResponse {
        model: Some("llama2:latest".to_string()),
        message: None,
        done: true,
    }
}
