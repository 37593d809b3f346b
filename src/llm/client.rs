use super::types::{ChatRequest, ChatResponse};
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse>;
}

/// Client for Ollama's native chat API.
pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
}

impl OllamaClient {
    pub fn new(config: &LlmConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ChatClient for OllamaClient {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        let url = format!("{}/api/chat", self.base_url);

        debug!(model = %request.model, "Sending chat request to Ollama");

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::llm(format!("Ollama returned {status}: {body}")));
        }

        let reply: ChatResponse = response.json().await?;

        debug!(done = reply.done, "Received chat response from Ollama");

        Ok(reply)
    }
}
