mod client;
mod types;

pub use client::{ChatClient, OllamaClient};
pub use types::{ChatMessage, ChatRequest, ChatResponse, ResponseMessage};
