use super::types::AskRequest;
use crate::llm::{ChatClient, ChatMessage, ChatRequest};
use axum::{extract::State, response::Html};
use std::sync::Arc;
use tracing::{error, info};

static INDEX_HTML: &str = include_str!("../../static/index.html");

/// Body returned when Ollama answers but the reply lacks the assistant text.
/// The literal is part of the observable contract; clients match on it.
const INVALID_REPLY_BODY: &str = "Error: Invalid response format from Ollama";

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn ChatClient>,
    pub model: String,
    pub system_prompt: String,
}

/// Serve the embedded chat UI at `GET /`.
pub async fn home() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `POST /ask`. Always replies 200 with a `text/plain` body: the model's
/// answer on success, an `Error: `-prefixed string on any failure. Clients
/// tell the two apart only by that prefix, so the status code never varies.
///
/// The body is parsed by hand rather than through the `Json` extractor;
/// extractor rejections would surface as 4xx and break that contract.
pub async fn ask(State(state): State<AppState>, body: String) -> String {
    match answer(&state, &body).await {
        Ok(text) => text,
        Err(e) => {
            error!("Error in ask route: {}", e);
            format!("Error: {}", e)
        }
    }
}

async fn answer(state: &AppState, body: &str) -> crate::Result<String> {
    let request: AskRequest = serde_json::from_str(body)?;

    info!("Received question ({} chars)", request.question.len());

    let chat_request = ChatRequest {
        model: state.model.clone(),
        messages: vec![
            ChatMessage::system(state.system_prompt.clone()),
            ChatMessage::user(request.question),
        ],
        stream: false,
    };

    let reply = state.client.chat(chat_request).await?;

    Ok(match reply.answer_text() {
        Some(text) => text.to_string(),
        None => INVALID_REPLY_BODY.to_string(),
    })
}
