pub mod handlers;
mod types;

pub use handlers::AppState;
pub use types::AskRequest;

use crate::{Result, config::Config, llm::OllamaClient};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the application router over the given state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/ask", post(handlers::ask))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let client = OllamaClient::new(&config.llm);

    let state = AppState {
        client: Arc::new(client),
        model: config.llm.model.clone(),
        system_prompt: config.llm.system_prompt.clone(),
    };

    let app = app(state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
