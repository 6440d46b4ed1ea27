//! Router and server setup for the web form

use super::flash::FlashSigner;
use super::handlers::{ask, health, index};
use axum::Router;
use axum::routing::get;
use llm_qa_application::AskQuestionUseCase;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub use_case: AskQuestionUseCase,
    pub signer: Arc<FlashSigner>,
}

impl AppState {
    pub fn new(use_case: AskQuestionUseCase, secret: &str) -> Self {
        Self {
            use_case,
            signer: Arc::new(FlashSigner::new(secret)),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(ask))
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Bind `host:port`; `host` may be an IP literal or a resolvable name
pub async fn bind(host: &str, port: u16) -> std::io::Result<TcpListener> {
    let listener = TcpListener::bind((host, port)).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    Ok(listener)
}

/// Bind `host:port` and serve until the process is stopped
pub async fn serve(state: AppState, host: &str, port: u16) -> std::io::Result<()> {
    let listener = bind(host, port).await?;
    axum::serve(listener, create_router(state)).await
}
