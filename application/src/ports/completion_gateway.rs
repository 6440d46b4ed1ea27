//! Completion Gateway port
//!
//! Defines the single network exchange with a hosted completion service.
//! Implementations perform exactly one request per call: no retries, no
//! streaming, no caching.

use async_trait::async_trait;
use llm_qa_domain::{BuiltPrompt, Model, ResponseShape};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during a gateway exchange
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response body: {0}")]
    InvalidResponse(String),
}

/// One request to the remote model
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub shape: ResponseShape,
    pub model: Model,
    pub prompt: BuiltPrompt,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Gateway to a hosted completion service
///
/// Returns the decoded response body untouched; interpreting it is the
/// caller's job. The credential lives inside the implementation.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Send one request and return the raw structured response
    async fn complete(&self, request: &CompletionRequest) -> Result<Value, GatewayError>;
}
