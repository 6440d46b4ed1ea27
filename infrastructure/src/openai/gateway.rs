//! OpenAI gateway - performs the HTTP exchange for one completion

use super::protocol::{RequestBody, status_error};
use crate::config::ApiCredential;
use async_trait::async_trait;
use llm_qa_application::{CompletionGateway, CompletionRequest, GatewayError};
use llm_qa_domain::ResponseShape;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

const USER_AGENT: &str = concat!("llm-qa/", env!("CARGO_PKG_VERSION"));

/// Gateway to an OpenAI-compatible completion service
///
/// Owns the credential; nothing outside this type ever sees the key.
pub struct OpenAiGateway {
    client: reqwest::Client,
    base_url: String,
    credential: ApiCredential,
}

impl OpenAiGateway {
    /// Create a gateway for `base_url` (e.g. `https://api.openai.com/v1`).
    ///
    /// `timeout` of `None` leaves reqwest's default (no overall timeout).
    pub fn new(
        base_url: impl Into<String>,
        credential: ApiCredential,
        timeout: Option<Duration>,
    ) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Connection(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            credential,
        })
    }

    /// Full URL of the endpoint serving `shape`
    pub fn endpoint_url(&self, shape: ResponseShape) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), shape.endpoint())
    }
}

#[async_trait]
impl CompletionGateway for OpenAiGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<Value, GatewayError> {
        let url = self.endpoint_url(request.shape);
        let body = RequestBody::from_request(request);

        info!("POST {} (model: {})", url, request.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.credential.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!("Request to {} failed: {}", url, e);
                GatewayError::Connection(e.to_string())
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Connection(format!("Failed to read response: {}", e)))?;

        debug!("Response status {} ({} bytes)", status.as_u16(), text.len());

        if !status.is_success() {
            let error = status_error(status.as_u16(), &text);
            warn!("API returned HTTP {}: {}", status.as_u16(), error);
            return Err(error);
        }

        serde_json::from_str(&text).map_err(|e| GatewayError::InvalidResponse(e.to_string()))
    }
}

impl std::fmt::Debug for OpenAiGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiGateway")
            .field("base_url", &self.base_url)
            .field("credential", &self.credential)
            .finish()
    }
}
