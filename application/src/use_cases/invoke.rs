//! Remote invocation.
//!
//! [`RemoteInvoker`] sends one prompt through a [`CompletionGateway`] and
//! pulls the answer out of the structured response. Every failure on the
//! way (transport, auth, quota, unexpected payload) collapses into a single
//! [`InvocationError`] whose message is meant to be shown to the user.

use crate::config::InvocationOptions;
use crate::ports::completion_gateway::{CompletionGateway, CompletionRequest, GatewayError};
use llm_qa_domain::{BuiltPrompt, DomainError};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Coarse classification of an [`InvocationError`], for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationErrorKind {
    Network,
    Authentication,
    RateLimited,
    Api,
    MalformedResponse,
}

/// Any failure of the remote call.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct InvocationError {
    kind: InvocationErrorKind,
    message: String,
}

impl InvocationError {
    pub fn new(kind: InvocationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> InvocationErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<GatewayError> for InvocationError {
    fn from(error: GatewayError) -> Self {
        let kind = match &error {
            GatewayError::Connection(_) => InvocationErrorKind::Network,
            GatewayError::Authentication(_) => InvocationErrorKind::Authentication,
            GatewayError::RateLimited(_) => InvocationErrorKind::RateLimited,
            GatewayError::Api { .. } => InvocationErrorKind::Api,
            GatewayError::InvalidResponse(_) => InvocationErrorKind::MalformedResponse,
        };
        Self::new(kind, error.to_string())
    }
}

impl From<DomainError> for InvocationError {
    fn from(error: DomainError) -> Self {
        Self::new(InvocationErrorKind::MalformedResponse, error.to_string())
    }
}

/// Successful invocation: trimmed answer plus the untouched payload.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub answer: String,
    pub raw: Value,
}

/// Sends prompts to the remote model.
///
/// Holds the gateway (which owns the credential) and nothing else; options
/// are passed per call so one invoker can serve differently configured
/// callers.
#[derive(Clone)]
pub struct RemoteInvoker {
    gateway: Arc<dyn CompletionGateway>,
}

impl RemoteInvoker {
    pub fn new(gateway: Arc<dyn CompletionGateway>) -> Self {
        Self { gateway }
    }

    /// Perform exactly one remote call.
    pub async fn invoke(
        &self,
        prompt: &BuiltPrompt,
        options: &InvocationOptions,
    ) -> Result<Invocation, InvocationError> {
        if prompt.style() != options.shape.template_style() {
            warn!(
                "Prompt framed as {} but sending to {} endpoint",
                prompt.style(),
                options.shape
            );
        }

        let request = CompletionRequest {
            shape: options.shape,
            model: options.model.clone(),
            prompt: prompt.clone(),
            max_tokens: options.max_tokens,
            temperature: options.temperature,
        };

        debug!(
            "Invoking {} ({} endpoint, prompt {} chars)",
            options.model,
            options.shape,
            prompt.len()
        );

        let raw = self.gateway.complete(&request).await?;
        let answer = options.shape.extract_answer(&raw)?;

        Ok(Invocation { answer, raw })
    }
}
