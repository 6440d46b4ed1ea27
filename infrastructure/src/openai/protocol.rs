//! Wire types for the OpenAI-compatible REST API
//!
//! Only requests are typed; responses stay as [`serde_json::Value`] so the
//! full payload can be shown for diagnostics.

use llm_qa_application::{CompletionRequest, GatewayError};
use llm_qa_domain::{BuiltPrompt, ResponseShape};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

/// Body for `POST /chat/completions`
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionBody {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Body for `POST /completions`
#[derive(Debug, Clone, Serialize)]
pub struct TextCompletionBody {
    pub model: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Request body for either endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RequestBody {
    Chat(ChatCompletionBody),
    Text(TextCompletionBody),
}

impl RequestBody {
    /// Build the body the request's shape expects.
    ///
    /// A prompt framed for the other endpoint is adapted rather than
    /// rejected: a raw prompt becomes a single user message, and a
    /// system/user pair is joined into one string.
    pub fn from_request(request: &CompletionRequest) -> Self {
        let model = request.model.to_string();
        match request.shape {
            ResponseShape::Chat => {
                let messages = match &request.prompt {
                    BuiltPrompt::Chat { system, user } => vec![
                        ChatMessage {
                            role: "system",
                            content: system.clone(),
                        },
                        ChatMessage {
                            role: "user",
                            content: user.clone(),
                        },
                    ],
                    BuiltPrompt::Completion { prompt } => vec![ChatMessage {
                        role: "user",
                        content: prompt.clone(),
                    }],
                };
                RequestBody::Chat(ChatCompletionBody {
                    model,
                    messages,
                    max_tokens: request.max_tokens,
                    temperature: request.temperature,
                })
            }
            ResponseShape::Completion => {
                let prompt = match &request.prompt {
                    BuiltPrompt::Chat { system, user } => format!("{}\n\n{}", system, user),
                    BuiltPrompt::Completion { prompt } => prompt.clone(),
                };
                RequestBody::Text(TextCompletionBody {
                    model,
                    prompt,
                    max_tokens: request.max_tokens,
                    temperature: request.temperature,
                })
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Map a non-success HTTP status and its body to a gateway error.
///
/// The API's own `error.message` is preferred; otherwise the raw body (or
/// the status reason) is used so the user always sees something concrete.
pub fn status_error(status: u16, body: &str) -> GatewayError {
    let message = serde_json::from_str::<ApiErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                format!("HTTP {}", status)
            } else {
                trimmed.to_string()
            }
        });

    match status {
        401 | 403 => GatewayError::Authentication(message),
        429 => GatewayError::RateLimited(message),
        _ => GatewayError::Api { status, message },
    }
}
