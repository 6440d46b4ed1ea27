//! Redacted metadata extracted from a raw response

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Token usage counters reported by the API. Each counter may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: Option<u64>,
    pub completion_tokens: Option<u64>,
    pub total_tokens: Option<u64>,
}

impl TokenUsage {
    fn from_value(usage: &Value) -> Self {
        let counter = |name: &str| usage.get(name).and_then(Value::as_u64);
        Self {
            prompt_tokens: counter("prompt_tokens"),
            completion_tokens: counter("completion_tokens"),
            total_tokens: counter("total_tokens"),
        }
    }
}

/// Small, safe-to-render subset of a response
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResponseMetadata {
    /// Model identifier echoed by the API
    pub model: Option<String>,
    /// Usage counters, when the API reported them
    pub usage: Option<TokenUsage>,
    /// Length of the prompt body in characters
    pub prompt_len: usize,
}

impl ResponseMetadata {
    pub fn extract(raw: &Value, prompt_len: usize) -> Self {
        Self {
            model: raw.get("model").and_then(Value::as_str).map(str::to_string),
            usage: raw
                .get("usage")
                .filter(|u| u.is_object())
                .map(TokenUsage::from_value),
            prompt_len,
        }
    }
}
