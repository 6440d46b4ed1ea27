//! API configuration from TOML (`[api]` section)

use llm_qa_application::InvocationOptions;
use llm_qa_domain::{Model, ResponseShape};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw API configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Base URL of an OpenAI-compatible API, including the version segment
    pub base_url: String,
    /// Endpoint family: "chat" or "completion"
    pub shape: ResponseShape,
    /// Model identifier
    pub model: String,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Request timeout in seconds (unset = wait indefinitely)
    pub timeout_seconds: Option<u64>,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        let options = InvocationOptions::default();
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            shape: options.shape,
            model: options.model.to_string(),
            max_tokens: options.max_tokens,
            temperature: options.temperature,
            api_key_env: "OPENAI_API_KEY".to_string(),
            timeout_seconds: None,
        }
    }
}

impl FileApiConfig {
    pub fn model(&self) -> Model {
        Model::from(self.model.trim())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    /// Convert to the application-layer call parameters
    pub fn to_invocation_options(&self) -> InvocationOptions {
        InvocationOptions::default()
            .with_model(self.model())
            .with_max_tokens(self.max_tokens)
            .with_temperature(self.temperature)
            .with_shape(self.shape)
    }

    pub(super) fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.model.trim().is_empty() {
            issues.push("api.model is empty".to_string());
        }
        if self.max_tokens == 0 {
            issues.push("api.max_tokens is 0".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            issues.push(format!(
                "api.temperature {} is outside 0.0..=2.0",
                self.temperature
            ));
        }
        if self.timeout_seconds == Some(0) {
            issues.push("api.timeout_seconds cannot be 0".to_string());
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_invocation_options() {
        let config = FileApiConfig {
            model: " gpt-4 ".to_string(),
            max_tokens: 42,
            temperature: 1.0,
            shape: ResponseShape::Completion,
            ..Default::default()
        };
        let options = config.to_invocation_options();
        assert_eq!(options.model, Model::Gpt4);
        assert_eq!(options.max_tokens, 42);
        assert_eq!(options.temperature, 1.0);
        assert_eq!(options.shape, ResponseShape::Completion);
    }

    #[test]
    fn test_timeout() {
        assert!(FileApiConfig::default().timeout().is_none());
        let config = FileApiConfig {
            timeout_seconds: Some(5),
            ..Default::default()
        };
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }
}
