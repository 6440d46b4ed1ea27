//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod api;
mod cli;
mod prompt;
mod web;

pub use api::FileApiConfig;
pub use cli::FileCliConfig;
pub use prompt::FilePromptConfig;
pub use web::FileWebConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Remote API settings
    pub api: FileApiConfig,
    /// Prompt template settings
    pub prompt: FilePromptConfig,
    /// Interactive CLI settings
    pub cli: FileCliConfig,
    /// Web form server settings
    pub web: FileWebConfig,
}

impl FileConfig {
    /// Validate the configuration, returning a human-readable warning for
    /// each suspicious value. Nothing here is fatal.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        issues.extend(self.api.validate());
        if self.cli.raw_preview_chars == 0 && self.cli.show_raw {
            issues.push("cli.raw_preview_chars is 0; raw responses will print as '...'".to_string());
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use llm_qa_domain::{Instruction, Model, ResponseShape};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[api]
base_url = "http://localhost:8080/v1"
shape = "completion"
model = "gpt-3.5-turbo-instruct"
max_tokens = 128
temperature = 0.0
api_key_env = "MY_KEY"
timeout_seconds = 30

[prompt]
instruction = "student"
system = "Answer in French."

[cli]
show_raw = false
raw_preview_chars = 500

[web]
host = "127.0.0.1"
port = 8000
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080/v1");
        assert_eq!(config.api.shape, ResponseShape::Completion);
        assert_eq!(config.api.model(), Model::Gpt35TurboInstruct);
        assert_eq!(config.api.max_tokens, 128);
        assert_eq!(config.api.api_key_env, "MY_KEY");
        assert_eq!(config.api.timeout_seconds, Some(30));
        assert_eq!(config.prompt.instruction, Some(Instruction::Student));
        assert_eq!(config.prompt.system.as_deref(), Some("Answer in French."));
        assert!(!config.cli.show_raw);
        assert_eq!(config.cli.raw_preview_chars, 500);
        assert!(config.cli.color);
        assert_eq!(config.web.host, "127.0.0.1");
        assert_eq!(config.web.port, 8000);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[api]
model = "gpt-4o"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.model(), Model::Gpt4o);
        // Defaults should apply
        assert_eq!(config.api.shape, ResponseShape::Chat);
        assert_eq!(config.api.max_tokens, 300);
        assert!(config.prompt.instruction.is_none());
        assert!(config.cli.show_progress);
        assert_eq!(config.web.port, 5000);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_reports_problems() {
        let mut config = FileConfig::default();
        config.api.temperature = 3.5;
        config.api.max_tokens = 0;
        config.cli.raw_preview_chars = 0;
        assert_eq!(config.validate().len(), 3);
    }
}
