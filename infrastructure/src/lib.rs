//! Infrastructure layer for llm-qa
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration and credential loading.

pub mod config;
pub mod openai;

// Re-export commonly used types
pub use config::{
    ApiCredential, ConfigError, ConfigLoader, FileApiConfig, FileCliConfig, FileConfig,
    FilePromptConfig, FileWebConfig,
};
pub use openai::OpenAiGateway;
