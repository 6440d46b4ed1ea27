//! Configuration loading for llm-qa
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `LLM_QA_<SECTION>__<KEY>`, plus `PORT` and `LLM_QA_SECRET`
//! 2. `--config <path>` specified file
//! 3. Project root: `./llm-qa.toml` or `./.llm-qa.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/llm-qa/config.toml`
//! 5. Default values
//!
//! The API credential is never part of the merged configuration; it is read
//! from the environment variable named by `api.api_key_env`.

mod credentials;
mod file_config;
mod loader;

pub use credentials::{ApiCredential, ConfigError};
pub use file_config::{FileApiConfig, FileCliConfig, FileConfig, FilePromptConfig, FileWebConfig};
pub use loader::ConfigLoader;
