//! Wiring shared by the `llm-qa` and `llm-qa-web` binaries
//!
//! Logging setup, configuration loading and dependency injection of the
//! OpenAI gateway into the question use case.

use anyhow::{Result, bail};
use llm_qa_application::AskQuestionUseCase;
use llm_qa_domain::Instruction;
use llm_qa_infrastructure::{ApiCredential, ConfigError, ConfigLoader, FileConfig, OpenAiGateway};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Initialize logging on stderr based on verbosity level; `RUST_LOG` wins
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the merged configuration, honoring `--config` and `--no-config`
pub fn load_config(config_path: Option<&PathBuf>, no_config: bool) -> Result<FileConfig> {
    let config = if no_config {
        info!("Configuration files disabled; using defaults and environment");
        ConfigLoader::load_defaults().map_err(ConfigError::from)?
    } else {
        if let Some(path) = config_path.filter(|p| !p.exists()) {
            bail!("Config file not found: {}", path.display());
        }
        ConfigLoader::load(config_path).map_err(ConfigError::from)?
    };

    for warning in config.validate() {
        warn!("Config: {}", warning);
    }
    Ok(config)
}

/// Build the use case; fails when the API credential is missing
pub fn build_use_case(
    config: &FileConfig,
    default_instruction: Instruction,
) -> Result<AskQuestionUseCase> {
    let credential = ApiCredential::from_env(&config.api.api_key_env)?;
    info!("API key loaded from {}", config.api.api_key_env);

    let gateway = OpenAiGateway::new(&config.api.base_url, credential, config.api.timeout())?;
    let options = config.api.to_invocation_options();
    let template = config.prompt.to_template(config.api.shape, default_instruction);

    info!(
        "Using {} via {} ({} endpoint)",
        options.model, config.api.base_url, options.shape
    );

    Ok(AskQuestionUseCase::new(Arc::new(gateway), template, options))
}

/// REPL history location under the platform data directory
pub fn history_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("llm-qa").join("history.txt"))
}
