//! Web form entrypoint for llm-qa

use anyhow::{Context, Result};
use clap::Parser;
use llm_qa::{build_use_case, init_logging, load_config};
use llm_qa_domain::Instruction;
use llm_qa_infrastructure::ConfigLoader;
use llm_qa_presentation::{AppState, WebCli, serve};
use tracing::{info, warn};

const DEFAULT_SECRET: &str = "change_this_for_prod";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = WebCli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    init_logging(cli.verbose.max(1));
    info!("Starting llm-qa-web");

    let config = load_config(cli.config.as_ref(), cli.no_config)?;

    // === Dependency Injection ===
    let use_case = build_use_case(&config, Instruction::Student)?;

    let secret = match config.web.secret.as_deref() {
        Some(secret) if !secret.is_empty() => secret,
        _ => {
            warn!("LLM_QA_SECRET is not set; using an insecure default flash secret");
            DEFAULT_SECRET
        }
    };

    let host = cli.host.as_deref().unwrap_or(&config.web.host);
    let port = cli.port.unwrap_or(config.web.port);

    serve(AppState::new(use_case, secret), host, port)
        .await
        .with_context(|| format!("Cannot serve on {}:{}", host, port))?;
    Ok(())
}
