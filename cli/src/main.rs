//! CLI entrypoint for llm-qa
//!
//! Interactive question loop, or a single question when one is given on the
//! command line.

use anyhow::Result;
use clap::Parser;
use llm_qa::{build_use_case, history_path, init_logging, load_config};
use llm_qa_domain::Instruction;
use llm_qa_infrastructure::ConfigLoader;
use llm_qa_presentation::{Cli, QaRepl, ReplConfig};
use std::process::ExitCode;
use tracing::info;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    init_logging(cli.verbose);
    info!("Starting llm-qa");

    let config = load_config(cli.config.as_ref(), cli.no_config)?;

    if !config.cli.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let use_case = build_use_case(&config, Instruction::Clarify)?;

    let repl_config = ReplConfig {
        show_raw: config.cli.show_raw,
        raw_preview_chars: config.cli.raw_preview_chars,
        show_progress: config.cli.show_progress && !cli.quiet,
    };
    let mut repl = QaRepl::new(use_case, repl_config);

    // Single question mode
    if let Some(question) = cli.question {
        let answered = repl.ask_once(&question, &mut std::io::stdout()).await?;
        return Ok(if answered {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    if let Some(path) = history_path() {
        repl = repl.with_history_file(path);
    }
    repl.run().await?;

    Ok(ExitCode::SUCCESS)
}
