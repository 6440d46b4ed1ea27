//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the interactive question loop
#[derive(Parser, Debug)]
#[command(name = "llm-qa")]
#[command(author, version, about = "Ask a hosted LLM questions from the terminal")]
#[command(long_about = r#"
llm-qa normalizes each question, wraps it in an instructional prompt and
sends it to an OpenAI-compatible completion service.

Without a question argument it starts an interactive loop; type 'exit' or
'quit' to leave. The API key is read from the environment variable named by
api.api_key_env (OPENAI_API_KEY by default).

Configuration files are loaded from (in priority order):
1. LLM_QA_* environment variables (e.g. LLM_QA_API__MODEL=gpt-4o)
2. --config <path>     Explicit config file
3. ./llm-qa.toml       Project-level config
4. ~/.config/llm-qa/config.toml   Global config

Example:
  llm-qa
  llm-qa "What is the capital of France?"
  echo "What is Rust?" | llm-qa
"#)]
pub struct Cli {
    /// Ask a single question and exit instead of starting the loop
    pub question: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// CLI arguments for the web form server
#[derive(Parser, Debug)]
#[command(name = "llm-qa-web")]
#[command(author, version, about = "Serve a web form that asks a hosted LLM questions")]
pub struct WebCli {
    /// Address to bind (overrides web.host)
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to listen on (overrides web.port and PORT)
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definitions_are_valid() {
        Cli::command().debug_assert();
        WebCli::command().debug_assert();
    }

    #[test]
    fn test_one_shot_question() {
        let cli = Cli::try_parse_from(["llm-qa", "-vv", "What is Rust?"]).unwrap();
        assert_eq!(cli.question.as_deref(), Some("What is Rust?"));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_loop_mode_has_no_question() {
        let cli = Cli::try_parse_from(["llm-qa", "--no-config", "-q"]).unwrap();
        assert!(cli.question.is_none());
        assert!(cli.no_config);
        assert!(cli.quiet);
    }

    #[test]
    fn test_web_overrides() {
        let cli = WebCli::try_parse_from(["llm-qa-web", "--host", "127.0.0.1", "-p", "8080"]).unwrap();
        assert_eq!(cli.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(cli.port, Some(8080));
    }
}
