//! Presentation layer for llm-qa
//!
//! This crate contains CLI definitions, the console question loop, output
//! formatting, progress reporting and the web form front end.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod web;

// Re-export commonly used types
pub use chat::{LineOutcome, QaRepl};
pub use cli::commands::{Cli, WebCli};
pub use config::ReplConfig;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ProgressReporter;
pub use web::{AppState, bind, create_router, serve};
