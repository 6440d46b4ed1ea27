//! Application layer for llm-qa
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::InvocationOptions;
pub use ports::{
    completion_gateway::{CompletionGateway, CompletionRequest, GatewayError},
    progress::{AskProgressNotifier, NoProgress},
};
pub use use_cases::ask_question::{AskError, AskOutput, AskQuestionUseCase, PreparedQuestion};
pub use use_cases::invoke::{Invocation, InvocationError, InvocationErrorKind, RemoteInvoker};
