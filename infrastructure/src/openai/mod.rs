//! OpenAI-compatible HTTP adapter
//!
//! Implements [`CompletionGateway`](llm_qa_application::CompletionGateway)
//! over reqwest for both the chat and the legacy completion endpoints.

pub mod gateway;
pub mod protocol;

pub use gateway::OpenAiGateway;
