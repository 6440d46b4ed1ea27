//! Domain layer for llm-qa
//!
//! This crate contains the pure logic of the question-answering pipeline.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Pipeline
//!
//! ```text
//! raw input ─▶ Question ─▶ normalize() ─▶ PromptTemplate::build() ─▶ (remote call) ─▶ ResponseShape::extract_answer()
//! ```
//!
//! The remote call itself lives behind a port in the application layer;
//! everything here is deterministic and side-effect free.

pub mod core;
pub mod normalize;
pub mod prompt;
pub mod response;

// Re-export commonly used types
pub use core::{error::DomainError, model::Model, question::Question, string::truncate};
pub use normalize::{NormalizedQuestion, normalize};
pub use prompt::{
    BuiltPrompt, DEFAULT_SYSTEM_PROMPT, Instruction, PromptTemplate, TemplateStyle, build_prompt,
};
pub use response::{
    metadata::{ResponseMetadata, TokenUsage},
    shape::ResponseShape,
};
