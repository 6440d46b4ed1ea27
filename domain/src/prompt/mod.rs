//! Prompt domain
//!
//! Fixed instructional templates that wrap a normalized question before it
//! is sent to the model.

mod template;

pub use template::{
    BuiltPrompt, DEFAULT_SYSTEM_PROMPT, Instruction, PromptTemplate, TemplateStyle, build_prompt,
};
