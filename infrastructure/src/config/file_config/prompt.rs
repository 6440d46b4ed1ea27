//! Prompt configuration from TOML (`[prompt]` section)

use llm_qa_domain::{Instruction, PromptTemplate, ResponseShape};
use serde::{Deserialize, Serialize};

/// Raw prompt configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePromptConfig {
    /// Closing instruction preset: "concise", "student" or "clarify".
    /// Each front end has its own default when unset.
    pub instruction: Option<Instruction>,
    /// System message override
    pub system: Option<String>,
}

impl FilePromptConfig {
    /// Build the prompt template for the given endpoint family
    pub fn to_template(&self, shape: ResponseShape, fallback: Instruction) -> PromptTemplate {
        let template =
            PromptTemplate::new(shape.template_style(), self.instruction.unwrap_or(fallback));
        match &self.system {
            Some(system) => template.with_system(system.clone()),
            None => template,
        }
    }
}
