//! Prompt templates for the question-answering flow

use serde::{Deserialize, Serialize};

/// Default system message for chat-style framing
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant for an academic project.";

const ASSISTANT_PREAMBLE: &str = "You are a helpful, concise question-answering assistant.";

/// How the prompt is framed for the remote model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateStyle {
    /// System message plus a single user message
    #[default]
    Chat,
    /// One raw prompt string for a text-completion endpoint
    Completion,
}

impl TemplateStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateStyle::Chat => "chat",
            TemplateStyle::Completion => "completion",
        }
    }
}

impl std::fmt::Display for TemplateStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TemplateStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chat" => Ok(TemplateStyle::Chat),
            "completion" => Ok(TemplateStyle::Completion),
            other => Err(format!(
                "unknown template style '{}', expected 'chat' or 'completion'",
                other
            )),
        }
    }
}

/// Closing task instruction appended after the question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Instruction {
    /// Plain concise answer
    Concise,
    /// Concise answer pitched at a student
    Student,
    /// Concise answer, or one clarifying question when ambiguous
    #[default]
    Clarify,
}

impl Instruction {
    pub fn text(&self) -> &'static str {
        match self {
            Instruction::Concise => "Provide a clear, concise answer.",
            Instruction::Student => "Provide a clear, concise answer suitable for a student.",
            Instruction::Clarify => {
                "Provide a clear, concise answer. If the question seems ambiguous, ask a single short clarifying question."
            }
        }
    }
}

/// Embed a normalized question into the instructional template.
///
/// The question text is inserted verbatim.
pub fn build_prompt(normalized: &str, instruction: Instruction) -> String {
    format!(
        "{}\n\nQuestion (processed):\n{}\n\n{}",
        ASSISTANT_PREAMBLE,
        normalized,
        instruction.text()
    )
}

/// A prompt ready to be sent, in the shape its style requires
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuiltPrompt {
    Chat { system: String, user: String },
    Completion { prompt: String },
}

impl BuiltPrompt {
    /// The text that carries the question (user message or raw prompt)
    pub fn body(&self) -> &str {
        match self {
            BuiltPrompt::Chat { user, .. } => user,
            BuiltPrompt::Completion { prompt } => prompt,
        }
    }

    /// Length of [`body`](Self::body) in characters
    pub fn len(&self) -> usize {
        self.body().chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.body().is_empty()
    }

    pub fn style(&self) -> TemplateStyle {
        match self {
            BuiltPrompt::Chat { .. } => TemplateStyle::Chat,
            BuiltPrompt::Completion { .. } => TemplateStyle::Completion,
        }
    }
}

/// Configured prompt builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    style: TemplateStyle,
    instruction: Instruction,
    system: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::new(TemplateStyle::default(), Instruction::default())
    }
}

impl PromptTemplate {
    pub fn new(style: TemplateStyle, instruction: Instruction) -> Self {
        Self {
            style,
            instruction,
            system: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }

    /// Override the system message used for chat framing
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = system.into();
        self
    }

    pub fn style(&self) -> TemplateStyle {
        self.style
    }

    pub fn instruction(&self) -> Instruction {
        self.instruction
    }

    pub fn system(&self) -> &str {
        &self.system
    }

    /// Build a fresh prompt for one request
    pub fn build(&self, normalized: &str) -> BuiltPrompt {
        let body = build_prompt(normalized, self.instruction);
        match self.style {
            TemplateStyle::Chat => BuiltPrompt::Chat {
                system: self.system.clone(),
                user: body,
            },
            TemplateStyle::Completion => BuiltPrompt::Completion {
                prompt: format!("{}\n\n{}\n\nAnswer:", self.system, body),
            },
        }
    }
}
