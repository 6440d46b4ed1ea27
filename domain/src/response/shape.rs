//! Response shapes of the two endpoint families.
//!
//! ```text
//! Chat:        POST {base}/chat/completions   choices[0].message.content
//! Completion:  POST {base}/completions        choices[0].text
//! ```

use crate::core::error::DomainError;
use crate::prompt::TemplateStyle;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which endpoint family is called and how its answer is extracted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseShape {
    #[default]
    Chat,
    Completion,
}

impl ResponseShape {
    /// Path relative to the API base URL
    pub fn endpoint(&self) -> &'static str {
        match self {
            ResponseShape::Chat => "chat/completions",
            ResponseShape::Completion => "completions",
        }
    }

    /// Prompt framing that matches this endpoint
    pub fn template_style(&self) -> TemplateStyle {
        match self {
            ResponseShape::Chat => TemplateStyle::Chat,
            ResponseShape::Completion => TemplateStyle::Completion,
        }
    }

    fn answer_path(&self) -> &'static str {
        match self {
            ResponseShape::Chat => "choices[0].message.content",
            ResponseShape::Completion => "choices[0].text",
        }
    }

    /// Extract the first choice's text, trimmed of surrounding whitespace.
    pub fn extract_answer(&self, raw: &Value) -> Result<String, DomainError> {
        let choice = raw.get("choices").and_then(|c| c.get(0));
        let text = match self {
            ResponseShape::Chat => choice
                .and_then(|c| c.get("message"))
                .and_then(|m| m.get("content"))
                .and_then(Value::as_str),
            ResponseShape::Completion => choice.and_then(|c| c.get("text")).and_then(Value::as_str),
        };

        text.map(|t| t.trim().to_string())
            .ok_or_else(|| DomainError::MissingField(self.answer_path().to_string()))
    }
}

impl std::fmt::Display for ResponseShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.template_style().as_str())
    }
}

impl std::str::FromStr for ResponseShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<TemplateStyle>().map(|style| match style {
            TemplateStyle::Chat => ResponseShape::Chat,
            TemplateStyle::Completion => ResponseShape::Completion,
        })
    }
}
