//! Console output formatter for question/answer exchanges

use colored::Colorize;
use llm_qa_application::InvocationError;
use llm_qa_domain::{NormalizedQuestion, truncate};
use serde_json::Value;

const SEPARATOR_WIDTH: usize = 40;

/// Formats each stage of an exchange for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn banner() -> String {
        format!(
            "{}",
            "LLM QA CLI — enter a question (type 'exit' to quit)"
                .cyan()
                .bold()
        )
    }

    /// Normalized text and its token list
    pub fn format_normalized(normalized: &NormalizedQuestion) -> String {
        let mut output = String::new();
        output.push_str(&Self::section_header("Preprocessed Question"));
        output.push_str(&normalized.text);
        output.push('\n');
        output.push_str(&Self::section_header("Tokens"));
        output.push_str(&normalized.tokens_display());
        output.push('\n');
        output
    }

    pub fn sending() -> String {
        format!("{}", "Sending to LLM...".dimmed())
    }

    /// Pretty-printed raw payload, cut to `max_chars`
    pub fn format_raw(raw: &Value, max_chars: usize) -> String {
        let pretty = serde_json::to_string_pretty(raw).unwrap_or_else(|_| raw.to_string());
        format!(
            "{}{}\n",
            Self::section_header("LLM Raw Response (truncated)"),
            truncate(&pretty, max_chars)
        )
    }

    pub fn format_answer(answer: &str) -> String {
        format!(
            "{}{}\n{}\n",
            Self::section_header("Final Answer"),
            answer,
            Self::separator()
        )
    }

    pub fn format_error(error: &InvocationError) -> String {
        format!("{} {}", "Error calling LLM API:".red().bold(), error)
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", format!("--- {} ---", title).yellow().bold())
    }

    fn separator() -> String {
        "=".repeat(SEPARATOR_WIDTH)
    }
}
