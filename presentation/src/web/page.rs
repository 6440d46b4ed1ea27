//! HTML rendering for the question page

use llm_qa_domain::{NormalizedQuestion, ResponseMetadata};
use std::fmt::Write;

/// Severity of an inline message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Warning,
    Danger,
}

impl Level {
    fn css_class(self) -> &'static str {
        match self {
            Level::Warning => "warning",
            Level::Danger => "danger",
        }
    }
}

/// Everything the page may show; empty fields are omitted
#[derive(Debug, Default)]
pub struct Page {
    pub question: String,
    pub messages: Vec<(Level, String)>,
    pub normalized: Option<NormalizedQuestion>,
    pub answer: Option<String>,
    pub metadata: Option<ResponseMetadata>,
}

impl Page {
    pub fn render(&self) -> String {
        let mut html = String::from(HEAD);

        for (level, message) in &self.messages {
            let _ = writeln!(
                html,
                r#"<div class="flash {}">{}</div>"#,
                level.css_class(),
                escape(message)
            );
        }

        let _ = writeln!(
            html,
            r#"<form method="post" action="/">
<label for="question">Your question</label>
<textarea id="question" name="question" rows="4">{}</textarea>
<button type="submit">Ask</button>
</form>"#,
            escape(&self.question)
        );

        if let Some(normalized) = &self.normalized {
            let _ = writeln!(
                html,
                "<h2>Preprocessed</h2>\n<pre class=\"normalized\">{}</pre>\n<h2>Tokens</h2>\n<pre class=\"tokens\">{}</pre>",
                escape(&normalized.text),
                escape(&normalized.tokens_display())
            );
        }

        if let Some(answer) = &self.answer {
            let _ = writeln!(
                html,
                "<h2>Answer</h2>\n<div class=\"answer\">{}</div>",
                escape(answer)
            );
        }

        if let Some(metadata) = &self.metadata {
            html.push_str(&render_metadata(metadata));
        }

        html.push_str(FOOT);
        html
    }
}

fn render_metadata(metadata: &ResponseMetadata) -> String {
    let mut rows = Vec::new();
    if let Some(model) = &metadata.model {
        rows.push(("Model", escape(model)));
    }
    if let Some(usage) = &metadata.usage {
        let counters = [
            ("Prompt tokens", usage.prompt_tokens),
            ("Completion tokens", usage.completion_tokens),
            ("Total tokens", usage.total_tokens),
        ];
        for (label, value) in counters {
            if let Some(value) = value {
                rows.push((label, value.to_string()));
            }
        }
    }
    rows.push(("Prompt length", metadata.prompt_len.to_string()));

    let mut html = String::from("<h2>Metadata</h2>\n<dl class=\"metadata\">\n");
    for (label, value) in rows {
        let _ = writeln!(html, "<dt>{}</dt><dd>{}</dd>", label, value);
    }
    html.push_str("</dl>\n");
    html
}

/// Escape text for use in HTML content and attribute values
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const HEAD: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>LLM QA</title>
<style>
body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; }
textarea { width: 100%; }
.flash { padding: .5rem 1rem; margin-bottom: 1rem; border-radius: 4px; }
.warning { background: #fff3cd; }
.danger { background: #f8d7da; }
pre { white-space: pre-wrap; }
</style>
</head>
<body>
<h1>Ask the LLM</h1>
"#;

const FOOT: &str = "</body>\n</html>\n";
