//! Question normalization
//!
//! Turns raw user input into a lowercase, punctuation-free, whitespace
//! collapsed string plus its token sequence.
//!
//! # Character policy
//!
//! Unicode-aware, applied identically at every call site:
//!
//! 1. trim, then lowercase the whole string (`str::to_lowercase`)
//! 2. every char that is not alphanumeric (`char::is_alphanumeric`, i.e.
//!    Unicode `Alphabetic` or `Numeric`), not `_` and not whitespace becomes
//!    a single space
//! 3. split on whitespace runs, drop empties, rejoin with one space
//!
//! Superscripts and fractions (`²`, `½`) are numeric and survive. Plain
//! combining accents and connector punctuation other than `_` do not, so
//! case mappings that expand into a combining mark (`İ` → `i̇`) split there.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{Alphabetic}\p{N}_\s]").expect("static pattern is valid"));

/// Result of normalizing a raw question.
///
/// `tokens` is always `text.split(' ')` when `text` is non-empty and empty
/// otherwise. Order follows the input and duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NormalizedQuestion {
    /// Space-joined tokens.
    pub text: String,
    /// Non-empty tokens in reading order.
    pub tokens: Vec<String>,
}

impl NormalizedQuestion {
    /// Whether nothing survived normalization.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Render the token list the way a debug print of a string list reads:
    /// `['hello', 'world']`.
    pub fn tokens_display(&self) -> String {
        let quoted: Vec<String> = self
            .tokens
            .iter()
            .map(|t| format!("'{}'", t))
            .collect();
        format!("[{}]", quoted.join(", "))
    }
}

/// Normalize raw input. Total and pure: never fails, never panics.
pub fn normalize(raw: &str) -> NormalizedQuestion {
    let lowered = raw.trim().to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, " ");
    let tokens: Vec<String> = stripped.split_whitespace().map(str::to_string).collect();

    NormalizedQuestion {
        text: tokens.join(" "),
        tokens,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_punctuation_and_case() {
        let n = normalize("Hello, World!!");
        assert_eq!(n.text, "hello world");
        assert_eq!(n.tokens, tokens(&["hello", "world"]));
    }

    #[test]
    fn test_whitespace_only() {
        let n = normalize("   ");
        assert_eq!(n.text, "");
        assert!(n.tokens.is_empty());
        assert!(n.is_empty());
    }

    #[test]
    fn test_all_punctuation() {
        let n = normalize("?!...;--");
        assert_eq!(n, NormalizedQuestion::default());
    }

    #[test]
    fn test_internal_punctuation_splits_tokens() {
        let n = normalize("What's the time-zone of U.S.A.?");
        assert_eq!(n.text, "what s the time zone of u s a");
    }

    #[test]
    fn test_duplicates_and_order_preserved() {
        let n = normalize("Why, why, WHY?");
        assert_eq!(n.tokens, tokens(&["why", "why", "why"]));
    }

    #[test]
    fn test_unicode_letters_are_kept() {
        let n = normalize("Café? ÜBER!");
        assert_eq!(n.text, "café über");
        let n = normalize("日本語、テスト。");
        assert_eq!(n.tokens, tokens(&["日本語", "テスト"]));
    }

    #[test]
    fn test_underscore_and_digits_are_word_chars() {
        let n = normalize("snake_case 42!");
        assert_eq!(n.text, "snake_case 42");
    }

    #[test]
    fn test_numeric_symbols_are_kept() {
        let n = normalize("x² ½");
        assert_eq!(n.tokens, tokens(&["x²", "½"]));
    }

    #[test]
    fn test_marks_and_connectors_split_tokens() {
        assert_eq!(normalize("a\u{203F}b").text, "a b");
        assert_eq!(normalize("e\u{301}te").text, "e te");
    }

    #[test]
    fn test_matches_char_predicate() {
        let samples = ["x² ½ a‿b e\u{301}te", "İstanbul'da", "snake_case 42!", "日本語、テスト。"];
        for s in samples {
            let expected: String = s
                .trim()
                .to_lowercase()
                .chars()
                .map(|c| {
                    if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                        c
                    } else {
                        ' '
                    }
                })
                .collect();
            let expected: Vec<&str> = expected.split_whitespace().collect();
            assert_eq!(normalize(s).text, expected.join(" "), "{:?}", s);
        }
    }

    #[test]
    fn test_mixed_whitespace_collapses() {
        let n = normalize("\tone\n\ntwo   three\r\n");
        assert_eq!(n.text, "one two three");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "Hello, World!!",
            "   ",
            "İstanbul'da ne var?",
            "C++ vs. Rust: which is faster?",
            "emoji 👋 in between",
            "snake_case\u{00A0}nbsp",
        ];
        for s in samples {
            let once = normalize(s);
            let twice = normalize(&once.text);
            assert_eq!(once, twice, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn test_tokens_match_split_of_text() {
        for s in ["a b  c", "x,y;z", "", "Ünïcödé!!"] {
            let n = normalize(s);
            if n.text.is_empty() {
                assert!(n.tokens.is_empty());
            } else {
                let split: Vec<String> = n.text.split(' ').map(str::to_string).collect();
                assert_eq!(n.tokens, split);
            }
        }
    }

    #[test]
    fn test_tokens_display() {
        let n = normalize("Hello, World!!");
        assert_eq!(n.tokens_display(), "['hello', 'world']");
        assert_eq!(NormalizedQuestion::default().tokens_display(), "[]");
    }
}
