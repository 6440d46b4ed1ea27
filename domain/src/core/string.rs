//! String utilities for the domain layer.

/// Truncate a string to at most `max_chars` characters, appending `...`
/// when anything was cut.
///
/// Counts Unicode scalar values rather than bytes so a debug preview never
/// splits a multi-byte character.
pub fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        None => s.to_string(),
        Some((end, _)) => format!("{}...", &s[..end]),
    }
}
