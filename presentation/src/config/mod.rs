//! Presentation-level configuration
//!
//! Configuration for console output and REPL behavior.

use serde::{Deserialize, Serialize};

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Print the (truncated) raw response before the answer
    pub show_raw: bool,
    /// Maximum characters of the raw response to print
    pub raw_preview_chars: usize,
    /// Show a spinner while waiting for the remote model
    pub show_progress: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_raw: true,
            raw_preview_chars: 1000,
            show_progress: true,
        }
    }
}
