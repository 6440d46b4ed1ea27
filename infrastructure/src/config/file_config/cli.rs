//! CLI configuration from TOML (`[cli]` section)

use serde::{Deserialize, Serialize};

/// Raw interactive CLI configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCliConfig {
    /// Print a truncated dump of the raw response
    pub show_raw: bool,
    /// Characters of pretty-printed JSON to show
    pub raw_preview_chars: usize,
    /// Show a spinner while waiting for the model
    pub show_progress: bool,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileCliConfig {
    fn default() -> Self {
        Self {
            show_raw: true,
            raw_preview_chars: 1000,
            show_progress: true,
            color: true,
        }
    }
}
