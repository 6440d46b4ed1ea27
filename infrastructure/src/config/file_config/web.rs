//! Web server configuration from TOML (`[web]` section)

use serde::{Deserialize, Serialize};

/// Raw web server configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWebConfig {
    /// Interface to bind: an IP literal or a resolvable host name
    pub host: String,
    /// Listening port (`PORT` overrides)
    pub port: u16,
    /// Flash-cookie signing secret (`LLM_QA_SECRET` overrides)
    pub secret: Option<String>,
}

impl Default for FileWebConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            secret: None,
        }
    }
}
