//! API credential loading

use thiserror::Error;

/// Configuration errors that stop a front end from starting
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Set {env_var} environment variable before running.")]
    MissingCredential { env_var: String },

    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),
}

/// The remote-service API key.
///
/// Loaded once at startup and never mutated. `Debug` is redacted so the key
/// cannot leak through logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredential(String);

impl ApiCredential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Read the key from `env_var`; a missing or blank value is an error.
    pub fn from_env(env_var: &str) -> Result<Self, ConfigError> {
        Self::from_lookup(env_var, |name| std::env::var(name).ok())
    }

    fn from_lookup(
        env_var: &str,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        match lookup(env_var) {
            Some(value) if !value.trim().is_empty() => Ok(Self(value.trim().to_string())),
            _ => Err(ConfigError::MissingCredential {
                env_var: env_var.to_string(),
            }),
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiCredential(***)")
    }
}
