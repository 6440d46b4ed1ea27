//! Model value object representing a hosted completion model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Hosted completion models (Value Object)
///
/// Known identifiers get their own variant so callers can reason about
/// which endpoint family they belong to; anything else is carried verbatim
/// in [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Model {
    #[default]
    Gpt35Turbo,
    Gpt35TurboInstruct,
    Gpt4,
    Gpt4Turbo,
    Gpt4o,
    Gpt4oMini,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gpt35Turbo => "gpt-3.5-turbo",
            Model::Gpt35TurboInstruct => "gpt-3.5-turbo-instruct",
            Model::Gpt4 => "gpt-4",
            Model::Gpt4Turbo => "gpt-4-turbo",
            Model::Gpt4o => "gpt-4o",
            Model::Gpt4oMini => "gpt-4o-mini",
            Model::Custom(s) => s,
        }
    }

    /// Check if this model is only served by the legacy completion endpoint
    pub fn is_completion_only(&self) -> bool {
        matches!(self, Model::Gpt35TurboInstruct)
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gpt-3.5-turbo" => Model::Gpt35Turbo,
            "gpt-3.5-turbo-instruct" => Model::Gpt35TurboInstruct,
            "gpt-4" => Model::Gpt4,
            "gpt-4-turbo" => Model::Gpt4Turbo,
            "gpt-4o" => Model::Gpt4o,
            "gpt-4o-mini" => Model::Gpt4oMini,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_model_parse() {
        let model: Model = "gpt-4o-mini".parse().unwrap();
        assert_eq!(model, Model::Gpt4oMini);
        assert_eq!(model.to_string(), "gpt-4o-mini");
    }

    #[test]
    fn test_custom_model() {
        let model = Model::from("my-finetune-v1");
        assert_eq!(model, Model::Custom("my-finetune-v1".to_string()));
        assert_eq!(model.as_str(), "my-finetune-v1");
    }

    #[test]
    fn test_model_default() {
        assert_eq!(Model::default(), Model::Gpt35Turbo);
        assert_eq!(Model::default().as_str(), "gpt-3.5-turbo");
    }

    #[test]
    fn test_completion_only() {
        assert!(Model::Gpt35TurboInstruct.is_completion_only());
        assert!(!Model::Gpt4o.is_completion_only());
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&Model::Gpt4).unwrap();
        assert_eq!(json, "\"gpt-4\"");
        let parsed: Model = serde_json::from_str("\"gpt-4\"").unwrap();
        assert_eq!(parsed, Model::Gpt4);
    }
}
