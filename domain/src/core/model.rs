//! Model value object representing a completion model identifier

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Completion models known to the orchestrator (Value Object)
///
/// Any identifier the provider accepts can be used through [`Model::Custom`];
/// the named variants only exist so defaults and logs stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gpt41Mini20250414,
    Gpt41Mini,
    Gpt41,
    Gpt4oMini,
    Gpt4o,
    Custom(String),
}

impl Model {
    /// Get the string identifier sent to the provider
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gpt41Mini20250414 => "gpt-4.1-mini-2025-04-14",
            Model::Gpt41Mini => "gpt-4.1-mini",
            Model::Gpt41 => "gpt-4.1",
            Model::Gpt4oMini => "gpt-4o-mini",
            Model::Gpt4o => "gpt-4o",
            Model::Custom(s) => s,
        }
    }

    /// Check if this is one of the named variants
    pub fn is_known(&self) -> bool {
        !matches!(self, Model::Custom(_))
    }
}

impl Default for Model {
    /// Returns the default model (gpt-4.1-mini, pinned snapshot)
    fn default() -> Self {
        Model::Gpt41Mini20250414
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
        Ok(match s.trim() {
            "gpt-4.1-mini-2025-04-14" => Model::Gpt41Mini20250414,
            "gpt-4.1-mini" => Model::Gpt41Mini,
            "gpt-4.1" => Model::Gpt41,
            "gpt-4o-mini" => Model::Gpt4oMini,
            "gpt-4o" => Model::Gpt4o,
            other => Model::Custom(other.to_string()),
        })
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
        let Ok(model) = s.parse::<Model>();
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_model_parsing() {
        let model: Model = "gpt-4o-mini".parse().unwrap();
        assert_eq!(model, Model::Gpt4oMini);
        assert_eq!(model.to_string(), "gpt-4o-mini");
        assert!(model.is_known());
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "ft:gpt-4.1-mini:rutopia".parse().unwrap();
        assert_eq!(model, Model::Custom("ft:gpt-4.1-mini:rutopia".to_string()));
        assert!(!model.is_known());
    }

    #[test]
    fn test_model_default() {
        assert_eq!(Model::default().as_str(), "gpt-4.1-mini-2025-04-14");
    }

    #[test]
    fn test_model_serde() {
        let json = serde_json::to_string(&Model::Gpt41).unwrap();
        assert_eq!(json, "\"gpt-4.1\"");
        let back: Model = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Model::Gpt41);
    }
}
