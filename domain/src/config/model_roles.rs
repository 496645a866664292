//! Role-based model selection

use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Role a completion call plays in the orchestration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelRole {
    /// The general-purpose responder (sequential path and fallback)
    General,
    /// Every per-domain specialist
    Specialist,
    /// The synthesis call merging specialist answers
    Synthesizer,
}

impl ModelRole {
    pub const ALL: [ModelRole; 3] = [
        ModelRole::General,
        ModelRole::Specialist,
        ModelRole::Synthesizer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelRole::General => "general",
            ModelRole::Specialist => "specialist",
            ModelRole::Synthesizer => "synthesizer",
        }
    }
}

impl std::fmt::Display for ModelRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Model identifier per role
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleModels {
    pub general: Model,
    pub specialist: Model,
    pub synthesizer: Model,
}

impl RoleModels {
    pub fn get(&self, role: ModelRole) -> &Model {
        match role {
            ModelRole::General => &self.general,
            ModelRole::Specialist => &self.specialist,
            ModelRole::Synthesizer => &self.synthesizer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_lookup() {
        let models = RoleModels {
            general: Model::Gpt41,
            specialist: Model::Gpt4oMini,
            synthesizer: Model::Gpt4o,
        };
        assert_eq!(models.get(ModelRole::General), &Model::Gpt41);
        assert_eq!(models.get(ModelRole::Specialist), &Model::Gpt4oMini);
        assert_eq!(models.get(ModelRole::Synthesizer), &Model::Gpt4o);
    }

    #[test]
    fn test_default_uses_default_model_everywhere() {
        let models = RoleModels::default();
        for role in ModelRole::ALL {
            assert_eq!(models.get(role), &Model::default());
        }
    }

    #[test]
    fn test_role_names() {
        let names: Vec<_> = ModelRole::ALL.iter().map(|r| r.to_string()).collect();
        assert_eq!(names, vec!["general", "specialist", "synthesizer"]);
    }
}
