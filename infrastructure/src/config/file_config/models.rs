//! Role-based model configuration from TOML (`[models]` section)

use rutobot_domain::{ConfigIssue, ConfigIssueCode, Model, ModelRole, RoleModels};
use serde::{Deserialize, Serialize};

/// Role-based model configuration from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// general = "gpt-4.1-mini-2025-04-14"      # Sequential path and fallback
/// specialist = "gpt-4.1-mini-2025-04-14"   # Every per-domain specialist
/// synthesizer = "gpt-4.1"                  # Merges specialist answers
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    pub general: Option<String>,
    pub specialist: Option<String>,
    pub synthesizer: Option<String>,
}

impl FileModelsConfig {
    fn raw(&self, role: ModelRole) -> Option<&String> {
        match role {
            ModelRole::General => self.general.as_ref(),
            ModelRole::Specialist => self.specialist.as_ref(),
            ModelRole::Synthesizer => self.synthesizer.as_ref(),
        }
    }

    /// Parse one role's model, collecting an issue for an empty name.
    fn parse_role(&self, role: ModelRole) -> (Option<Model>, Vec<ConfigIssue>) {
        match self.raw(role) {
            None => (None, Vec::new()),
            Some(s) if s.trim().is_empty() => (
                None,
                vec![ConfigIssue::error(
                    ConfigIssueCode::EmptyModelName {
                        field: role.as_str().to_string(),
                    },
                    format!("models.{}: model name cannot be empty", role),
                )],
            ),
            Some(s) => {
                let Ok(model) = s.trim().parse::<Model>();
                (Some(model), Vec::new())
            }
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        ModelRole::ALL
            .iter()
            .flat_map(|role| self.parse_role(*role).1)
            .collect()
    }

    /// Resolved models; unset or invalid roles keep the default model
    pub fn to_role_models(&self) -> RoleModels {
        let mut models = RoleModels::default();
        for role in ModelRole::ALL {
            if let (Some(model), _) = self.parse_role(role) {
                match role {
                    ModelRole::General => models.general = model,
                    ModelRole::Specialist => models.specialist = model,
                    ModelRole::Synthesizer => models.synthesizer = model,
                }
            }
        }
        models
    }
}
