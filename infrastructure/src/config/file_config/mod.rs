//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly, validated as a whole, and then turned
//! into the typed [`OrchestratorConfig`] the application layer consumes.

mod logging;
mod models;
mod parallel;
mod provider;
mod routing;

pub use logging::FileLoggingConfig;
pub use models::FileModelsConfig;
pub use parallel::FileParallelConfig;
pub use provider::FileProviderConfig;
pub use routing::{FileAgentToggles, FileRoutingConfig};

use rutobot_application::OrchestratorConfig;
use rutobot_domain::ConfigIssue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration rejected because of Error-severity issues
#[derive(Debug, Error)]
#[error("invalid configuration: {}", .issues.iter().map(|i| i.message.as_str()).collect::<Vec<_>>().join("; "))]
pub struct ConfigValidationError {
    pub issues: Vec<ConfigIssue>,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Fan-out settings
    pub parallel: FileParallelConfig,
    /// Role-based model selection
    pub models: FileModelsConfig,
    /// Domain toggles and keyword overrides
    pub routing: FileRoutingConfig,
    /// Completion provider
    pub provider: FileProviderConfig,
    /// Structured execution log
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.parallel.validate());
        issues.extend(self.models.validate());
        issues.extend(self.routing.validate());
        issues.extend(self.provider.validate());
        issues
    }

    /// Convert into the immutable orchestrator configuration.
    ///
    /// Fails when any Error-severity issue is present; warnings are
    /// ignored here and are expected to be logged by the caller.
    pub fn to_orchestrator_config(&self) -> Result<OrchestratorConfig, ConfigValidationError> {
        let errors: Vec<ConfigIssue> = self
            .validate()
            .into_iter()
            .filter(ConfigIssue::is_error)
            .collect();
        if !errors.is_empty() {
            return Err(ConfigValidationError { issues: errors });
        }

        Ok(OrchestratorConfig::default()
            .with_policy(self.parallel.policy())
            .with_task_timeout(self.parallel.task_timeout())
            .with_models(self.models.to_role_models())
            .with_keywords(self.routing.to_keyword_table())
            .with_debug_timeline(self.parallel.debug_timeline))
    }
}
