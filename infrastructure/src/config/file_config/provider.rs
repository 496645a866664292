//! Completion provider settings from TOML (`[provider]` section)

use rutobot_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// OpenAI-compatible provider settings
///
/// # Example
///
/// ```toml
/// [provider]
/// base_url = "https://api.openai.com"
/// api_key_env = "OPENAI_API_KEY"   # env var holding the bearer key
/// request_timeout_seconds = 60
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    pub base_url: String,
    pub api_key_env: String,
    pub request_timeout_seconds: u64,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            request_timeout_seconds: 60,
        }
    }
}

impl FileProviderConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        if self.request_timeout_seconds == 0 {
            vec![ConfigIssue::error(
                ConfigIssueCode::ZeroTimeout {
                    field: "provider.request_timeout_seconds".to_string(),
                },
                "provider.request_timeout_seconds must be greater than 0",
            )]
        } else {
            Vec::new()
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Read the API key from the configured environment variable
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
    }
}
