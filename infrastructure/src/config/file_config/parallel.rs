//! Fan-out settings from TOML (`[parallel]` section)

use rutobot_domain::{ConfigIssue, ConfigIssueCode, ParallelPolicy};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fan-out settings
///
/// # Example
///
/// ```toml
/// [parallel]
/// enabled = true
/// min_domains = 2            # detected domains needed to fan out
/// task_timeout_seconds = 30  # per specialist, also bounds synthesis
/// debug_timeline = false     # log the per-task timeline at info level
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileParallelConfig {
    pub enabled: bool,
    pub min_domains: usize,
    pub task_timeout_seconds: u64,
    pub debug_timeline: bool,
}

impl Default for FileParallelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_domains: 2,
            task_timeout_seconds: 30,
            debug_timeline: false,
        }
    }
}

impl FileParallelConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.min_domains == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroMinDomains,
                "parallel.min_domains must be at least 1",
            ));
        }
        if self.task_timeout_seconds == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroTimeout {
                    field: "parallel.task_timeout_seconds".to_string(),
                },
                "parallel.task_timeout_seconds must be greater than 0",
            ));
        }
        issues
    }

    pub fn policy(&self) -> ParallelPolicy {
        ParallelPolicy::new(self.enabled, self.min_domains)
    }

    pub fn task_timeout(&self) -> Duration {
        Duration::from_secs(self.task_timeout_seconds)
    }
}
