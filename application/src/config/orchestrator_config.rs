//! Orchestrator parameters.
//!
//! [`OrchestratorConfig`] is the validated, typed form of every recognized
//! option. It is produced once at startup (by the infrastructure config
//! loader or by tests) and never mutated afterwards.

use rutobot_domain::{DomainClassifier, KeywordTable, ParallelPolicy, RoleModels};
use std::time::Duration;

/// Default per-task timeout.
pub const DEFAULT_TASK_TIMEOUT: Duration = Duration::from_secs(30);

/// Orchestrator parameters.
///
/// | Option | Default |
/// |--------|---------|
/// | parallel enabled | `true` |
/// | min domains for parallel | `2` |
/// | task timeout | 30s |
/// | models | `gpt-4.1-mini-2025-04-14` for every role |
/// | debug timeline | `false` |
/// | keywords | built-in table, every domain enabled |
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    pub policy: ParallelPolicy,
    /// Bound for each specialist call, the synthesis call and the
    /// sequential responder call.
    pub task_timeout: Duration,
    pub models: RoleModels,
    pub keywords: KeywordTable,
    /// Log the per-task timeline at `info` instead of `debug`.
    pub debug_timeline: bool,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            policy: ParallelPolicy::default(),
            task_timeout: DEFAULT_TASK_TIMEOUT,
            models: RoleModels::default(),
            keywords: KeywordTable::builtin(),
            debug_timeline: false,
        }
    }
}

impl OrchestratorConfig {
    // ==================== Builder Methods ====================

    pub fn with_policy(mut self, policy: ParallelPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_task_timeout(mut self, timeout: Duration) -> Self {
        self.task_timeout = timeout;
        self
    }

    pub fn with_models(mut self, models: RoleModels) -> Self {
        self.models = models;
        self
    }

    pub fn with_keywords(mut self, keywords: KeywordTable) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn with_debug_timeline(mut self, enabled: bool) -> Self {
        self.debug_timeline = enabled;
        self
    }

    /// Classifier built from the keyword table and the parallel policy
    pub fn classifier(&self) -> DomainClassifier {
        DomainClassifier::new(self.keywords.clone(), self.policy)
    }
}
