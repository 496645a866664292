//! Orchestrator context.
//!
//! Everything the orchestrator needs, assembled once at startup and passed
//! down explicitly. Nothing in here is mutated after construction, so the
//! same context is shared by every request and every concurrent task.

use super::orchestrator_config::OrchestratorConfig;
use crate::ports::completion::CompletionGateway;
use crate::ports::execution_log::{ExecutionLogger, NoExecutionLogger};
use rutobot_domain::DomainClassifier;
use std::sync::Arc;

pub struct OrchestratorContext<G: CompletionGateway + 'static> {
    gateway: Arc<G>,
    config: Arc<OrchestratorConfig>,
    classifier: DomainClassifier,
    logger: Arc<dyn ExecutionLogger>,
}

impl<G: CompletionGateway + 'static> OrchestratorContext<G> {
    pub fn new(gateway: Arc<G>, config: OrchestratorConfig) -> Self {
        let classifier = config.classifier();
        Self {
            gateway,
            config: Arc::new(config),
            classifier,
            logger: Arc::new(NoExecutionLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ExecutionLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn gateway(&self) -> &Arc<G> {
        &self.gateway
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    pub fn classifier(&self) -> &DomainClassifier {
        &self.classifier
    }

    pub fn logger(&self) -> &dyn ExecutionLogger {
        self.logger.as_ref()
    }
}
