//! Application layer for rutobot
//!
//! This crate contains the orchestration use cases, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_TASK_TIMEOUT, OrchestratorConfig, OrchestratorContext};
pub use ports::{
    completion::{CompletionGateway, CompletionRequest, GatewayError},
    execution_log::{ExecutionEvent, ExecutionLogger, NoExecutionLogger},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::orchestrate::{HybridOrchestrator, OrchestrateInput, OrchestrationError};
pub use use_cases::responder::{Responder, ResponderRole};
pub use use_cases::run_parallel::{AgentTask, DispatchOutcome, ParallelTaskRunner};
pub use use_cases::synthesize::{ResultSynthesizer, Synthesis, SynthesisError};
