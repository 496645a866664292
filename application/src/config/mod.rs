//! Application-level configuration.
//!
//! - [`OrchestratorConfig`]: immutable runtime parameters of the orchestrator
//! - [`OrchestratorContext`]: config plus collaborators, built once at startup

pub mod context;
pub mod orchestrator_config;

pub use context::OrchestratorContext;
pub use orchestrator_config::{DEFAULT_TASK_TIMEOUT, OrchestratorConfig};
