//! Infrastructure layer for rutobot
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: configuration loading, the completion provider and
//! the structured execution log.

pub mod completion;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use completion::OpenAiCompletionGateway;
pub use config::{
    ConfigLoader, ConfigValidationError, FileAgentToggles, FileConfig, FileLoggingConfig,
    FileModelsConfig, FileParallelConfig, FileProviderConfig, FileRoutingConfig,
};
pub use logging::JsonlExecutionLogger;
