//! Completion gateway port
//!
//! Defines the interface for requesting a single completion from an
//! external language-model provider. Inference itself is never performed
//! here; adapters live in the infrastructure layer.

use async_trait::async_trait;
use rutobot_domain::{Model, Toolset};
use thiserror::Error;

/// Errors that can occur during a completion call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Timeout")]
    Timeout,

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// One completion call: which model, with which instructions and tools
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub model: Model,
    pub system_prompt: String,
    pub prompt: String,
    /// Knowledge-base tools the caller is scoped to
    pub toolset: Toolset,
}

impl CompletionRequest {
    pub fn new(model: Model, system_prompt: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model,
            system_prompt: system_prompt.into(),
            prompt: prompt.into(),
            toolset: Toolset::EMPTY,
        }
    }

    pub fn with_toolset(mut self, toolset: Toolset) -> Self {
        self.toolset = toolset;
        self
    }
}

/// Gateway for completion calls
///
/// Implementations must be shareable across concurrently running
/// responder tasks. No retries are expected at this level.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError>;
}
