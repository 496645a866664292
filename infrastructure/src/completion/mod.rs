//! Completion provider adapters.
//!
//! Implements the [`CompletionGateway`](rutobot_application::CompletionGateway)
//! port against OpenAI-compatible chat-completion endpoints.

mod openai;

pub use openai::OpenAiCompletionGateway;
