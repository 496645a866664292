//! Domain layer for rutobot
//!
//! This crate contains the core values of the orchestration layer: the
//! query, the closed set of topical domains, the routing analysis and the
//! results produced by each responder. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Routing
//!
//! A [`Query`] is classified by the [`DomainClassifier`] into one or more
//! [`DomainLabel`]s. When enough domains are detected the query is fanned
//! out to one specialist per domain and the answers are merged.
//!
//! ## Results
//!
//! Every dispatched specialist produces exactly one [`AgentResult`]; the
//! orchestrator turns them into a single [`FinalResponse`].

pub mod config;
pub mod core;
pub mod orchestration;
pub mod prompt;
pub mod routing;

// Re-export commonly used types
pub use config::{
    model_roles::{ModelRole, RoleModels},
    validation::{ConfigIssue, ConfigIssueCode, Severity},
};
pub use core::{
    error::DomainError,
    messages::UserMessage,
    model::Model,
    query::{Locale, Query},
};
pub use orchestration::{
    context::SharedContext,
    entities::OrchestrationState,
    value_objects::{AgentResult, AgentStatus, FinalResponse, ResponseSource},
};
pub use prompt::PromptTemplate;
pub use routing::{
    analysis::{Complexity, QueryAnalysis},
    classifier::{DomainClassifier, ParallelPolicy},
    domain_label::{DomainLabel, Toolset},
    keywords::KeywordTable,
};
