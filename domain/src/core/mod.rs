//! Core domain concepts shared across all subdomains.
//!
//! - [`query::Query`]: a validated inbound request
//! - [`model::Model`]: model identifiers used for completion calls
//! - [`messages::UserMessage`]: localized user-facing texts
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod messages;
pub mod model;
pub mod query;
