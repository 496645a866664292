//! Configuration values shared across layers.
//!
//! - [`model_roles`]: which model each responder role uses
//! - [`validation`]: structured configuration issues

pub mod model_roles;
pub mod validation;
