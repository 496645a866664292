//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod orchestrate;
pub mod responder;
pub mod run_parallel;
pub mod synthesize;
