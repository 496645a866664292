//! Ports (interfaces) for external dependencies
//!
//! These traits define how the application layer interacts with
//! external systems. Implementations (adapters) are in the infrastructure
//! and presentation layers.

pub mod completion;
pub mod execution_log;
pub mod progress;
