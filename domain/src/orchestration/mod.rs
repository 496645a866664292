//! Orchestration domain
//!
//! States, shared context and result types for routing one query through
//! the parallel or sequential path.

pub mod context;
pub mod entities;
pub mod value_objects;
