//! Port for structured execution logging.
//!
//! Defines the [`ExecutionLogger`] trait for recording orchestration
//! events (classification, per-task outcomes, fallback, synthesis) to a
//! machine-readable log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures one record per
//! event for later analysis (JSONL).

use serde_json::Value;

/// A structured orchestration event.
pub struct ExecutionEvent {
    /// Event type identifier (e.g., "classified", "task_completed", "fallback").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ExecutionEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging orchestration events.
///
/// `log` is synchronous and infallible; write failures are swallowed by
/// the implementation so a broken log never fails a request.
pub trait ExecutionLogger: Send + Sync {
    fn log(&self, event: ExecutionEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoExecutionLogger;

impl ExecutionLogger for NoExecutionLogger {
    fn log(&self, _event: ExecutionEvent) {}
}
