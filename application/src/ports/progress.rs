//! Progress notification port
//!
//! Defines the interface for reporting progress while a query moves
//! through the orchestration state machine.

use rutobot_domain::{AgentStatus, DomainLabel, OrchestrationState};

/// Callback for progress updates during orchestration
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain log lines, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called every time the orchestrator enters a state
    fn on_state_enter(&self, _state: OrchestrationState) {}

    /// Called when the parallel dispatch starts
    fn on_dispatch_start(&self, total_tasks: usize);

    /// Called as each dispatched task finishes, in completion order
    fn on_task_complete(&self, domain: DomainLabel, status: AgentStatus);

    /// Called once every dispatched task has finished
    fn on_dispatch_complete(&self);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_dispatch_start(&self, _total_tasks: usize) {}
    fn on_task_complete(&self, _domain: DomainLabel, _status: AgentStatus) {}
    fn on_dispatch_complete(&self) {}
}
