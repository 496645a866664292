//! Orchestration domain entities

use serde::{Deserialize, Serialize};

/// State of the hybrid orchestrator for one request
///
/// `Classifying → {ParallelDispatch | SequentialFallback} → Synthesizing → Done`,
/// with `Failed` reachable once the sequential path has failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrchestrationState {
    Classifying,
    ParallelDispatch,
    SequentialFallback,
    Synthesizing,
    Done,
    Failed,
}

impl OrchestrationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrchestrationState::Classifying => "classifying",
            OrchestrationState::ParallelDispatch => "parallel_dispatch",
            OrchestrationState::SequentialFallback => "sequential_fallback",
            OrchestrationState::Synthesizing => "synthesizing",
            OrchestrationState::Done => "done",
            OrchestrationState::Failed => "failed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrchestrationState::Classifying => "Classifying",
            OrchestrationState::ParallelDispatch => "Parallel Dispatch",
            OrchestrationState::SequentialFallback => "Sequential",
            OrchestrationState::Synthesizing => "Synthesis",
            OrchestrationState::Done => "Done",
            OrchestrationState::Failed => "Failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrchestrationState::Done | OrchestrationState::Failed)
    }
}

impl std::fmt::Display for OrchestrationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(OrchestrationState::Done.is_terminal());
        assert!(OrchestrationState::Failed.is_terminal());
        assert!(!OrchestrationState::Synthesizing.is_terminal());
    }
}
