//! Orchestration value objects - immutable result types for one request.
//!
//! - [`AgentResult`] - outcome of one dispatched specialist
//! - [`FinalResponse`] - the single reply handed back to the caller

use crate::routing::domain_label::DomainLabel;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outcome status of one dispatched task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    Success,
    Timeout,
    Error,
}

impl AgentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Success => "success",
            AgentStatus::Timeout => "timeout",
            AgentStatus::Error => "error",
        }
    }

    pub fn is_failure(&self) -> bool {
        !matches!(self, AgentStatus::Success)
    }
}

impl std::fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of one specialist task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentResult {
    pub domain: DomainLabel,
    pub status: AgentStatus,
    /// Response text, present only on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Failure description for timeouts and errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(rename = "latency_ms", with = "duration_ms")]
    pub latency: Duration,
}

impl AgentResult {
    pub fn success(domain: DomainLabel, content: impl Into<String>, latency: Duration) -> Self {
        Self {
            domain,
            status: AgentStatus::Success,
            content: Some(content.into()),
            error: None,
            latency,
        }
    }

    pub fn timeout(domain: DomainLabel, latency: Duration) -> Self {
        Self {
            domain,
            status: AgentStatus::Timeout,
            content: None,
            error: Some(format!("timed out after {:.1}s", latency.as_secs_f64())),
            latency,
        }
    }

    pub fn error(domain: DomainLabel, message: impl Into<String>, latency: Duration) -> Self {
        Self {
            domain,
            status: AgentStatus::Error,
            content: None,
            error: Some(message.into()),
            latency,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == AgentStatus::Success
    }

    /// Response text if this result is a success
    pub fn text(&self) -> Option<&str> {
        if self.is_success() {
            self.content.as_deref()
        } else {
            None
        }
    }

    /// The longest successful response, the earliest one on ties
    pub fn best_success(results: &[AgentResult]) -> Option<&AgentResult> {
        results
            .iter()
            .filter(|r| r.is_success())
            .fold(None, |best: Option<&AgentResult>, r| match best {
                Some(b) if b.text().map_or(0, str::len) >= r.text().map_or(0, str::len) => {
                    Some(b)
                }
                _ => Some(r),
            })
    }
}

/// Which path produced the final text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseSource {
    /// The general responder answered directly (no fan-out)
    Sequential,
    /// Fan-out with a single success, returned unchanged
    PassThrough,
    /// Fan-out with several successes merged by the synthesizer
    Synthesized,
    /// Synthesis failed; the best single success was returned
    Degraded,
    /// Every specialist failed; the general responder answered
    Fallback,
}

impl ResponseSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseSource::Sequential => "sequential",
            ResponseSource::PassThrough => "pass_through",
            ResponseSource::Synthesized => "synthesized",
            ResponseSource::Degraded => "degraded",
            ResponseSource::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for ResponseSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Final reply for one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalResponse {
    pub text: String,
    /// Domains whose output made it into `text`
    pub domains: Vec<DomainLabel>,
    pub used_parallel: bool,
    pub source: ResponseSource,
    #[serde(rename = "elapsed_ms", with = "duration_ms")]
    pub elapsed: Duration,
}

impl FinalResponse {
    pub fn new(
        text: impl Into<String>,
        domains: Vec<DomainLabel>,
        source: ResponseSource,
        elapsed: Duration,
    ) -> Self {
        let used_parallel = matches!(
            source,
            ResponseSource::PassThrough | ResponseSource::Synthesized | ResponseSource::Degraded
        );
        Self {
            text: text.into(),
            domains,
            used_parallel,
            source,
            elapsed,
        }
    }
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_millis(u64::deserialize(d)?))
    }
}
