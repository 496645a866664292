//! Result synthesizer
//!
//! Merges the successful specialist answers into one reply. A single
//! success is returned unchanged without any completion call; two or more
//! successes cost exactly one additional call.

use crate::ports::completion::{CompletionGateway, CompletionRequest, GatewayError};
use futures::FutureExt;
use rutobot_domain::{AgentResult, DomainLabel, Model, PromptTemplate, ResponseSource};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SynthesisError {
    #[error("No successful responses to synthesize")]
    AllAgentsFailed,

    #[error("Synthesis failed: {0}")]
    SynthesisFailed(#[source] GatewayError),
}

/// Merged reply and how it was produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synthesis {
    pub text: String,
    pub domains: Vec<DomainLabel>,
    /// `PassThrough` or `Synthesized`
    pub source: ResponseSource,
}

pub struct ResultSynthesizer<G: CompletionGateway + 'static> {
    gateway: Arc<G>,
    model: Model,
    timeout: Duration,
}

impl<G: CompletionGateway + 'static> ResultSynthesizer<G> {
    pub fn new(gateway: Arc<G>, model: Model, timeout: Duration) -> Self {
        Self {
            gateway,
            model,
            timeout,
        }
    }

    pub async fn synthesize(
        &self,
        query: &str,
        results: &[AgentResult],
    ) -> Result<Synthesis, SynthesisError> {
        let successes: Vec<(DomainLabel, String)> = results
            .iter()
            .filter_map(|r| r.text().map(|text| (r.domain, text.to_string())))
            .collect();

        match successes.len() {
            0 => Err(SynthesisError::AllAgentsFailed),
            1 => {
                debug!("Single success, passing through");
                let (domain, text) = successes
                    .into_iter()
                    .next()
                    .ok_or(SynthesisError::AllAgentsFailed)?;
                Ok(Synthesis {
                    text,
                    domains: vec![domain],
                    source: ResponseSource::PassThrough,
                })
            }
            n => {
                info!("Synthesizing {} responses with {}", n, self.model);
                let request = CompletionRequest::new(
                    self.model.clone(),
                    PromptTemplate::synthesis_system(),
                    PromptTemplate::synthesis_prompt(query, &successes),
                );

                let call = AssertUnwindSafe(self.gateway.complete(request)).catch_unwind();

                let text = match tokio::time::timeout(self.timeout, call).await {
                    Ok(Ok(Ok(text))) => text,
                    Ok(Ok(Err(e))) => return Err(SynthesisError::SynthesisFailed(e)),
                    Ok(Err(_panic)) => {
                        warn!("Synthesis call panicked");
                        return Err(SynthesisError::SynthesisFailed(GatewayError::Other(
                            "synthesizer panicked".to_string(),
                        )));
                    }
                    Err(_) => return Err(SynthesisError::SynthesisFailed(GatewayError::Timeout)),
                };

                Ok(Synthesis {
                    text,
                    domains: successes.into_iter().map(|(domain, _)| domain).collect(),
                    source: ResponseSource::Synthesized,
                })
            }
        }
    }
}
