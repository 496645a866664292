//! Hybrid orchestrator
//!
//! The single entry point external collaborators call. Owns the state
//! machine:
//!
//! ```text
//! Classifying ──► ParallelDispatch ──► Synthesizing ──► Done
//!      │                 │ (all failed)
//!      └──────────► SequentialFallback ──► Done | Failed
//! ```
//!
//! Per-task failures are absorbed by the runner. A wholly failed dispatch
//! falls back to the general responder exactly once, and a failed synthesis
//! degrades to the best single answer. Only a failed sequential call ends in
//! `Failed`.

use crate::config::OrchestratorContext;
use crate::ports::completion::{CompletionGateway, GatewayError};
use crate::ports::execution_log::ExecutionEvent;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::responder::Responder;
use crate::use_cases::run_parallel::{AgentTask, DispatchOutcome, ParallelTaskRunner};
use crate::use_cases::synthesize::{ResultSynthesizer, SynthesisError};
use futures::FutureExt;
use rutobot_domain::{
    AgentResult, DomainLabel, FinalResponse, Locale, OrchestrationState, Query, QueryAnalysis,
    ResponseSource, SharedContext, UserMessage,
};
use serde_json::json;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use thiserror::Error;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

/// Unrecoverable orchestration failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrchestrationError {
    #[error("Sequential responder failed (after parallel dispatch: {after_parallel}): {source}")]
    FallbackFailed {
        after_parallel: bool,
        source: GatewayError,
    },
}

impl OrchestrationError {
    /// Text shown to the end user instead of the error
    pub fn user_message(&self, locale: Locale) -> &'static str {
        match self {
            OrchestrationError::FallbackFailed { .. } => UserMessage::processing_failed(locale),
        }
    }
}

/// Input for one orchestrated request
#[derive(Debug, Clone)]
pub struct OrchestrateInput {
    pub query: Query,
    pub context: SharedContext,
    /// When false the sequential path is taken even for multi-domain queries
    pub use_parallel: bool,
}

impl OrchestrateInput {
    pub fn new(query: Query, context: SharedContext) -> Self {
        Self {
            query,
            context,
            use_parallel: true,
        }
    }

    pub fn sequential(mut self) -> Self {
        self.use_parallel = false;
        self
    }
}

/// State plus the data carried into it
enum Stage {
    Classifying,
    ParallelDispatch(QueryAnalysis),
    SequentialFallback {
        after_parallel: bool,
        domains: Vec<DomainLabel>,
    },
    Synthesizing(Vec<AgentResult>),
    Done(FinalResponse),
    Failed(OrchestrationError),
}

impl Stage {
    fn state(&self) -> OrchestrationState {
        match self {
            Stage::Classifying => OrchestrationState::Classifying,
            Stage::ParallelDispatch(_) => OrchestrationState::ParallelDispatch,
            Stage::SequentialFallback { .. } => OrchestrationState::SequentialFallback,
            Stage::Synthesizing(_) => OrchestrationState::Synthesizing,
            Stage::Done(_) => OrchestrationState::Done,
            Stage::Failed(_) => OrchestrationState::Failed,
        }
    }
}

pub struct HybridOrchestrator<G: CompletionGateway + 'static> {
    context: Arc<OrchestratorContext<G>>,
    runner: ParallelTaskRunner<G>,
    synthesizer: ResultSynthesizer<G>,
}

impl<G: CompletionGateway + 'static> HybridOrchestrator<G> {
    pub fn new(context: Arc<OrchestratorContext<G>>) -> Self {
        let config = context.config();
        let runner = ParallelTaskRunner::new(Arc::clone(context.gateway()));
        let synthesizer = ResultSynthesizer::new(
            Arc::clone(context.gateway()),
            config.models.synthesizer.clone(),
            config.task_timeout,
        );
        Self {
            context,
            runner,
            synthesizer,
        }
    }

    pub fn context(&self) -> &OrchestratorContext<G> {
        &self.context
    }

    /// Classification only, without calling any responder
    pub fn analyze(&self, query: &Query) -> QueryAnalysis {
        self.context.classifier().classify(query)
    }

    pub async fn process(
        &self,
        input: OrchestrateInput,
    ) -> Result<FinalResponse, OrchestrationError> {
        self.process_with_progress(input, &NoProgress).await
    }

    pub async fn process_with_progress(
        &self,
        input: OrchestrateInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<FinalResponse, OrchestrationError> {
        let started = Instant::now();
        let mut stage = Stage::Classifying;

        loop {
            progress.on_state_enter(stage.state());
            stage = match stage {
                Stage::Classifying => self.classify(&input),
                Stage::ParallelDispatch(analysis) => {
                    self.dispatch(&input, &analysis, progress).await
                }
                Stage::SequentialFallback {
                    after_parallel,
                    domains,
                } => {
                    self.run_sequential(&input, after_parallel, domains, started)
                        .await
                }
                Stage::Synthesizing(successes) => {
                    self.synthesize(&input, successes, started).await
                }
                Stage::Done(response) => {
                    info!(
                        "Replied via {} in {:?} ({} domain(s))",
                        response.source,
                        response.elapsed,
                        response.domains.len()
                    );
                    self.log_event(
                        "completed",
                        json!({
                            "source": response.source,
                            "used_parallel": response.used_parallel,
                            "domains": response.domains,
                            "elapsed_ms": response.elapsed.as_millis() as u64,
                        }),
                    );
                    return Ok(response);
                }
                Stage::Failed(err) => {
                    error!("Request failed: {}", err);
                    self.log_event(
                        "failed",
                        json!({
                            "error": err.to_string(),
                            "elapsed_ms": started.elapsed().as_millis() as u64,
                        }),
                    );
                    return Err(err);
                }
            };
        }
    }

    /// Chat-adapter surface: always yields a reply, never an error
    pub async fn reply(&self, text: &str, context: SharedContext, locale: Locale) -> String {
        let query = match Query::try_new(text) {
            Ok(query) => query
                .with_locale(locale)
                .with_conversation_id(context.conversation_id()),
            Err(_) => return UserMessage::empty_query(locale).to_string(),
        };

        match self.process(OrchestrateInput::new(query, context)).await {
            Ok(response) => response.text,
            Err(err) => err.user_message(locale).to_string(),
        }
    }

    // ==================== States ====================

    fn classify(&self, input: &OrchestrateInput) -> Stage {
        let analysis = self.analyze(&input.query);
        let parallel = input.use_parallel && analysis.should_parallelize();

        info!(
            "Classified into [{}] ({}), parallel: {}",
            join_domains(analysis.domains()),
            analysis.complexity(),
            parallel
        );
        self.log_event(
            "classified",
            json!({
                "query": input.query.text(),
                "domains": analysis.domains(),
                "complexity": analysis.complexity(),
                "should_parallelize": analysis.should_parallelize(),
                "use_parallel": input.use_parallel,
            }),
        );

        if parallel {
            Stage::ParallelDispatch(analysis)
        } else {
            Stage::SequentialFallback {
                after_parallel: false,
                domains: analysis.domains().to_vec(),
            }
        }
    }

    async fn dispatch(
        &self,
        input: &OrchestrateInput,
        analysis: &QueryAnalysis,
        progress: &dyn ProgressNotifier,
    ) -> Stage {
        let config = self.context.config();
        let tasks = AgentTask::for_domains(
            analysis.domains(),
            &config.models,
            input.query.text(),
            &input.context,
            config.task_timeout,
        );
        info!("Dispatching {} specialist task(s)", tasks.len());

        let outcome = self.runner.run_all_with_progress(tasks, progress).await;
        self.log_timeline(&outcome);

        if outcome.all_failed {
            warn!("Every specialist failed, falling back to the general responder");
            let failed: Vec<DomainLabel> = outcome.results.iter().map(|r| r.domain).collect();
            self.log_event("fallback", json!({ "failed_domains": failed }));
            return Stage::SequentialFallback {
                after_parallel: true,
                domains: vec![DomainLabel::General],
            };
        }

        Stage::Synthesizing(outcome.successes())
    }

    async fn run_sequential(
        &self,
        input: &OrchestrateInput,
        after_parallel: bool,
        domains: Vec<DomainLabel>,
        started: Instant,
    ) -> Stage {
        let config = self.context.config();
        let responder = Responder::general(&config.models);
        let call = responder.respond(
            self.context.gateway().as_ref(),
            input.query.text(),
            &input.context,
        );
        let guarded = AssertUnwindSafe(call).catch_unwind();

        let result = match tokio::time::timeout(config.task_timeout, guarded).await {
            Ok(Ok(result)) => result,
            Ok(Err(_panic)) => Err(GatewayError::Other("responder panicked".to_string())),
            Err(_) => Err(GatewayError::Timeout),
        };

        match result {
            Ok(text) => {
                let source = if after_parallel {
                    ResponseSource::Fallback
                } else {
                    ResponseSource::Sequential
                };
                Stage::Done(FinalResponse::new(text, domains, source, started.elapsed()))
            }
            Err(source) => {
                warn!("General responder failed: {}", source);
                Stage::Failed(OrchestrationError::FallbackFailed {
                    after_parallel,
                    source,
                })
            }
        }
    }

    async fn synthesize(
        &self,
        input: &OrchestrateInput,
        successes: Vec<AgentResult>,
        started: Instant,
    ) -> Stage {
        match self.synthesizer.synthesize(input.query.text(), &successes).await {
            Ok(synthesis) => {
                self.log_event(
                    "synthesized",
                    json!({ "source": synthesis.source, "domains": synthesis.domains }),
                );
                Stage::Done(FinalResponse::new(
                    synthesis.text,
                    synthesis.domains,
                    synthesis.source,
                    started.elapsed(),
                ))
            }
            Err(SynthesisError::SynthesisFailed(e)) => {
                match AgentResult::best_success(&successes) {
                    Some(best) => {
                        warn!("Synthesis failed ({}), degrading to {} answer", e, best.domain);
                        self.log_event(
                            "synthesis_degraded",
                            json!({ "error": e.to_string(), "domain": best.domain }),
                        );
                        Stage::Done(FinalResponse::new(
                            best.text().unwrap_or_default(),
                            vec![best.domain],
                            ResponseSource::Degraded,
                            started.elapsed(),
                        ))
                    }
                    None => Stage::SequentialFallback {
                        after_parallel: true,
                        domains: vec![DomainLabel::General],
                    },
                }
            }
            Err(SynthesisError::AllAgentsFailed) => Stage::SequentialFallback {
                after_parallel: true,
                domains: vec![DomainLabel::General],
            },
        }
    }

    // ==================== Logging ====================

    fn log_timeline(&self, outcome: &DispatchOutcome) {
        let verbose = self.context.config().debug_timeline;
        for result in &outcome.results {
            if verbose {
                info!(
                    "timeline: {:<15} {:<8} {:>6}ms",
                    result.domain,
                    result.status,
                    result.latency.as_millis()
                );
            } else {
                debug!(
                    "timeline: {:<15} {:<8} {:>6}ms",
                    result.domain,
                    result.status,
                    result.latency.as_millis()
                );
            }
            self.log_event("task_completed", json!(result));
        }
    }

    fn log_event(&self, event_type: &'static str, payload: serde_json::Value) {
        self.context
            .logger()
            .log(ExecutionEvent::new(event_type, payload));
    }
}

fn join_domains(domains: &[DomainLabel]) -> String {
    domains
        .iter()
        .map(|d| d.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OrchestratorConfig;
    use crate::ports::completion::CompletionRequest;
    use crate::ports::execution_log::ExecutionLogger;
    use async_trait::async_trait;
    use rutobot_domain::{Model, RoleModels};
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Clone)]
    enum Script {
        Reply(u64, &'static str),
        Echo(u64),
        Fail(u64),
        Hang,
        Panic,
    }

    /// Gateway keyed by caller: "general", "synthesizer", or the specialist's tool
    struct ScriptedGateway {
        scripts: HashMap<&'static str, Script>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedGateway {
        fn new(scripts: &[(&'static str, Script)]) -> Arc<Self> {
            Arc::new(Self {
                scripts: scripts.iter().cloned().collect(),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls_to(&self, key: &str) -> usize {
            self.calls.lock().unwrap().iter().filter(|c| *c == key).count()
        }

        fn total_calls(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        fn key(request: &CompletionRequest) -> &'static str {
            match request.model.as_str() {
                "general-model" => "general",
                "synth-model" => "synthesizer",
                _ => request.toolset.names().first().copied().unwrap_or("unknown"),
            }
        }
    }

    #[async_trait]
    impl CompletionGateway for ScriptedGateway {
        async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError> {
            let key = Self::key(&request);
            self.calls.lock().unwrap().push(key.to_string());
            let script = self.scripts.get(key).cloned().unwrap_or(Script::Fail(0));
            match script {
                Script::Reply(ms, text) => {
                    tokio::time::sleep(Duration::from_millis(ms)).await;
                    Ok(text.to_string())
                }
                Script::Echo(ms) => {
                    tokio::time::sleep(Duration::from_millis(ms)).await;
                    Ok(request.prompt)
                }
                Script::Fail(ms) => {
                    tokio::time::sleep(Duration::from_millis(ms)).await;
                    Err(GatewayError::ProviderError("HTTP 500".to_string()))
                }
                Script::Hang => {
                    std::future::pending::<()>().await;
                    Err(GatewayError::Other("unreachable".to_string()))
                }
                Script::Panic => panic!("scripted panic for {}", key),
            }
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<&'static str>>,
    }

    impl ExecutionLogger for RecordingLogger {
        fn log(&self, event: ExecutionEvent) {
            self.events.lock().unwrap().push(event.event_type);
        }
    }

    fn config() -> OrchestratorConfig {
        OrchestratorConfig::default()
            .with_task_timeout(Duration::from_secs(1))
            .with_models(RoleModels {
                general: Model::Custom("general-model".to_string()),
                specialist: Model::Custom("specialist-model".to_string()),
                synthesizer: Model::Custom("synth-model".to_string()),
            })
    }

    fn orchestrator(gateway: &Arc<ScriptedGateway>) -> HybridOrchestrator<ScriptedGateway> {
        orchestrator_with(gateway, config())
    }

    fn orchestrator_with(
        gateway: &Arc<ScriptedGateway>,
        config: OrchestratorConfig,
    ) -> HybridOrchestrator<ScriptedGateway> {
        HybridOrchestrator::new(Arc::new(OrchestratorContext::new(
            Arc::clone(gateway),
            config,
        )))
    }

    fn input(text: &str) -> OrchestrateInput {
        OrchestrateInput::new(Query::try_new(text).unwrap(), SharedContext::new())
    }

    #[tokio::test(start_paused = true)]
    async fn test_scenario_a_two_domains_are_synthesized() {
        let gateway = ScriptedGateway::new(&[
            ("get_lodging", Script::Reply(100, "Hotel Azul, $90")),
            ("get_experiences", Script::Reply(100, "Buceo en el arrecife, $60")),
            ("synthesizer", Script::Echo(50)),
        ]);
        let orchestrator = orchestrator(&gateway);

        let query = Query::try_new("Dame hotel en Cancún y tours de buceo").unwrap();
        let analysis = orchestrator.analyze(&query);
        assert!(analysis.should_parallelize());

        let response = orchestrator
            .process(input("Dame hotel en Cancún y tours de buceo"))
            .await
            .unwrap();

        assert!(response.used_parallel);
        assert_eq!(response.source, ResponseSource::Synthesized);
        assert_eq!(
            response.domains,
            vec![DomainLabel::Experiences, DomainLabel::Lodging]
        );
        assert!(response.text.contains("Lodging Agent"));
        assert!(response.text.contains("Experiences Agent"));
        assert_eq!(gateway.calls_to("get_lodging"), 1);
        assert_eq!(gateway.calls_to("get_experiences"), 1);
        assert_eq!(gateway.calls_to("synthesizer"), 1);
        assert_eq!(gateway.calls_to("general"), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_scenario_b_single_domain_goes_sequential() {
        let gateway = ScriptedGateway::new(&[("general", Script::Reply(100, "Hoteles en Playa"))]);
        let orchestrator = orchestrator(&gateway);

        let response = orchestrator
            .process(input("¿Hoteles en Playa del Carmen?"))
            .await
            .unwrap();

        assert!(!response.used_parallel);
        assert_eq!(response.source, ResponseSource::Sequential);
        assert_eq!(response.domains, vec![DomainLabel::Lodging]);
        assert_eq!(response.text, "Hoteles en Playa");
        assert_eq!(gateway.total_calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_scenario_c_timeout_passes_through_single_success() {
        let gateway = ScriptedGateway::new(&[
            ("get_lodging", Script::Reply(100, "Hotel Azul, $90")),
            ("get_experiences", Script::Hang),
            ("synthesizer", Script::Echo(0)),
        ]);
        let orchestrator = orchestrator(&gateway);

        let response = orchestrator
            .process(input("Dame hotel en Cancún y tours de buceo"))
            .await
            .unwrap();

        assert_eq!(response.text, "Hotel Azul, $90");
        assert!(response.used_parallel);
        assert_eq!(response.source, ResponseSource::PassThrough);
        assert_eq!(response.domains, vec![DomainLabel::Lodging]);
        assert_eq!(gateway.calls_to("synthesizer"), 0);
        assert_eq!(gateway.calls_to("general"), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_scenario_d_fallback_runs_once_then_fails() {
        let gateway = ScriptedGateway::new(&[
            ("get_lodging", Script::Fail(10)),
            ("get_experiences", Script::Hang),
            ("general", Script::Fail(10)),
        ]);
        let logger = Arc::new(RecordingLogger::default());
        let context = OrchestratorContext::new(Arc::clone(&gateway), config())
            .with_logger(Arc::clone(&logger) as Arc<dyn ExecutionLogger>);
        let orchestrator = HybridOrchestrator::new(Arc::new(context));

        let err = orchestrator
            .process(input("Dame hotel en Cancún y tours de buceo"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            OrchestrationError::FallbackFailed {
                after_parallel: true,
                source: GatewayError::ProviderError(_)
            }
        ));
        assert_eq!(gateway.calls_to("general"), 1);
        assert_eq!(gateway.calls_to("synthesizer"), 0);

        let events = logger.events.lock().unwrap();
        assert_eq!(events.first(), Some(&"classified"));
        assert!(events.contains(&"fallback"));
        assert_eq!(events.last(), Some(&"failed"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_scenario_d_reply_is_localized_error() {
        let gateway = ScriptedGateway::new(&[
            ("get_lodging", Script::Fail(10)),
            ("get_experiences", Script::Fail(10)),
            ("general", Script::Fail(10)),
        ]);
        let orchestrator = orchestrator(&gateway);

        let reply = orchestrator
            .reply(
                "Dame hotel en Cancún y tours de buceo",
                SharedContext::new().with_channel("C1").with_thread("T1"),
                Locale::Es,
            )
            .await;

        assert_eq!(reply, UserMessage::processing_failed(Locale::Es));
        assert_eq!(gateway.calls_to("general"), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fallback_success_reports_general() {
        let gateway = ScriptedGateway::new(&[
            ("get_lodging", Script::Fail(10)),
            ("get_experiences", Script::Fail(10)),
            ("general", Script::Reply(10, "Respuesta general")),
        ]);
        let orchestrator = orchestrator(&gateway);

        let response = orchestrator
            .process(input("Dame hotel en Cancún y tours de buceo"))
            .await
            .unwrap();

        assert_eq!(response.text, "Respuesta general");
        assert_eq!(response.source, ResponseSource::Fallback);
        assert!(!response.used_parallel);
        assert_eq!(response.domains, vec![DomainLabel::General]);
        assert_eq!(gateway.calls_to("general"), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_synthesis_failure_degrades_to_longest_answer() {
        let gateway = ScriptedGateway::new(&[
            ("get_lodging", Script::Reply(10, "Hotel Azul")),
            ("get_experiences", Script::Reply(10, "Buceo en el arrecife de Cancún")),
            ("synthesizer", Script::Fail(10)),
        ]);
        let orchestrator = orchestrator(&gateway);

        let response = orchestrator
            .process(input("Dame hotel en Cancún y tours de buceo"))
            .await
            .unwrap();

        assert_eq!(response.source, ResponseSource::Degraded);
        assert!(response.used_parallel);
        assert_eq!(response.text, "Buceo en el arrecife de Cancún");
        assert_eq!(response.domains, vec![DomainLabel::Experiences]);
        assert_eq!(gateway.calls_to("general"), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_synthesis_panic_degrades_to_longest_answer() {
        let gateway = ScriptedGateway::new(&[
            ("get_lodging", Script::Reply(10, "Hotel Azul")),
            ("get_experiences", Script::Reply(10, "Buceo en el arrecife de Cancún")),
            ("synthesizer", Script::Panic),
        ]);
        let orchestrator = orchestrator(&gateway);

        let reply = orchestrator
            .reply(
                "Dame hotel en Cancún y tours de buceo",
                SharedContext::new(),
                Locale::Es,
            )
            .await;

        assert_eq!(reply, "Buceo en el arrecife de Cancún");
        assert_eq!(gateway.calls_to("synthesizer"), 1);
        assert_eq!(gateway.calls_to("general"), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unbounded_task_timeout_still_replies() {
        let gateway = ScriptedGateway::new(&[
            ("get_lodging", Script::Reply(10, "Hotel Azul")),
            ("get_experiences", Script::Reply(10, "Buceo")),
            ("synthesizer", Script::Reply(10, "merged")),
        ]);
        let orchestrator = orchestrator_with(
            &gateway,
            config().with_task_timeout(Duration::from_secs(u64::MAX)),
        );

        let reply = orchestrator
            .reply(
                "Dame hotel en Cancún y tours de buceo",
                SharedContext::new(),
                Locale::Es,
            )
            .await;

        assert_eq!(reply, "merged");
        assert_eq!(gateway.calls_to("synthesizer"), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_parallel_wall_clock_is_bounded_by_slowest_task() {
        let gateway = ScriptedGateway::new(&[
            ("get_lodging", Script::Reply(300, "hotel")),
            ("get_experiences", Script::Reply(300, "tour")),
            ("get_transportation", Script::Reply(300, "transfer")),
            ("synthesizer", Script::Reply(100, "merged")),
        ]);
        let orchestrator = orchestrator(&gateway);

        let response = orchestrator
            .process(input("Hotel, tour y transfer desde el aeropuerto"))
            .await
            .unwrap();

        assert_eq!(response.domains.len(), 3);
        assert_eq!(response.text, "merged");
        assert!(response.elapsed >= Duration::from_millis(400));
        assert!(response.elapsed < Duration::from_millis(900));
    }

    #[tokio::test(start_paused = true)]
    async fn test_caller_can_force_sequential() {
        let gateway = ScriptedGateway::new(&[("general", Script::Reply(10, "todo junto"))]);
        let orchestrator = orchestrator(&gateway);

        let response = orchestrator
            .process(input("Dame hotel en Cancún y tours de buceo").sequential())
            .await
            .unwrap();

        assert_eq!(response.source, ResponseSource::Sequential);
        assert!(!response.used_parallel);
        assert_eq!(gateway.total_calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_disabled_policy_never_fans_out() {
        let gateway = ScriptedGateway::new(&[("general", Script::Reply(10, "ok"))]);
        let orchestrator = orchestrator_with(
            &gateway,
            config().with_policy(rutobot_domain::ParallelPolicy::disabled()),
        );

        let response = orchestrator
            .process(input("Dame hotel en Cancún y tours de buceo"))
            .await
            .unwrap();

        assert_eq!(response.source, ResponseSource::Sequential);
        assert_eq!(gateway.calls_to("general"), 1);
    }

    #[tokio::test]
    async fn test_empty_reply_asks_for_a_message() {
        let gateway = ScriptedGateway::new(&[]);
        let orchestrator = orchestrator(&gateway);

        let reply = orchestrator.reply("   ", SharedContext::new(), Locale::En).await;

        assert_eq!(reply, UserMessage::empty_query(Locale::En));
        assert_eq!(gateway.total_calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_general_query_goes_sequential() {
        let gateway = ScriptedGateway::new(&[("general", Script::Reply(10, "¡Hola!"))]);
        let orchestrator = orchestrator(&gateway);

        let response = orchestrator.process(input("hola")).await.unwrap();

        assert_eq!(response.domains, vec![DomainLabel::General]);
        assert_eq!(response.source, ResponseSource::Sequential);
    }
}
