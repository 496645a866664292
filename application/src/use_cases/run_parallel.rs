//! Parallel task runner
//!
//! Fans out one task per detected domain and joins all of them. Each task
//! is bounded by its own deadline; a timeout, a gateway error or a panic is
//! recorded as that task's result and never affects its siblings.

use crate::ports::completion::CompletionGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::responder::Responder;
use futures::FutureExt;
use rutobot_domain::{AgentResult, AgentStatus, DomainLabel, RoleModels, SharedContext};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::{debug, warn};

/// One unit of work for the runner
#[derive(Debug, Clone)]
pub struct AgentTask {
    pub domain: DomainLabel,
    pub responder: Responder,
    pub query: Arc<str>,
    pub context: Arc<SharedContext>,
    /// `None` when the timeout reaches past what the clock can represent
    pub deadline: Option<Instant>,
}

impl AgentTask {
    /// One task per distinct domain, in the given order
    pub fn for_domains(
        domains: &[DomainLabel],
        models: &RoleModels,
        query: &str,
        context: &SharedContext,
        timeout: Duration,
    ) -> Vec<AgentTask> {
        let query: Arc<str> = Arc::from(query);
        let context = Arc::new(context.clone());
        let deadline = Instant::now().checked_add(timeout);

        let mut seen: Vec<DomainLabel> = Vec::with_capacity(domains.len());
        let mut tasks = Vec::with_capacity(domains.len());
        for &domain in domains {
            if seen.contains(&domain) {
                continue;
            }
            seen.push(domain);
            tasks.push(AgentTask {
                domain,
                responder: Responder::for_domain(domain, models),
                query: Arc::clone(&query),
                context: Arc::clone(&context),
                deadline,
            });
        }
        tasks
    }
}

/// Results of one fan-out, in dispatch order
#[derive(Debug, Clone)]
pub struct DispatchOutcome {
    pub results: Vec<AgentResult>,
    /// True when no task succeeded
    pub all_failed: bool,
}

impl DispatchOutcome {
    fn new(results: Vec<AgentResult>) -> Self {
        let all_failed = results.iter().all(|r| r.status.is_failure());
        Self {
            results,
            all_failed,
        }
    }

    pub fn successes(&self) -> Vec<AgentResult> {
        self.results
            .iter()
            .filter(|r| r.is_success())
            .cloned()
            .collect()
    }
}

pub struct ParallelTaskRunner<G: CompletionGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: CompletionGateway + 'static> ParallelTaskRunner<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn run_all(&self, tasks: Vec<AgentTask>) -> DispatchOutcome {
        self.run_all_with_progress(tasks, &NoProgress).await
    }

    /// Run every task concurrently and wait for all of them
    pub async fn run_all_with_progress(
        &self,
        tasks: Vec<AgentTask>,
        progress: &dyn ProgressNotifier,
    ) -> DispatchOutcome {
        let domains: Vec<DomainLabel> = tasks.iter().map(|t| t.domain).collect();
        let mut slots: Vec<Option<AgentResult>> = vec![None; tasks.len()];

        progress.on_dispatch_start(tasks.len());

        let mut join_set = JoinSet::new();
        for (index, task) in tasks.into_iter().enumerate() {
            let gateway = Arc::clone(&self.gateway);
            join_set.spawn(async move { (index, Self::run_one(gateway, task).await) });
        }

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, result)) => {
                    debug!(
                        "Task {} finished: {} in {:?}",
                        result.domain, result.status, result.latency
                    );
                    progress.on_task_complete(result.domain, result.status);
                    slots[index] = Some(result);
                }
                Err(e) => {
                    warn!("Task join error: {}", e);
                }
            }
        }

        progress.on_dispatch_complete();

        let results = slots
            .into_iter()
            .zip(domains)
            .map(|(slot, domain)| {
                slot.unwrap_or_else(|| AgentResult::error(domain, "task aborted", Duration::ZERO))
            })
            .collect();

        DispatchOutcome::new(results)
    }

    async fn run_one(gateway: Arc<G>, task: AgentTask) -> AgentResult {
        let started = Instant::now();
        let call = task
            .responder
            .respond(gateway.as_ref(), &task.query, &task.context);
        let guarded = AssertUnwindSafe(call).catch_unwind();

        let outcome = match task.deadline {
            Some(deadline) => tokio::time::timeout_at(deadline, guarded).await,
            None => Ok(guarded.await),
        };

        match outcome {
            Ok(Ok(Ok(content))) => AgentResult::success(task.domain, content, started.elapsed()),
            Ok(Ok(Err(e))) => {
                warn!("Responder {} failed: {}", task.domain, e);
                AgentResult::error(task.domain, e.to_string(), started.elapsed())
            }
            Ok(Err(_panic)) => {
                warn!("Responder {} panicked", task.domain);
                AgentResult::error(task.domain, "responder panicked", started.elapsed())
            }
            Err(_elapsed) => {
                warn!("Responder {} timed out", task.domain);
                AgentResult::timeout(task.domain, started.elapsed())
            }
        }
    }
}
