//! Progress reporting for orchestrated requests

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use rutobot_application::ProgressNotifier;
use rutobot_domain::{AgentStatus, DomainLabel, OrchestrationState};
use std::sync::Mutex;

/// Reports progress with a spinner per state and a bar for the fan-out
pub struct ProgressReporter {
    multi: MultiProgress,
    state_bar: Mutex<Option<ProgressBar>>,
    dispatch_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            state_bar: Mutex::new(None),
            dispatch_bar: Mutex::new(None),
        }
    }

    fn dispatch_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn status_mark(status: AgentStatus) -> String {
        match status {
            AgentStatus::Success => "v".green().to_string(),
            AgentStatus::Timeout => "t".yellow().to_string(),
            AgentStatus::Error => "x".red().to_string(),
        }
    }

    fn finish_state(&self) {
        if let Ok(mut slot) = self.state_bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_state_enter(&self, state: OrchestrationState) {
        self.finish_state();
        if state.is_terminal() || state == OrchestrationState::ParallelDispatch {
            return;
        }

        let pb = self.multi.add(ProgressBar::new_spinner());
        pb.set_style(Self::spinner_style());
        pb.set_prefix(state.display_name().to_string());
        pb.set_message("...");
        pb.enable_steady_tick(std::time::Duration::from_millis(120));

        if let Ok(mut slot) = self.state_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_dispatch_start(&self, total_tasks: usize) {
        let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
        pb.set_style(Self::dispatch_style());
        pb.set_prefix("Specialists");
        pb.set_message("Starting...");

        if let Ok(mut slot) = self.dispatch_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_task_complete(&self, domain: DomainLabel, status: AgentStatus) {
        if let Ok(slot) = self.dispatch_bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            pb.set_message(format!("{} {}", Self::status_mark(status), domain));
            pb.inc(1);
        }
    }

    fn on_dispatch_complete(&self) {
        if let Ok(mut slot) = self.dispatch_bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_with_message(format!("{}", "complete!".green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_state_enter(&self, state: OrchestrationState) {
        if !state.is_terminal() {
            println!("{} {}", "->".cyan(), state.display_name().bold());
        }
    }

    fn on_dispatch_start(&self, total_tasks: usize) {
        println!("   {} specialist task(s)", total_tasks);
    }

    fn on_task_complete(&self, domain: DomainLabel, status: AgentStatus) {
        match status {
            AgentStatus::Success => println!("  {} {}", "v".green(), domain),
            other => println!("  {} {} ({})", "x".red(), domain, other),
        }
    }

    fn on_dispatch_complete(&self) {
        println!();
    }
}
