//! CLI entrypoint for rutobot
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use rutobot_application::{
    ExecutionLogger, HybridOrchestrator, NoExecutionLogger, NoProgress, OrchestrateInput,
    OrchestratorContext, ProgressNotifier,
};
use rutobot_domain::Query;
use rutobot_infrastructure::{
    ConfigLoader, FileConfig, JsonlExecutionLogger, OpenAiCompletionGateway,
};
use rutobot_presentation::{
    ChatRepl, Cli, ConsoleFormatter, OutputFormat, ProgressReporter, SimpleProgress,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_tracing(&cli)?;

    info!("Starting rutobot");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    }
    .map_err(|e| anyhow!("Failed to load configuration: {}", e))?;

    for issue in file_config.validate().iter().filter(|i| !i.is_error()) {
        warn!("{}", issue);
    }
    let config = file_config.to_orchestrator_config()?;

    if cli.print_config {
        println!("{}", ConsoleFormatter::format_config(&config));
        print_provider(&file_config);
        return Ok(());
    }

    // Classification only: no provider needed
    if cli.detect {
        let query = required_query(&cli)?;
        let analysis = config.classifier().classify(&query);
        println!("{}", ConsoleFormatter::format_analysis(query.text(), &analysis));
        return Ok(());
    }

    // === Dependency Injection ===
    if file_config.provider.api_key().is_none() {
        warn!(
            "{} is not set; requests are sent without an API key",
            file_config.provider.api_key_env
        );
    }
    let gateway = Arc::new(OpenAiCompletionGateway::from_config(&file_config.provider)?);

    let logger: Arc<dyn ExecutionLogger> = match cli
        .timeline_log
        .clone()
        .or_else(|| file_config.logging.timeline_path())
    {
        Some(path) => match JsonlExecutionLogger::new(&path) {
            Some(logger) => {
                info!("Writing orchestration timeline to {}", path.display());
                Arc::new(logger)
            }
            None => Arc::new(NoExecutionLogger),
        },
        None => Arc::new(NoExecutionLogger),
    };

    let context = OrchestratorContext::new(gateway, config).with_logger(logger);
    let orchestrator = Arc::new(HybridOrchestrator::new(Arc::new(context)));

    // Chat mode
    if cli.chat {
        let repl = ChatRepl::new(orchestrator)
            .with_context(cli.shared_context())
            .with_locale(cli.locale);
        repl.run().await.map_err(|e| anyhow!("Chat error: {}", e))?;
        return Ok(());
    }

    // Single request mode
    let query = required_query(&cli)?
        .with_locale(cli.locale)
        .with_conversation_id(cli.shared_context().conversation_id());
    let text = query.text().to_string();

    let mut input = OrchestrateInput::new(query, cli.shared_context());
    if cli.sequential {
        input = input.sequential();
    }

    let progress: Box<dyn ProgressNotifier> = if cli.quiet || cli.output == OutputFormat::Json {
        Box::new(NoProgress)
    } else if cli.verbose > 0 {
        // Spinners garble interleaved log lines
        Box::new(SimpleProgress)
    } else {
        Box::new(ProgressReporter::new())
    };

    let response = match orchestrator
        .process_with_progress(input, progress.as_ref())
        .await
    {
        Ok(response) => response,
        Err(e) => {
            println!("{}", e.user_message(cli.locale));
            return Err(e.into());
        }
    };

    let output = match cli.output {
        OutputFormat::Text => ConsoleFormatter::format_text(&response),
        OutputFormat::Full => ConsoleFormatter::format_full(&text, &response),
        OutputFormat::Json => ConsoleFormatter::format_json(&response),
    };
    println!("{}", output);

    Ok(())
}

/// Console logging by `-v` count (or `RUST_LOG`), plus daily files with `--log-dir`
fn init_tracing(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match &cli.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Cannot create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "rutobot.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

fn required_query(cli: &Cli) -> Result<Query> {
    match cli.query.as_deref() {
        Some(text) => Query::try_new(text).context("Request text is empty"),
        None => bail!("A request is required. Use --chat for interactive mode."),
    }
}

fn print_provider(config: &FileConfig) {
    println!("Provider");
    println!("{}", "-".repeat(40));
    println!("  base url:        {}", config.provider.base_url);
    println!(
        "  api key env:     {} ({})",
        config.provider.api_key_env,
        if config.provider.api_key().is_some() {
            "set"
        } else {
            "not set"
        }
    );
    println!("  request timeout: {}s", config.provider.request_timeout_seconds);
    if let Some(path) = config.logging.timeline_path() {
        println!("  timeline log:    {}", path.display());
    }
}
