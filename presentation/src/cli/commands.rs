//! CLI command definitions

use clap::{Parser, ValueEnum};
use rutobot_domain::{Locale, SharedContext};
use std::path::PathBuf;

/// Output format for a single reply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Only the reply text
    #[default]
    Text,
    /// Reply plus routing details (domains, path, timing)
    Full,
    /// JSON output
    Json,
}

/// CLI arguments for rutobot
#[derive(Parser, Debug)]
#[command(name = "rutobot")]
#[command(author, version, about = "Travel-desk assistant - routes a request to domain specialists and merges their answers")]
#[command(long_about = r#"
rutobot answers travel questions by routing each request to specialist
responders (experiences, lodging, transportation, catalog lookup).

A request that touches several domains is fanned out to one specialist per
domain in parallel, and their answers are merged into a single reply. A
single-domain request goes straight to the general responder.

Configuration is loaded from (in priority order):
1. Environment variables (ENABLE_PARALLEL, TASK_TIMEOUT_SECONDS, ...)
2. --config <path>     Explicit config file
3. ./rutobot.toml      Project-level config
4. ~/.config/rutobot/config.toml   Global config

Example:
  rutobot "Dame hotel en Cancún y tours de buceo"
  rutobot --detect "¿Hoteles en Playa del Carmen?"
  rutobot --chat --name María
"#)]
pub struct Cli {
    /// The request to answer (not required in chat mode)
    pub query: Option<String>,

    /// Always use the single general responder
    #[arg(long)]
    pub sequential: bool,

    /// Only classify the request and print the routing analysis
    #[arg(long)]
    pub detect: bool,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// First name of the person asking
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Chat channel identifier
    #[arg(long, value_name = "ID")]
    pub channel: Option<String>,

    /// Chat thread identifier
    #[arg(long, value_name = "ID")]
    pub thread: Option<String>,

    /// Language of built-in messages (es, en)
    #[arg(long, default_value = "es")]
    pub locale: Locale,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub print_config: bool,

    /// Append orchestration events as JSON lines to this file
    #[arg(long, value_name = "PATH")]
    pub timeline_log: Option<PathBuf>,

    /// Also write logs to daily-rotated files in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    /// Caller identity and chat location from the flags
    pub fn shared_context(&self) -> SharedContext {
        let mut context = SharedContext::new();
        if let Some(name) = &self.name {
            context = context.with_user(name);
        }
        if let Some(channel) = &self.channel {
            context = context.with_channel(channel);
        }
        if let Some(thread) = &self.thread {
            context = context.with_thread(thread);
        }
        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_query() {
        let cli = Cli::parse_from(["rutobot", "-vv", "--name", "María", "Hotel en Tulum"]);
        assert_eq!(cli.query.as_deref(), Some("Hotel en Tulum"));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output, OutputFormat::Text);
        assert_eq!(cli.locale, Locale::Es);
        assert_eq!(
            cli.shared_context().user_first_name.as_deref(),
            Some("María")
        );
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "rutobot",
            "--sequential",
            "-o",
            "json",
            "--locale",
            "en-US",
            "--channel",
            "C1",
            "--thread",
            "T9",
            "tours",
        ]);
        assert!(cli.sequential);
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.locale, Locale::En);
        assert_eq!(cli.shared_context().conversation_id(), "C1_T9");
    }
}
