//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use rutobot_application::{CompletionGateway, HybridOrchestrator};
use rutobot_domain::{Locale, Query, SharedContext};
use std::sync::Arc;

/// What a slash command asks the loop to do
#[derive(Debug, PartialEq, Eq)]
enum CommandOutcome {
    Continue,
    Exit,
}

/// Interactive chat REPL
///
/// Every line goes through [`HybridOrchestrator::reply`], exactly as a
/// chat-platform message would, so errors surface as the localized reply.
pub struct ChatRepl<G: CompletionGateway + 'static> {
    orchestrator: Arc<HybridOrchestrator<G>>,
    context: SharedContext,
    locale: Locale,
}

impl<G: CompletionGateway + 'static> ChatRepl<G> {
    pub fn new(orchestrator: Arc<HybridOrchestrator<G>>) -> Self {
        Self {
            orchestrator,
            context: SharedContext::new(),
            locale: Locale::default(),
        }
    }

    pub fn with_context(mut self, context: SharedContext) -> Self {
        self.context = context;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = dirs::data_dir().map(|p| p.join("rutobot").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline(">>> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line) == CommandOutcome::Exit {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    let reply = self
                        .orchestrator
                        .reply(line, self.context.clone(), self.locale)
                        .await;
                    println!();
                    println!("{}", reply);
                    println!();
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│             rutobot - Chat Mode             │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        if let Some(name) = &self.context.user_first_name {
            println!("Chatting as {}", name);
            println!();
        }
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /help, /h, /?      - Show this help");
        println!("  /detect <request>  - Show how a request would be routed");
        println!("  /config            - Show the active configuration");
        println!("  /quit, /exit, /q   - Exit chat");
        println!();
    }

    fn handle_command(&self, cmd: &str) -> CommandOutcome {
        let (name, arg) = match cmd.split_once(' ') {
            Some((name, arg)) => (name, arg.trim()),
            None => (cmd, ""),
        };

        match name {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                CommandOutcome::Exit
            }
            "/help" | "/h" | "/?" => {
                println!();
                Self::print_help();
                CommandOutcome::Continue
            }
            "/config" => {
                println!(
                    "{}",
                    ConsoleFormatter::format_config(self.orchestrator.context().config())
                );
                CommandOutcome::Continue
            }
            "/detect" => {
                match Query::try_new(arg) {
                    Ok(query) => {
                        let analysis = self.orchestrator.analyze(&query);
                        println!("{}", ConsoleFormatter::format_analysis(arg, &analysis));
                    }
                    Err(_) => println!("Usage: /detect <request>"),
                }
                CommandOutcome::Continue
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                CommandOutcome::Continue
            }
        }
    }
}
