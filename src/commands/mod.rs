//! Built-in REPL commands prefixed with `/`.
//!
//! Commands implement the [`Command`] trait and are registered in a
//! [`CommandRegistry`]. The registry handles dispatch, alias resolution,
//! argument splitting, and help generation.

mod disconnect;
mod fix;
mod help;
mod ideas;
mod optimize;
mod overview;
mod quit;
mod rescan;
mod search;
mod tokens;
mod trend;

use async_trait::async_trait;
use std::sync::Arc;

use crate::service::AnalysisService;
use crate::session::Session;

/// What a command can reach while it runs.
pub struct CommandContext<'a> {
    pub service: &'a AnalysisService,
    pub session: &'a mut Session,
}

/// What the REPL should do after a command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    /// Not a command, the REPL decides what to do with the input.
    NotACommand,
    /// Command handled, continue the REPL loop.
    Handled,
    /// The account was disconnected; go back to credential capture.
    Disconnected,
    /// Exit the REPL.
    Quit,
}

/// A REPL command. Implement this trait to add new commands.
#[async_trait]
pub trait Command: Send + Sync {
    /// Primary name, e.g. `"/fix"`.
    fn name(&self) -> &str;

    /// Alternative names, e.g. `&["/h", "/?"]`.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// Argument placeholder for `/help`, e.g. `"<query>"`.
    fn usage(&self) -> &str {
        ""
    }

    /// One-line description for `/help`.
    fn description(&self) -> &str;

    /// Run the command. `args` is the trimmed text after the command name.
    async fn execute(&self, args: &str, ctx: &mut CommandContext<'_>) -> CommandResult;
}

/// Holds registered commands.
pub struct CommandRegistry {
    commands: Vec<Arc<dyn Command>>,
}

impl CommandRegistry {
    /// Create a registry with all built-in commands.
    pub fn new() -> Self {
        let commands: Vec<Arc<dyn Command>> = vec![
            Arc::new(help::HelpCommand),
            Arc::new(overview::OverviewCommand),
            Arc::new(overview::FlagsCommand),
            Arc::new(trend::TrendCommand),
            Arc::new(rescan::RescanCommand),
            Arc::new(fix::FixCommand),
            Arc::new(optimize::OptimizeCommand),
            Arc::new(search::SearchCommand),
            Arc::new(search::VariationsCommand),
            Arc::new(ideas::IdeasCommand),
            Arc::new(tokens::TokensCommand),
            Arc::new(disconnect::DisconnectCommand),
            Arc::new(quit::QuitCommand),
        ];
        Self { commands }
    }

    /// Register an additional command.
    pub fn register(&mut self, command: Arc<dyn Command>) {
        self.commands.push(command);
    }

    /// Dispatch input to a matching command, or return `NotACommand`.
    pub async fn dispatch(&self, input: &str, ctx: &mut CommandContext<'_>) -> CommandResult {
        let input = input.trim();
        let (cmd, args) = match input.split_once(char::is_whitespace) {
            Some((cmd, args)) => (cmd, args.trim()),
            None => (input, ""),
        };

        for command in &self.commands {
            if cmd == command.name() || command.aliases().contains(&cmd) {
                // /help is special, it needs the registry to list all commands
                if command.name() == help::NAME {
                    print!("{}", self.help_text());
                    return CommandResult::Handled;
                }
                return command.execute(args, ctx).await;
            }
        }

        if cmd.starts_with('/') {
            println!("unknown command: {cmd}");
            println!("type /help for available commands");
            return CommandResult::Handled;
        }

        CommandResult::NotACommand
    }

    /// Generate help text from all registered commands.
    pub fn help_text(&self) -> String {
        let entries: Vec<(String, &str)> = self
            .commands
            .iter()
            .map(|c| (format_label(c.name(), c.usage(), c.aliases()), c.description()))
            .collect();

        let max_width = entries
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(10);

        let mut out = String::new();
        for (label, desc) in &entries {
            out.push_str(&format!("  {label:<max_width$}  {desc}\n"));
        }
        out
    }

    /// All registered command names.
    pub fn names(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.name()).collect()
    }

    /// All registered names and aliases (for duplicate detection).
    pub fn all_triggers(&self) -> Vec<&str> {
        let mut triggers = Vec::new();
        for cmd in &self.commands {
            triggers.push(cmd.name());
            triggers.extend_from_slice(cmd.aliases());
        }
        triggers
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn format_label(name: &str, usage: &str, aliases: &[&str]) -> String {
    let mut label = name.to_string();
    if !usage.is_empty() {
        label.push(' ');
        label.push_str(usage);
    }
    if !aliases.is_empty() {
        label.push_str(&format!(" ({})", aliases.join(", ")));
    }
    label
}

/// Print the standard refusal when a command needs a connected account.
fn require_connected(session: &Session) -> bool {
    if session.is_connected() {
        return true;
    }
    eprintln!("  ✗ not connected");
    false
}
