use async_trait::async_trait;

use super::{Command, CommandContext, CommandResult};

pub const NAME: &str = "/help";

/// Listed in the registry so it shows up in its own output. Dispatch is
/// intercepted by the registry, which owns the command list.
pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &str {
        NAME
    }

    fn aliases(&self) -> &[&str] {
        &["/h", "/?"]
    }

    fn description(&self) -> &str {
        "show available commands"
    }

    async fn execute(&self, _args: &str, _ctx: &mut CommandContext<'_>) -> CommandResult {
        CommandResult::Handled
    }
}
