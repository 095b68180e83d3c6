use async_trait::async_trait;

use super::{Command, CommandContext, CommandResult};

pub struct QuitCommand;

#[async_trait]
impl Command for QuitCommand {
    fn name(&self) -> &str {
        "/quit"
    }

    fn aliases(&self) -> &[&str] {
        &["quit", "exit", "/exit"]
    }

    fn description(&self) -> &str {
        "exit xvis"
    }

    async fn execute(&self, _args: &str, ctx: &mut CommandContext<'_>) -> CommandResult {
        ctx.session.disconnect();
        CommandResult::Quit
    }
}
