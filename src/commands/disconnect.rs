use async_trait::async_trait;

use super::{Command, CommandContext, CommandResult, require_connected};

pub struct DisconnectCommand;

#[async_trait]
impl Command for DisconnectCommand {
    fn name(&self) -> &str {
        "/disconnect"
    }

    fn aliases(&self) -> &[&str] {
        &["/logout"]
    }

    fn description(&self) -> &str {
        "forget credentials and connect another account"
    }

    async fn execute(&self, _args: &str, ctx: &mut CommandContext<'_>) -> CommandResult {
        if !require_connected(ctx.session) {
            return CommandResult::Handled;
        }
        ctx.session.disconnect();
        println!("  disconnected");
        CommandResult::Disconnected
    }
}
