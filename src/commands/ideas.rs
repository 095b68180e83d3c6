use async_trait::async_trait;

use super::{Command, CommandContext, CommandResult, require_connected};
use crate::report;

pub struct IdeasCommand;

#[async_trait]
impl Command for IdeasCommand {
    fn name(&self) -> &str {
        "/ideas"
    }

    fn description(&self) -> &str {
        "content ideas from the last scan"
    }

    async fn execute(&self, _args: &str, ctx: &mut CommandContext<'_>) -> CommandResult {
        if !require_connected(ctx.session) {
            return CommandResult::Handled;
        }
        if let Some(analysis) = ctx.session.analysis() {
            print!("{}", report::content_ideas(&analysis.content_ideas));
        }
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::{connected_session, test_service};

    #[tokio::test]
    async fn lists_ideas_when_connected() {
        let service = test_service(vec![]);
        let mut session = connected_session(&service).await;
        let mut ctx = CommandContext {
            service: &service,
            session: &mut session,
        };
        assert_eq!(IdeasCommand.execute("", &mut ctx).await, CommandResult::Handled);
    }
}
