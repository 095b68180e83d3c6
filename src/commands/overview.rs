use async_trait::async_trait;

use super::{Command, CommandContext, CommandResult, require_connected};
use crate::report;

pub struct OverviewCommand;

#[async_trait]
impl Command for OverviewCommand {
    fn name(&self) -> &str {
        "/overview"
    }

    fn aliases(&self) -> &[&str] {
        &["/o"]
    }

    fn description(&self) -> &str {
        "show the health report from the last scan"
    }

    async fn execute(&self, _args: &str, ctx: &mut CommandContext<'_>) -> CommandResult {
        if !require_connected(ctx.session) {
            return CommandResult::Handled;
        }
        if let (Some(handle), Some(metrics), Some(analysis)) = (
            ctx.session.handle(),
            ctx.session.metrics(),
            ctx.session.analysis(),
        ) {
            print!("{}", report::overview(handle, metrics, analysis));
        }
        CommandResult::Handled
    }
}

pub struct FlagsCommand;

#[async_trait]
impl Command for FlagsCommand {
    fn name(&self) -> &str {
        "/flags"
    }

    fn description(&self) -> &str {
        "list risk flags, most severe first"
    }

    async fn execute(&self, _args: &str, ctx: &mut CommandContext<'_>) -> CommandResult {
        if !require_connected(ctx.session) {
            return CommandResult::Handled;
        }
        if let Some(analysis) = ctx.session.analysis() {
            print!("{}", report::flags(analysis));
            if !analysis.flags.is_empty() {
                println!("\n  use /fix <n> for a remediation plan");
            }
        }
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::{connected_session, test_service};
    use crate::session::Session;

    #[tokio::test]
    async fn refuses_without_connection() {
        let service = test_service(vec![]);
        let mut session = Session::new();
        let mut ctx = CommandContext {
            service: &service,
            session: &mut session,
        };
        assert_eq!(OverviewCommand.execute("", &mut ctx).await, CommandResult::Handled);
        assert_eq!(FlagsCommand.execute("", &mut ctx).await, CommandResult::Handled);
    }

    #[tokio::test]
    async fn renders_when_connected() {
        let service = test_service(vec![]);
        let mut session = connected_session(&service).await;
        let mut ctx = CommandContext {
            service: &service,
            session: &mut session,
        };
        assert_eq!(OverviewCommand.execute("", &mut ctx).await, CommandResult::Handled);
        assert_eq!(FlagsCommand.execute("", &mut ctx).await, CommandResult::Handled);
    }
}
