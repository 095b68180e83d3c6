use async_trait::async_trait;

use super::{Command, CommandContext, CommandResult, require_connected};
use crate::report;
use crate::spinner::Spinner;

pub struct RescanCommand;

#[async_trait]
impl Command for RescanCommand {
    fn name(&self) -> &str {
        "/rescan"
    }

    fn aliases(&self) -> &[&str] {
        &["/r"]
    }

    fn description(&self) -> &str {
        "pull fresh metrics and re-run the analysis"
    }

    async fn execute(&self, _args: &str, ctx: &mut CommandContext<'_>) -> CommandResult {
        if !require_connected(ctx.session) {
            return CommandResult::Handled;
        }
        let result = Spinner::during("rescanning account", ctx.session.rescan(ctx.service)).await;
        if let Err(e) = result {
            eprintln!("  ✗ {e:#}");
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::{connected_session, test_service};

    #[tokio::test]
    async fn rescan_clears_selection() {
        let service = test_service(vec![]);
        let mut session = connected_session(&service).await;
        session.select_flag(&service, 0).await.unwrap();
        assert!(session.selected().is_some());

        let mut ctx = CommandContext {
            service: &service,
            session: &mut session,
        };
        assert_eq!(RescanCommand.execute("", &mut ctx).await, CommandResult::Handled);
        assert!(session.selected().is_none());
        assert!(session.is_connected());
    }
}
