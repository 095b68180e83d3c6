use async_trait::async_trait;

use super::{Command, CommandContext, CommandResult, require_connected};
use crate::report;

pub struct TrendCommand;

#[async_trait]
impl Command for TrendCommand {
    fn name(&self) -> &str {
        "/trend"
    }

    fn aliases(&self) -> &[&str] {
        &["/t"]
    }

    fn description(&self) -> &str {
        "daily impressions and engagements for the current period"
    }

    async fn execute(&self, _args: &str, ctx: &mut CommandContext<'_>) -> CommandResult {
        if !require_connected(ctx.session) {
            return CommandResult::Handled;
        }
        if let Some(metrics) = ctx.session.metrics() {
            print!("{}", report::trend(metrics));
        }
        CommandResult::Handled
    }
}
