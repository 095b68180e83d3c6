use async_trait::async_trait;

use super::{Command, CommandContext, CommandResult, require_connected};
use crate::report;
use crate::spinner::Spinner;

pub struct FixCommand;

#[async_trait]
impl Command for FixCommand {
    fn name(&self) -> &str {
        "/fix"
    }

    fn usage(&self) -> &str {
        "<n>"
    }

    fn description(&self) -> &str {
        "remediation plan for flag n (see /flags)"
    }

    async fn execute(&self, args: &str, ctx: &mut CommandContext<'_>) -> CommandResult {
        if !require_connected(ctx.session) {
            return CommandResult::Handled;
        }
        let n = match args.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                eprintln!("  usage: /fix <n>, where n is a flag number from /flags");
                return CommandResult::Handled;
            }
        };

        let service = ctx.service;
        let selected =
            Spinner::during("drafting fix", ctx.session.select_flag(service, n - 1)).await;
        match selected {
            Ok(selected) => print!("{}", report::fix(selected)),
            Err(e) => eprintln!("  ✗ {e:#}"),
        }
        CommandResult::Handled
    }
}
