use async_trait::async_trait;

use super::{Command, CommandContext, CommandResult};
use crate::report;
use crate::spinner::Spinner;

pub struct OptimizeCommand;

#[async_trait]
impl Command for OptimizeCommand {
    fn name(&self) -> &str {
        "/optimize"
    }

    fn usage(&self) -> &str {
        "<draft>"
    }

    fn description(&self) -> &str {
        "rewrite a draft tweet three ways"
    }

    async fn execute(&self, args: &str, ctx: &mut CommandContext<'_>) -> CommandResult {
        if args.is_empty() {
            eprintln!("  usage: /optimize <draft>");
            return CommandResult::Handled;
        }
        let variations = Spinner::during("optimizing draft", ctx.service.optimize_draft(args)).await;
        print!("{}", report::tweet_variations(&variations));
        CommandResult::Handled
    }
}
