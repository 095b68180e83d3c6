use async_trait::async_trait;

use super::{Command, CommandContext, CommandResult};
use crate::report;
use crate::spinner::Spinner;

pub struct SearchCommand;

#[async_trait]
impl Command for SearchCommand {
    fn name(&self) -> &str {
        "/search"
    }

    fn usage(&self) -> &str {
        "<query>"
    }

    fn description(&self) -> &str {
        "check whether a query surfaces in search"
    }

    async fn execute(&self, args: &str, ctx: &mut CommandContext<'_>) -> CommandResult {
        if args.is_empty() {
            eprintln!("  usage: /search <query>");
            return CommandResult::Handled;
        }
        let result = Spinner::during("crawling search", ctx.service.run_search_check(args)).await;
        print!("{}", report::search_result(&result));
        CommandResult::Handled
    }
}

pub struct VariationsCommand;

#[async_trait]
impl Command for VariationsCommand {
    fn name(&self) -> &str {
        "/variations"
    }

    fn usage(&self) -> &str {
        "<query>"
    }

    fn description(&self) -> &str {
        "suggest related queries to test"
    }

    async fn execute(&self, args: &str, ctx: &mut CommandContext<'_>) -> CommandResult {
        if args.is_empty() {
            eprintln!("  usage: /variations <query>");
            return CommandResult::Handled;
        }
        let variations = Spinner::during(
            "generating variations",
            ctx.service.generate_search_variations(args),
        )
        .await;
        print!("{}", report::query_variations(&variations));
        CommandResult::Handled
    }
}
