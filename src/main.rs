use std::io::{self, Write};

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;

use xvis::banner::{BannerInfo, print_banner, print_session_summary};
use xvis::commands::{CommandContext, CommandRegistry, CommandResult};
use xvis::config::ServiceConfig;
use xvis::consts::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use xvis::credentials::Credentials;
use xvis::report;
use xvis::service::AnalysisService;
use xvis::session::Session;
use xvis::spinner::Spinner;

#[derive(Parser)]
#[command(name = "xvis", version, about = "Visibility diagnostics for X accounts.")]
struct Cli {
    /// Gemini API key (API_KEY is also accepted)
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Model name
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Generative Language API base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Seed for the simulated account data (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the simulated network delays
    #[arg(long, default_value_t = false)]
    no_delay: bool,

    /// Log task outcomes to stderr (RUST_LOG overrides)
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

type InputLines = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "xvis=info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let config = ServiceConfig {
        api_key: cli.api_key.or_else(|| std::env::var("API_KEY").ok()),
        model: cli.model,
        base_url: cli.base_url,
        seed: cli.seed,
        simulate_delays: !cli.no_delay,
    };

    print_banner(&BannerInfo {
        model: &config.model,
        key_status: config.key_status(),
        simulation: &config.simulation_label(),
    });

    let service = config.build_service();
    let registry = CommandRegistry::new();
    let mut session = Session::new();

    // Async stdin so Ctrl+C is caught at every prompt
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    'accounts: loop {
        if !connect(&service, &mut session, &mut lines).await? {
            break;
        }
        println!("\n  type /help for commands\n");

        loop {
            let Some(line) = read_line(&mut lines, "\nxvis> ").await? else {
                break 'accounts;
            };
            let input = line.trim();
            if input.is_empty() {
                continue;
            }

            let mut ctx = CommandContext {
                service: &service,
                session: &mut session,
            };

            // Ctrl+C during a command cancels the command, not the REPL
            let result = tokio::select! {
                result = registry.dispatch(input, &mut ctx) => result,
                _ = tokio::signal::ctrl_c() => {
                    println!("\n\ninterrupted");
                    CommandResult::Handled
                }
            };

            match result {
                CommandResult::Handled => {}
                CommandResult::NotACommand => {
                    println!("  commands start with /, type /help for the list");
                }
                CommandResult::Disconnected => continue 'accounts,
                CommandResult::Quit => break 'accounts,
            }
        }
    }

    session.disconnect();
    print_session_summary(service.usage());
    Ok(())
}

/// Capture a handle and credentials, then scan the account. Retries until a
/// scan succeeds. Returns `false` when the user leaves instead.
async fn connect(
    service: &AnalysisService,
    session: &mut Session,
    lines: &mut InputLines,
) -> anyhow::Result<bool> {
    println!("connect an account (leave the handle empty to quit)");
    loop {
        let Some(handle) = read_line(lines, "\nhandle: ").await? else {
            return Ok(false);
        };
        if handle.trim().is_empty() {
            return Ok(false);
        }

        let mut fields = Vec::with_capacity(3);
        for label in ["api key: ", "api secret: ", "bearer token: "] {
            let Some(value) = read_line(lines, label).await? else {
                return Ok(false);
            };
            fields.push(value.trim().to_string());
        }
        let [api_key, api_secret, bearer_token]: [String; 3] = fields
            .try_into()
            .map_err(|_| anyhow::anyhow!("credential capture lost a field"))?;
        let credentials = Credentials::new(api_key, api_secret, bearer_token);

        let scanned = Spinner::during(
            "scanning account",
            session.connect(service, credentials, &handle),
        )
        .await;
        if let Err(e) = scanned {
            eprintln!("  ✗ {e:#}");
            continue;
        }

        if let (Some(handle), Some(metrics), Some(analysis)) =
            (session.handle(), session.metrics(), session.analysis())
        {
            println!();
            print!("{}", report::overview(handle, metrics, analysis));
        }
        return Ok(true);
    }
}

/// Print `prompt` and read one line. `None` on EOF or Ctrl+C.
async fn read_line(lines: &mut InputLines, prompt: &str) -> anyhow::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    tokio::select! {
        result = lines.next_line() => match result {
            Ok(Some(line)) => Ok(Some(line)),
            Ok(None) => {
                // Ctrl+D (EOF)
                println!();
                Ok(None)
            }
            Err(e) => {
                eprintln!("input error: {e}");
                Ok(None)
            }
        },
        _ = tokio::signal::ctrl_c() => {
            println!();
            Ok(None)
        }
    }
}
