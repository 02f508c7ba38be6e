mod error;
mod message;
mod notifications;

use anyhow::{anyhow, Result};
use clap::Parser;
use message::NotificationConfig;
use notifications::{Dispatcher, NativeDispatcher};
use std::io::{self, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Hook arguments. The first one is always taken verbatim as the exit code,
/// so there are no flags (not even `--help`) that could shadow it.
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(name = "agent-ping")]
#[command(about = "Desktop notification and sound when an agent task finishes", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Exit code reported by the agent hook. Anything other than 0 is an error.
    #[arg(allow_hyphen_values = true)]
    exit_code: Option<String>,

    /// Additional hook arguments (ignored)
    #[arg(hide = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    extra: Vec<String>,
}

impl Cli {
    /// Parse hook arguments without ever failing.
    ///
    /// Anything clap rejects or reinterprets (`--`, an empty list after it)
    /// falls back to the raw argument list.
    fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        let first = args.get(1).cloned();

        match Cli::try_parse_from(&args) {
            Ok(cli) if cli.exit_code == first => cli,
            parsed => {
                if let Err(e) = parsed {
                    debug!(error = %e, "using raw hook arguments");
                }
                Self {
                    exit_code: first,
                    extra: args.iter().skip(2).cloned().collect(),
                }
            }
        }
    }
}

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Warning: {}", e);
    }

    let cli = Cli::from_args(std::env::args());
    let dispatcher = NativeDispatcher::default();

    let stdout = io::stdout();
    run(&cli, &dispatcher, &mut stdout.lock());
}

/// Diagnostics go to stderr so stdout only carries the notification text
fn init_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}

fn run<D, W>(cli: &Cli, dispatcher: &D, out: &mut W)
where
    D: Dispatcher + ?Sized,
    W: Write + ?Sized,
{
    if !cli.extra.is_empty() {
        debug!(extra = ?cli.extra, "ignoring extra hook arguments");
    }

    let config = NotificationConfig::from_exit_code(cli.exit_code.as_deref());
    debug!(title = %config.title, message = %config.message, "sending notification");

    notifications::notify(&config, dispatcher, out);
}
