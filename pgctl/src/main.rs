use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pgctl_core::cli::logs::{ColorChoice, LogsCmd, PrettyArgs, run_logs};
use pgctl_core::conf::{PrettySettings, load_pretty_settings, print_config_error};
use pgctl_core::logging::init_logging;
use std::time::Duration;

/// How long to wait for tasks still blocked on stdin once the pipeline is done.
const RUNTIME_SHUTDOWN_TIMEOUT: Duration = Duration::from_millis(100);

#[derive(Parser, Debug)]
#[command(
    name = "kubectl-pgctl",
    version,
    about = "kubectl plugin for PostgreSQL clusters managed by the operator"
)]
struct Cli {
    /// When to color the output
    #[arg(long, global = true, value_enum)]
    color: Option<ColorChoice>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log tooling
    Logs {
        #[command(subcommand)]
        cmd: LogsCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging();

    match cli.command {
        Command::Logs {
            cmd: LogsCmd::Pretty(args),
        } => {
            let settings = match resolve_settings(&args, cli.color) {
                Ok(settings) => settings,
                Err(err) => {
                    print_config_error(err);
                    std::process::exit(1);
                }
            };

            if let Err(e) = run_pretty(&settings) {
                eprintln!("logs error: {e:#}");
                std::process::exit(1);
            }
        }
    }
}

fn resolve_settings(
    args: &PrettyArgs,
    color: Option<ColorChoice>,
) -> Result<PrettySettings, pgctl_core::conf::ConfigError> {
    load_pretty_settings(args.config.as_deref(), args.overrides(color))
}

fn run_pretty(settings: &PrettySettings) -> Result<()> {
    use tokio::runtime::Builder;

    let rt = Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build Tokio runtime")?;

    let summary = rt.block_on(run_logs(settings));

    // stdin is read on a blocking thread that may never return; don't wait for it.
    rt.shutdown_timeout(RUNTIME_SHUTDOWN_TIMEOUT);

    let summary = summary?;
    tracing::debug!(
        lines = summary.lines_read,
        rejected = summary.lines_rejected,
        printed = summary.records_printed,
        "logs pretty done"
    );
    Ok(())
}
