use std::io;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system for the plugin's own diagnostics.
///
/// Subcommands such as `logs pretty` own stdout, so everything the tool logs
/// about itself goes to stderr:
/// - Uses `RUST_LOG` for filtering (defaults to "warn" if not set)
/// - Human readable format, colored only when stderr is a terminal
pub fn init_normal_logging() {
    use std::io::IsTerminal;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

pub fn init_logging() {
    // If tokio-console is enabled, DO NOT install the normal subscriber
    if std::env::var("TOKIO_CONSOLE").is_ok() {
        init_console_logging();
    } else {
        init_normal_logging();
    }
}

fn init_console_logging() {
    console_subscriber::init();
}
