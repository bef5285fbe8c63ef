use crate::cli::logs::color::Colorizer;
use crate::cli::logs::constants::{DEFAULT_MAX_LINE_SIZE, DEFAULT_SORTING_GROUP_SIZE};
use crate::cli::logs::decode::{DecodeStats, Decoder};
use crate::cli::logs::filter::RecordFilter;
use crate::cli::logs::group::{GroupStats, Grouper};
use crate::cli::logs::shutdown::{ShutdownSignal, shutdown_channel};
use crate::cli::logs::write::{PrintStats, Printer};
use crate::conf::PrettySettings;
use anyhow::{Context, Result};
use std::io::{self, BufWriter, IsTerminal, Write};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::mpsc;

/// Both stage links hand over one item at a time.
const STAGE_CHANNEL_CAPACITY: usize = 1;

/// Everything the pipeline needs, resolved before it starts.
#[derive(Debug, Clone)]
pub struct PrettyOptions {
    pub filter: RecordFilter,
    pub sorting_group_size: usize,
    pub verbosity: u8,
    pub max_line_size: usize,
    /// Used for the rendered records.
    pub output_colors: Colorizer,
    /// Used for malformed-line diagnostics.
    pub diagnostic_colors: Colorizer,
}

impl Default for PrettyOptions {
    fn default() -> Self {
        Self {
            filter: RecordFilter::default(),
            sorting_group_size: DEFAULT_SORTING_GROUP_SIZE,
            verbosity: 0,
            max_line_size: DEFAULT_MAX_LINE_SIZE,
            output_colors: Colorizer::disabled(),
            diagnostic_colors: Colorizer::disabled(),
        }
    }
}

impl PrettyOptions {
    /// Resolve colors against the process' stdout and stderr.
    pub fn from_settings(settings: &PrettySettings) -> Self {
        Self {
            filter: settings.filter.clone(),
            sorting_group_size: settings.sorting_group_size,
            verbosity: settings.verbosity,
            max_line_size: settings.max_line_size,
            output_colors: settings.color.colorizer(io::stdout().is_terminal()),
            diagnostic_colors: settings.color.colorizer(io::stderr().is_terminal()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineSummary {
    pub lines_read: u64,
    pub lines_rejected: u64,
    pub records_filtered: u64,
    pub records_forwarded: u64,
    pub batches_emitted: u64,
    pub records_printed: u64,
    pub render_failures: u64,
}

impl PipelineSummary {
    fn new(decode: DecodeStats, group: GroupStats, print: PrintStats) -> Self {
        Self {
            lines_read: decode.lines_read,
            lines_rejected: decode.lines_rejected,
            records_filtered: decode.records_filtered,
            records_forwarded: decode.records_forwarded,
            batches_emitted: group.batches_emitted,
            records_printed: print.records_printed,
            render_failures: print.render_failures,
        }
    }
}

/// Run decode -> group -> print over the given streams until the input ends
/// or `shutdown` fires.
pub async fn run_pretty<R, W, E>(
    input: R,
    output: W,
    diagnostics: E,
    options: PrettyOptions,
    shutdown: ShutdownSignal,
) -> Result<PipelineSummary>
where
    R: AsyncRead + Unpin + Send + 'static,
    W: Write + Send + 'static,
    E: AsyncWrite + Unpin + Send + 'static,
{
    let (record_tx, record_rx) = mpsc::channel(STAGE_CHANNEL_CAPACITY);
    let (batch_tx, batch_rx) = mpsc::channel(STAGE_CHANNEL_CAPACITY);

    let decoder = Decoder {
        filter: options.filter,
        max_line_size: options.max_line_size,
        diagnostics,
        colors: options.diagnostic_colors,
    };
    let grouper = Grouper::new(options.sorting_group_size);
    let printer = Printer {
        writer: output,
        verbosity: options.verbosity,
        colors: options.output_colors,
    };

    let decoder = tokio::spawn(decoder.run(input, record_tx, shutdown.clone()));
    let grouper = tokio::spawn(grouper.run(record_rx, batch_tx, shutdown.clone()));
    let printer = tokio::task::spawn_blocking(move || printer.run(batch_rx, shutdown));

    let (decoded, grouped, printed) = tokio::join!(decoder, grouper, printer);

    let summary = PipelineSummary::new(
        decoded.context("decoder task failed")?,
        grouped.context("grouper task failed")?,
        printed.context("printer task failed")?,
    );

    tracing::debug!(?summary, "log pipeline finished");
    Ok(summary)
}

/// `logs pretty`: stdin -> stdout, diagnostics on stderr, stopped by Ctrl-C.
///
/// stdout is written from the printer's blocking thread, so it goes through a
/// plain buffered `std::io` writer.
pub async fn run_logs(settings: &PrettySettings) -> Result<PipelineSummary> {
    let options = PrettyOptions::from_settings(settings);

    let (trigger, shutdown) = shutdown_channel();
    let interrupt = tokio::spawn(async move {
        if let Err(e) = trigger.trigger_on_ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for interrupts");
        }
    });

    let result = run_pretty(
        tokio::io::stdin(),
        BufWriter::new(io::stdout()),
        tokio::io::stderr(),
        options,
        shutdown,
    )
    .await;

    interrupt.abort();
    result
}
