use crate::cli::logs::color::Colorizer;
use crate::cli::logs::constants::GROUP_SEPARATOR;
use crate::cli::logs::pretty::render_pretty;
use crate::cli::logs::shutdown::ShutdownSignal;
use crate::cli::logs::types::{Batch, LogRecord};
use std::cmp::Ordering;
use std::io::Write;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrintStats {
    pub batches_printed: u64,
    pub records_printed: u64,
    pub render_failures: u64,
}

/// Order by timestamp, then by pod.
///
/// Timestamps are fixed-width ISO-8601 strings, so comparing them as strings
/// orders them in time.
pub fn compare_records(a: &LogRecord, b: &LogRecord) -> Ordering {
    a.ts.cmp(&b.ts)
        .then_with(|| a.logging_pod.cmp(&b.logging_pod))
}

/// Sort one group in place. The sort is stable.
///
/// Only records inside the same group are reordered: two records that landed
/// in different groups keep the group order even if their timestamps
/// disagree.
pub fn sort_batch(batch: &mut Batch) {
    batch.sort_by(compare_records);
}

pub struct Printer<W> {
    pub writer: W,
    pub verbosity: u8,
    pub colors: Colorizer,
}

impl<W: Write> Printer<W> {
    /// Print batches until the grouper closes the channel.
    ///
    /// Writing to the terminal blocks, so this runs on a blocking thread
    /// rather than inside a runtime task. A batch received after `shutdown`
    /// fired is dropped unprinted.
    pub fn run(mut self, mut rx: mpsc::Receiver<Batch>, shutdown: ShutdownSignal) -> PrintStats {
        let mut stats = PrintStats::default();

        tracing::debug!(verbosity = self.verbosity, "printer started");

        while let Some(mut batch) = rx.blocking_recv() {
            if shutdown.is_triggered() {
                break;
            }

            sort_batch(&mut batch);

            if stats.batches_printed > 0 {
                if let Err(err) = writeln!(self.writer, "{GROUP_SEPARATOR}") {
                    tracing::error!(error = %err, "failed to print group separator");
                }
            }

            for record in &batch {
                match render_pretty(&mut self.writer, record, self.verbosity, &self.colors) {
                    Ok(()) => stats.records_printed += 1,
                    Err(err) => {
                        stats.render_failures += 1;
                        tracing::error!(
                            error = %err,
                            pod = %record.logging_pod,
                            ts = %record.ts,
                            "failed to print log record"
                        );
                    }
                }
            }

            if let Err(err) = self.writer.flush() {
                tracing::error!(error = %err, "failed to flush output");
            }
            stats.batches_printed += 1;
        }

        tracing::debug!(?stats, "printer finished");
        stats
    }
}
