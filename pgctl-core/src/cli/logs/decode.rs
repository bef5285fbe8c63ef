use crate::cli::logs::color::Colorizer;
use crate::cli::logs::filter::RecordFilter;
use crate::cli::logs::line_reader::{LineError, LineReader};
use crate::cli::logs::parse::parse_record;
use crate::cli::logs::shutdown::ShutdownSignal;
use crate::cli::logs::types::LogRecord;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeStats {
    pub lines_read: u64,
    pub lines_rejected: u64,
    pub records_filtered: u64,
    pub records_forwarded: u64,
}

pub struct Decoder<E> {
    pub filter: RecordFilter,
    pub max_line_size: usize,
    pub diagnostics: E,
    pub colors: Colorizer,
}

impl<E: AsyncWrite + Unpin> Decoder<E> {
    /// Decode `input` line by line and forward the accepted records.
    ///
    /// Malformed lines are reported on the diagnostics stream and skipped. The
    /// channel is closed (by dropping `tx`) on end of input or cancellation.
    pub async fn run<R>(
        mut self,
        input: R,
        tx: mpsc::Sender<LogRecord>,
        mut shutdown: ShutdownSignal,
    ) -> DecodeStats
    where
        R: AsyncRead + Unpin,
    {
        let mut reader = LineReader::new(BufReader::new(input), self.max_line_size);
        let mut stats = DecodeStats::default();

        tracing::debug!("decoder started");

        loop {
            if shutdown.is_triggered() {
                break;
            }

            let line = tokio::select! {
                biased;
                _ = shutdown.triggered() => break,
                line = reader.next_line() => line,
            };

            let record = match line {
                Ok(None) => break,
                Ok(Some(line)) => {
                    stats.lines_read += 1;
                    if line.trim_ascii().is_empty() {
                        continue;
                    }
                    match parse_record(line) {
                        Ok(record) => record,
                        Err(err) => {
                            stats.lines_rejected += 1;
                            let raw = String::from_utf8_lossy(line).into_owned();
                            self.report(&format!("JSON syntax error ({err})"), Some(&raw))
                                .await;
                            continue;
                        }
                    }
                }
                Err(err @ LineError::TooLong { .. }) => {
                    stats.lines_read += 1;
                    stats.lines_rejected += 1;
                    self.report(&err.to_string(), None).await;
                    continue;
                }
                Err(LineError::Io(err)) => {
                    tracing::error!(error = %err, "failed to read log input");
                    break;
                }
            };

            if !self.filter.accepts(&record) {
                stats.records_filtered += 1;
                continue;
            }

            let sent = tokio::select! {
                biased;
                _ = shutdown.triggered() => break,
                sent = tx.send(record) => sent,
            };

            if sent.is_err() {
                // Downstream is gone.
                break;
            }
            stats.records_forwarded += 1;
        }

        tracing::debug!(?stats, "decoder finished");
        stats
    }

    async fn report(&mut self, message: &str, raw_line: Option<&str>) {
        let message = self.colors.error(message);
        let line = match raw_line {
            Some(raw) => format!("{message} {raw}\n"),
            None => format!("{message}\n"),
        };
        if let Err(err) = self.diagnostics.write_all(line.as_bytes()).await {
            tracing::warn!(error = %err, "failed to write decode diagnostic");
            return;
        }
        let _ = self.diagnostics.flush().await;
    }
}
