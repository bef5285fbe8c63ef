use crate::cli::logs::constants::{DEFAULT_SORTING_GROUP_SIZE, FLUSH_INTERVAL};
use crate::cli::logs::shutdown::ShutdownSignal;
use crate::cli::logs::types::{Batch, LogRecord};
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupStats {
    pub batches_emitted: u64,
    pub records_grouped: u64,
}

/// Turns the record stream into a stream of bounded groups.
///
/// A group is emitted when it reaches `group_size` records, or when
/// [`FLUSH_INTERVAL`] has passed since the previous flush, whichever comes
/// first. Groups leave in arrival order and are never merged or split.
pub struct Grouper {
    group_size: usize,
    buffer: Batch,
    stats: GroupStats,
}

impl Grouper {
    pub fn new(group_size: usize) -> Self {
        let group_size = group_size.max(1);
        Self {
            group_size,
            // Larger groups grow on demand.
            buffer: Vec::with_capacity(group_size.min(DEFAULT_SORTING_GROUP_SIZE)),
            stats: GroupStats::default(),
        }
    }

    pub async fn run(
        mut self,
        mut rx: mpsc::Receiver<LogRecord>,
        tx: mpsc::Sender<Batch>,
        mut shutdown: ShutdownSignal,
    ) -> GroupStats {
        let mut ticker = interval_at(Instant::now() + FLUSH_INTERVAL, FLUSH_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::debug!(group_size = self.group_size, "grouper started");

        let cancelled = loop {
            tokio::select! {
                biased;
                _ = shutdown.triggered() => break true,

                record = rx.recv() => {
                    let Some(record) = record else {
                        break false;
                    };
                    self.buffer.push(record);
                    if self.buffer.len() >= self.group_size {
                        if !self.flush(&tx, &mut shutdown).await {
                            break true;
                        }
                        ticker.reset();
                    }
                }

                _ = ticker.tick() => {
                    if !self.buffer.is_empty() {
                        if !self.flush(&tx, &mut shutdown).await {
                            break true;
                        }
                        ticker.reset();
                    }
                }
            }
        };

        if cancelled {
            // Hand over what is left only if the printer can take it right away.
            if !self.buffer.is_empty() && tx.try_send(self.take_batch()).is_ok() {
                self.stats.batches_emitted += 1;
            }
        } else {
            self.flush(&tx, &mut shutdown).await;
        }

        tracing::debug!(stats = ?self.stats, "grouper finished");
        self.stats
    }

    /// Send the buffered records downstream. Returns `false` when the
    /// pipeline is shutting down or the printer has gone away.
    async fn flush(&mut self, tx: &mpsc::Sender<Batch>, shutdown: &mut ShutdownSignal) -> bool {
        if self.buffer.is_empty() {
            return true;
        }

        let batch = self.take_batch();
        tracing::trace!(records = batch.len(), "flushing group");

        let sent = tokio::select! {
            biased;
            _ = shutdown.triggered() => return false,
            sent = tx.send(batch) => sent,
        };

        if sent.is_err() {
            return false;
        }
        self.stats.batches_emitted += 1;
        true
    }

    // The emitted batch is an independent copy; the buffer keeps its capacity.
    fn take_batch(&mut self) -> Batch {
        let batch: Batch = self.buffer.drain(..).collect();
        self.stats.records_grouped += batch.len() as u64;
        batch
    }
}
