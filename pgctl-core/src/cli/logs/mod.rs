//! Log Prettifier
//!
//! Reads the JSON lines written by the operator and its instance managers (as
//! produced by `kubectl logs`) from standard input and prints them in a form a
//! human can follow.
//!
//! Lines coming from several pods are interleaved in the input, so the tool
//! collects them in small groups and sorts each group by timestamp and pod
//! before printing it. A group is closed when it is full or when a second has
//! passed since the previous one was printed. Sorting only happens inside a
//! group: a record that arrives late enough to fall into the next group is
//! printed after it, even if its timestamp is older. This keeps memory and
//! latency bounded on an endless stream, at the price of only approximate
//! global ordering. Consecutive groups are separated by a `---` line.
//!
//! The overall data processing architecture is:
//!
//! stdin
//! Decoder      (line -> LogRecord, filtering)
//! Grouper      (LogRecord -> Batch)
//! Printer      (sort Batch, render)
//! stdout
//!
//! The three stages are joined by single-slot channels and share one
//! cancellation signal. Decoding and grouping are runtime tasks; the printer
//! writes to the terminal from a blocking thread.
//!

mod args;
mod color;
mod constants;
mod decode;
mod filter;
mod group;
mod line_reader;
mod parse;
mod pretty;
mod run;
mod shutdown;
mod types;
mod write;

#[cfg(test)]
mod tests;

pub use args::{LogsCmd, PrettyArgs};
pub use color::{ColorChoice, Colorizer};
pub use constants::{DEFAULT_MAX_LINE_SIZE, DEFAULT_SORTING_GROUP_SIZE, FLUSH_INTERVAL};
pub use decode::{DecodeStats, Decoder};
pub use filter::RecordFilter;
pub use group::{GroupStats, Grouper};
pub use line_reader::{LineError, LineReader};
pub use parse::parse_record;
pub use pretty::render_pretty;
pub use run::{PipelineSummary, PrettyOptions, run_logs, run_pretty};
pub use shutdown::{ShutdownSignal, ShutdownTrigger, shutdown_channel};
pub use types::{Batch, EmbeddedRecord, LogLevel, LogRecord, UnknownLogLevel};
pub use write::{PrintStats, Printer, compare_records, sort_batch};
