mod parse;
mod pipeline;

use crate::cli::logs::{LogLevel, LogRecord};

pub use crate::testing::{BrokenWriter, SharedBuffer};

//-----------------------------------------------------------------------------
// Test helpers
//-----------------------------------------------------------------------------

pub fn record(ts: &str, pod: &str, level: LogLevel, msg: &str) -> LogRecord {
    LogRecord {
        level,
        msg: msg.to_string(),
        logger: "instance-manager".to_string(),
        ts: ts.to_string(),
        logging_pod: pod.to_string(),
        ..LogRecord::default()
    }
}

pub fn json_line(ts: &str, pod: &str, level: &str, logger: &str, msg: &str) -> String {
    format!(
        r#"{{"level":"{level}","ts":"{ts}","logger":"{logger}","msg":"{msg}","logging_pod":"{pod}"}}"#
    )
}
