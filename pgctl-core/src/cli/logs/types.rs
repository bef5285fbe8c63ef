use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Severity of a log record.
///
/// The ordering (`Trace < Debug < Info < Warning < Error`) is only used to apply
/// the minimum-level filter. Records are never sorted by level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level '{0}', expected one of: error, warning, info, debug, trace")]
pub struct UnknownLogLevel(pub String);

impl LogLevel {
    #[cfg(test)]
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        }
    }

    pub fn as_upper_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }

    /// Parse a `--min-level` value. An empty value disables level filtering.
    pub fn parse_threshold(value: &str) -> Result<Option<LogLevel>, UnknownLogLevel> {
        if value.trim().is_empty() {
            return Ok(None);
        }
        value.parse().map(Some)
    }

    /// Map a PostgreSQL `error_severity` token onto our scale.
    pub fn from_postgres_severity(severity: &str) -> LogLevel {
        match severity {
            s if s.starts_with("DEBUG") => LogLevel::Trace,
            "INFO" | "NOTICE" | "LOG" => LogLevel::Info,
            "WARNING" => LogLevel::Warning,
            "ERROR" | "FATAL" | "PANIC" => LogLevel::Error,
            _ => LogLevel::Info,
        }
    }
}

impl FromStr for LogLevel {
    type Err = UnknownLogLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            _ => Err(UnknownLogLevel(s.to_string())),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Records coming from the wire are decoded leniently: a level we don't know
// must not cost the user the whole line.
impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.and_then(|s| s.parse().ok()).unwrap_or_default())
    }
}

// `null` in a string field reads as an empty string.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A PostgreSQL log entry wrapped by the instance manager.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EmbeddedRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub error_severity: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// One decoded log line.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LogRecord {
    #[serde(default)]
    pub level: LogLevel,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub msg: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub logger: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ts: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub logging_pod: String,
    #[serde(default)]
    pub record: Option<EmbeddedRecord>,

    /// Fields not modelled above, filled in by the decoder.
    #[serde(skip)]
    pub additional_fields: Map<String, Value>,
}

/// Top-level field names captured by [`LogRecord`].
pub const KNOWN_FIELDS: &[&str] = &["level", "msg", "logger", "ts", "logging_pod", "record"];

/// Message used by the instance manager when the line wraps a PostgreSQL entry.
pub const EMBEDDED_RECORD_MSG: &str = "record";

impl LogRecord {
    /// Promote the embedded PostgreSQL entry, if any, to the top level.
    ///
    /// Calling this twice is a no-op: after the first call `msg` holds the
    /// embedded message.
    pub fn normalize(&mut self) {
        if self.msg != EMBEDDED_RECORD_MSG {
            return;
        }
        let Some(embedded) = &self.record else {
            return;
        };

        self.level = LogLevel::from_postgres_severity(&embedded.error_severity);
        self.msg = embedded.message.clone();
    }
}

/// Records handed from the grouper to the printer as one sorting unit.
pub type Batch = Vec<LogRecord>;
