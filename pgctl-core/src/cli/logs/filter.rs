use crate::cli::logs::types::{LogLevel, LogRecord};
use std::collections::HashSet;

/// User-selected filters, fixed before the pipeline starts.
///
/// Empty sets and a missing minimum level mean "everything".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFilter {
    pub loggers: HashSet<String>,
    pub pods: HashSet<String>,
    pub min_level: Option<LogLevel>,
}

impl RecordFilter {
    pub fn new(
        loggers: impl IntoIterator<Item = String>,
        pods: impl IntoIterator<Item = String>,
        min_level: Option<LogLevel>,
    ) -> Self {
        Self {
            loggers: loggers.into_iter().filter(|s| !s.is_empty()).collect(),
            pods: pods.into_iter().filter(|s| !s.is_empty()).collect(),
            min_level,
        }
    }

    pub fn accepts(&self, record: &LogRecord) -> bool {
        if !self.loggers.is_empty() && !self.loggers.contains(&record.logger) {
            return false;
        }

        if !self.pods.is_empty() && !self.pods.contains(&record.logging_pod) {
            return false;
        }

        match self.min_level {
            Some(min) => record.level >= min,
            None => true,
        }
    }
}
