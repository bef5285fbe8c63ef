use crate::cli::logs::UnknownLogLevel;
use miette::{Diagnostic, Report};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO / Parsing
    //-------------------------------------------------------------------------
    #[error("failed to read config file {path}: {source}")]
    #[diagnostic(code(pgctl::config::read))]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration file: {path}\n\n{source}")]
    #[diagnostic(code(pgctl::config::parse))]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    //-------------------------------------------------------------------------
    // logs pretty
    //-------------------------------------------------------------------------
    #[error("invalid minimum log level")]
    #[diagnostic(code(pgctl::logs::min_level))]
    InvalidMinLevel {
        #[source]
        source: UnknownLogLevel,
    },

    #[error("invalid sorting group size {size}: must be at least 1")]
    #[diagnostic(code(pgctl::logs::sorting_group_size))]
    InvalidGroupSize { size: usize },

    #[error("invalid maximum line size {size}: must be at least 1 byte")]
    #[diagnostic(code(pgctl::logs::max_line_size))]
    InvalidMaxLineSize { size: usize },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

pub fn print_config_error(err: ConfigError) {
    let hint = config_error_hint(&err);
    eprintln!();
    eprintln!("{:?}", Report::new(err));
    if let Some(hint) = hint {
        eprintln!();
        eprintln!("{}", hint);
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::InvalidMinLevel { .. } => Some(
            "Use one of error, warning, info, debug or trace, or leave it empty\n\
             to show every level.\n\
             \n\
             Example:\n\
             \n\
             kubectl pgctl logs pretty --min-level warning",
        ),

        ConfigError::InvalidGroupSize { .. } => Some(
            "The sorting group size is the number of records sorted together.\n\
             \n\
             Example:\n\
             \n\
             [logs.pretty]\n\
             sorting_group_size = 1000",
        ),

        ConfigError::InvalidMaxLineSize { .. } => Some(
            "The maximum line size must fit the longest expected log line.\n\
             \n\
             Example:\n\
             \n\
             [logs.pretty]\n\
             max_line_size = 16777216",
        ),

        _ => None,
    }
}
