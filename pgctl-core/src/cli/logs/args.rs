use crate::cli::logs::color::ColorChoice;
use crate::conf::PrettySection;
use clap::{ArgAction, Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum LogsCmd {
    /// Read operator logs from standard input and pretty-print them
    Pretty(PrettyArgs),
}

#[derive(Args, Debug, Default, Clone)]
pub struct PrettyArgs {
    /// The maximum size of the window where logs are collected for sorting
    /// [default: 1000]
    #[arg(long)]
    pub sorting_group_size: Option<usize>,

    /// The list of loggers to receive. Defaults to all.
    #[arg(long, value_delimiter = ',')]
    pub loggers: Vec<String>,

    /// The list of pods to receive from. Defaults to all.
    #[arg(long, value_delimiter = ',')]
    pub pods: Vec<String>,

    /// Hide messages less important than this level.
    /// Should be empty or one of error, warning, info, debug, or trace.
    #[arg(long)]
    pub min_level: Option<String>,

    /// The logs verbosity level. More verbose means more information will be printed
    #[arg(short, long, action = ArgAction::Count)]
    pub verbosity: u8,

    /// Longest accepted input line, in bytes [default: 16 MiB]
    #[arg(long)]
    pub max_line_size: Option<usize>,

    /// Read default settings from the [logs.pretty] table of this TOML file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl PrettyArgs {
    /// The values actually given on the command line.
    pub fn overrides(&self, color: Option<ColorChoice>) -> PrettySection {
        PrettySection {
            sorting_group_size: self.sorting_group_size,
            loggers: (!self.loggers.is_empty()).then(|| self.loggers.clone()),
            pods: (!self.pods.is_empty()).then(|| self.pods.clone()),
            min_level: self.min_level.clone(),
            verbosity: (self.verbosity > 0).then_some(self.verbosity),
            color,
            max_line_size: self.max_line_size,
        }
    }
}
