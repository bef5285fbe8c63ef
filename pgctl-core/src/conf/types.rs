use crate::cli::logs::{ColorChoice, RecordFilter};
use serde::Deserialize;

/// On-disk configuration file.
///
/// ```toml
/// [logs.pretty]
/// sorting_group_size = 500
/// loggers = ["instance-manager"]
/// min_level = "info"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub logs: LogsSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogsSection {
    #[serde(default)]
    pub pretty: PrettySection,
}

/// Unvalidated `logs pretty` settings. Used both for the `[logs.pretty]` table
/// and for the values given on the command line; `None` means "not set here".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrettySection {
    pub sorting_group_size: Option<usize>,
    pub loggers: Option<Vec<String>>,
    pub pods: Option<Vec<String>>,
    pub min_level: Option<String>,
    pub verbosity: Option<u8>,
    pub color: Option<ColorChoice>,
    pub max_line_size: Option<usize>,
}

impl PrettySection {
    /// Layer `self` over `base`: values set in `self` win.
    pub fn or(self, base: PrettySection) -> PrettySection {
        PrettySection {
            sorting_group_size: self.sorting_group_size.or(base.sorting_group_size),
            loggers: self.loggers.or(base.loggers),
            pods: self.pods.or(base.pods),
            min_level: self.min_level.or(base.min_level),
            verbosity: self.verbosity.or(base.verbosity),
            color: self.color.or(base.color),
            max_line_size: self.max_line_size.or(base.max_line_size),
        }
    }
}

/// Validated `logs pretty` settings.
#[derive(Debug, Clone, PartialEq)]
pub struct PrettySettings {
    pub filter: RecordFilter,
    pub sorting_group_size: usize,
    pub verbosity: u8,
    pub max_line_size: usize,
    pub color: ColorChoice,
}
