use crate::cli::logs::{
    DEFAULT_MAX_LINE_SIZE, DEFAULT_SORTING_GROUP_SIZE, LogLevel, RecordFilter,
};
use crate::conf::error::ConfigError;
use crate::conf::types::{ConfigFile, PrettySection, PrettySettings};
use std::fs;
use std::path::Path;

pub fn load_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))
}

/// Build the `logs pretty` settings from the command line values layered over
/// the optional config file, layered over the built-in defaults.
pub fn load_pretty_settings(
    path: Option<&Path>,
    overrides: PrettySection,
) -> Result<PrettySettings, ConfigError> {
    let file = match path {
        Some(path) => {
            let file = load_config_file(path)?;
            tracing::debug!(path = %path.display(), "loaded config file");
            file
        }
        None => ConfigFile::default(),
    };

    resolve_pretty_settings(overrides.or(file.logs.pretty))
}

pub fn resolve_pretty_settings(section: PrettySection) -> Result<PrettySettings, ConfigError> {
    let sorting_group_size = section
        .sorting_group_size
        .unwrap_or(DEFAULT_SORTING_GROUP_SIZE);
    if sorting_group_size == 0 {
        return Err(ConfigError::InvalidGroupSize {
            size: sorting_group_size,
        });
    }

    let max_line_size = section.max_line_size.unwrap_or(DEFAULT_MAX_LINE_SIZE);
    if max_line_size == 0 {
        return Err(ConfigError::InvalidMaxLineSize {
            size: max_line_size,
        });
    }

    let min_level = match section.min_level.as_deref() {
        Some(level) => LogLevel::parse_threshold(level)
            .map_err(|source| ConfigError::InvalidMinLevel { source })?,
        None => None,
    };

    let filter = RecordFilter::new(
        section.loggers.unwrap_or_default(),
        section.pods.unwrap_or_default(),
        min_level,
    );

    Ok(PrettySettings {
        filter,
        sorting_group_size,
        verbosity: section.verbosity.unwrap_or(0),
        max_line_size,
        color: section.color.unwrap_or_default(),
    })
}
