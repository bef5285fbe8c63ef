use crate::cli::logs::{
    ColorChoice, DEFAULT_MAX_LINE_SIZE, DEFAULT_SORTING_GROUP_SIZE, LogLevel,
};
use crate::conf::{ConfigError, PrettySection, load_pretty_settings, resolve_pretty_settings};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("failed to write temp file");
    file
}

#[test]
fn defaults_without_file_or_flags() {
    let settings = load_pretty_settings(None, PrettySection::default()).unwrap();

    assert_eq!(settings.sorting_group_size, DEFAULT_SORTING_GROUP_SIZE);
    assert_eq!(settings.max_line_size, DEFAULT_MAX_LINE_SIZE);
    assert_eq!(settings.verbosity, 0);
    assert_eq!(settings.color, ColorChoice::Auto);
    assert!(settings.filter.loggers.is_empty());
    assert!(settings.filter.pods.is_empty());
    assert_eq!(settings.filter.min_level, None);
}

#[test]
fn file_values_are_used() {
    let file = write_config(
        r#"
[logs.pretty]
sorting_group_size = 50
loggers = ["postgres", "wal-archive"]
pods = ["cluster-example-1"]
min_level = "warning"
verbosity = 2
color = "never"
max_line_size = 2048
"#,
    );

    let settings = load_pretty_settings(Some(file.path()), PrettySection::default()).unwrap();

    assert_eq!(settings.sorting_group_size, 50);
    assert_eq!(settings.verbosity, 2);
    assert_eq!(settings.color, ColorChoice::Never);
    assert_eq!(settings.max_line_size, 2048);
    assert_eq!(settings.filter.min_level, Some(LogLevel::Warning));
    assert!(settings.filter.loggers.contains("postgres"));
    assert!(settings.filter.loggers.contains("wal-archive"));
    assert!(settings.filter.pods.contains("cluster-example-1"));
}

#[test]
fn command_line_overrides_file() {
    let file = write_config(
        r#"
[logs.pretty]
sorting_group_size = 50
min_level = "warning"
pods = ["cluster-example-1"]
"#,
    );

    let overrides = PrettySection {
        sorting_group_size: Some(10),
        min_level: Some(String::new()),
        ..PrettySection::default()
    };

    let settings = load_pretty_settings(Some(file.path()), overrides).unwrap();

    assert_eq!(settings.sorting_group_size, 10);
    // An explicit empty level on the command line disables the file's threshold.
    assert_eq!(settings.filter.min_level, None);
    assert!(settings.filter.pods.contains("cluster-example-1"));
}

#[test]
fn unknown_min_level_is_rejected() {
    let err = resolve_pretty_settings(PrettySection {
        min_level: Some("loud".to_string()),
        ..PrettySection::default()
    })
    .unwrap_err();

    match err {
        ConfigError::InvalidMinLevel { source } => assert_eq!(source.0, "loud"),
        other => panic!("expected InvalidMinLevel, got {other:?}"),
    }
}

#[test]
fn zero_sizes_are_rejected() {
    let err = resolve_pretty_settings(PrettySection {
        sorting_group_size: Some(0),
        ..PrettySection::default()
    })
    .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidGroupSize { size: 0 }));

    let err = resolve_pretty_settings(PrettySection {
        max_line_size: Some(0),
        ..PrettySection::default()
    })
    .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidMaxLineSize { size: 0 }));
}

#[test]
fn huge_group_size_is_accepted() {
    let settings = resolve_pretty_settings(PrettySection {
        sorting_group_size: Some(100_000_000_000_000_000),
        ..PrettySection::default()
    })
    .unwrap();

    assert_eq!(settings.sorting_group_size, 100_000_000_000_000_000);
    // Building the stage must not try to reserve the whole group up front.
    let _ = crate::cli::logs::Grouper::new(settings.sorting_group_size);
}

#[test]
fn unknown_keys_are_rejected() {
    let file = write_config(
        r#"
[logs.pretty]
sorting_window = 50
"#,
    );

    let err = load_pretty_settings(Some(file.path()), PrettySection::default()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let err = load_pretty_settings(Some(&path), PrettySection::default()).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFile { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn hints_exist_for_logs_settings() {
    let err = ConfigError::InvalidGroupSize { size: 0 };
    assert!(crate::conf::config_error_hint(&err).is_some());
}
