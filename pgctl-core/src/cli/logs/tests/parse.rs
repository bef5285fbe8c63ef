use crate::cli::logs::{LogLevel, parse_record};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn parses_known_fields_and_keeps_extras() {
    let line = br#"{"level":"info","ts":"2024-05-02T10:11:12.345678Z","logger":"wal-archive","msg":"Archived WAL file","logging_pod":"cluster-example-1","walName":"000000010000000000000003","controller":"cluster"}"#;

    let record = parse_record(line).unwrap();

    assert_eq!(record.level, LogLevel::Info);
    assert_eq!(record.ts, "2024-05-02T10:11:12.345678Z");
    assert_eq!(record.logger, "wal-archive");
    assert_eq!(record.msg, "Archived WAL file");
    assert_eq!(record.logging_pod, "cluster-example-1");
    assert_eq!(record.record, None);

    assert_eq!(record.additional_fields.len(), 2);
    assert_eq!(
        record.additional_fields.get("walName"),
        Some(&json!("000000010000000000000003"))
    );
    assert_eq!(record.additional_fields.get("controller"), Some(&json!("cluster")));
    assert!(!record.additional_fields.contains_key("msg"));
}

#[test]
fn embedded_record_replaces_level_and_message() {
    let line = br#"{"level":"info","ts":"T","logger":"postgres","msg":"record","logging_pod":"p","record":{"log_time":"2024-05-02 10:11:12.345 UTC","error_severity":"WARNING","message":"checkpoints are occurring too frequently"}}"#;

    let mut record = parse_record(line).unwrap();

    assert_eq!(record.level, LogLevel::Warning);
    assert_eq!(record.msg, "checkpoints are occurring too frequently");
    assert!(!record.additional_fields.contains_key("record"));

    let embedded = record.record.clone().unwrap();
    assert_eq!(embedded.error_severity, "WARNING");
    assert_eq!(
        embedded.fields.get("log_time"),
        Some(&json!("2024-05-02 10:11:12.345 UTC"))
    );

    // Normalizing again changes nothing.
    let before = record.clone();
    record.normalize();
    assert_eq!(record, before);
}

#[test]
fn postgres_severities_map_onto_log_levels() {
    let cases = [
        ("DEBUG1", LogLevel::Trace),
        ("DEBUG5", LogLevel::Trace),
        ("INFO", LogLevel::Info),
        ("NOTICE", LogLevel::Info),
        ("LOG", LogLevel::Info),
        ("WARNING", LogLevel::Warning),
        ("ERROR", LogLevel::Error),
        ("FATAL", LogLevel::Error),
        ("PANIC", LogLevel::Error),
        ("STATEMENT", LogLevel::Info),
        ("", LogLevel::Info),
    ];

    for (severity, expected) in cases {
        assert_eq!(
            LogLevel::from_postgres_severity(severity),
            expected,
            "severity {severity}"
        );
    }
}

#[test]
fn record_message_without_embedded_entry_is_left_alone() {
    let line = br#"{"level":"debug","msg":"record","logger":"x","ts":"T","logging_pod":"p"}"#;
    let record = parse_record(line).unwrap();
    assert_eq!(record.level, LogLevel::Debug);
    assert_eq!(record.msg, "record");
}

#[test]
fn missing_fields_and_unknown_levels_are_tolerated() {
    let record = parse_record(br#"{"msg":"hello"}"#).unwrap();
    assert_eq!(record.level, LogLevel::Info);
    assert_eq!(record.ts, "");
    assert_eq!(record.logging_pod, "");

    let record = parse_record(br#"{"level":"DPANIC","msg":"hello"}"#).unwrap();
    assert_eq!(record.level, LogLevel::Info);

    let record = parse_record(br#"{"level":"WARN","msg":"hello"}"#).unwrap();
    assert_eq!(record.level, LogLevel::Warning);
}

#[test]
fn malformed_lines_are_rejected() {
    assert!(parse_record(b"not-json").is_err());
    assert!(parse_record(br#"{"level":"info""#).is_err());
    assert!(parse_record(br#"["info","a"]"#).is_err());
    assert!(parse_record(b"42").is_err());
}

#[test]
fn min_level_parsing_is_strict() {
    assert_eq!(LogLevel::parse_threshold(""), Ok(None));
    assert_eq!(LogLevel::parse_threshold("warning"), Ok(Some(LogLevel::Warning)));
    assert_eq!(LogLevel::parse_threshold("TRACE"), Ok(Some(LogLevel::Trace)));

    let err = LogLevel::parse_threshold("verbose").unwrap_err();
    assert_eq!(err.0, "verbose");
    assert!(err.to_string().contains("unknown log level 'verbose'"));
}

#[test]
fn levels_are_ordered_by_importance() {
    assert!(LogLevel::Trace < LogLevel::Debug);
    assert!(LogLevel::Debug < LogLevel::Info);
    assert!(LogLevel::Info < LogLevel::Warning);
    assert!(LogLevel::Warning < LogLevel::Error);
    assert_eq!(LogLevel::ALL.len(), 5);
}

#[test]
fn null_strings_decode_as_empty() {
    let line = br#"{"level":"info","ts":null,"logger":null,"msg":null,"logging_pod":null}"#;

    let record = parse_record(line).unwrap();

    assert_eq!(record.msg, "");
    assert_eq!(record.logger, "");
    assert_eq!(record.ts, "");
    assert_eq!(record.logging_pod, "");
    assert!(record.additional_fields.is_empty());

    let line = br#"{"level":"info","ts":"T","logger":"postgres","msg":"record","logging_pod":"p","record":{"error_severity":null,"message":null}}"#;

    let record = parse_record(line).unwrap();

    assert_eq!(record.level, LogLevel::Info);
    assert_eq!(record.msg, "");
}
