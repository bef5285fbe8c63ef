use super::{SharedBuffer, json_line};
use crate::cli::logs::{
    LogLevel, PrettyOptions, RecordFilter, ShutdownSignal, run_pretty, shutdown_channel,
};
use pretty_assertions::assert_eq;
use std::io::Cursor;
use std::time::Duration;

async fn run(input: String, options: PrettyOptions) -> (String, String, crate::cli::logs::PipelineSummary) {
    let out = SharedBuffer::default();
    let err = SharedBuffer::default();

    let summary = run_pretty(
        Cursor::new(input.into_bytes()),
        out.clone(),
        err.clone(),
        options,
        ShutdownSignal::never(),
    )
    .await
    .unwrap();

    (out.contents(), err.contents(), summary)
}

#[tokio::test]
async fn two_records_and_one_malformed_line() {
    let input = [
        r#"{"level":"info","msg":"a","logger":"x","ts":"T1","logging_pod":"p1"}"#,
        r#"{"level":"error","msg":"b","logger":"y","ts":"T0","logging_pod":"p2"}"#,
        "not-json",
    ]
    .join("\n");

    let (out, err, summary) = run(input, PrettyOptions::default()).await;

    assert_eq!(out, "T0 ERROR   p2 y b\nT1 INFO    p1 x a\n");
    assert_eq!(err.lines().count(), 1);
    assert!(err.contains("not-json"));

    assert_eq!(summary.lines_read, 3);
    assert_eq!(summary.lines_rejected, 1);
    assert_eq!(summary.batches_emitted, 1);
    assert_eq!(summary.records_printed, 2);
}

#[tokio::test]
async fn small_groups_only_sort_locally() {
    let input = [
        json_line("T3", "p", "info", "x", "three"),
        json_line("T2", "p", "info", "x", "two"),
        json_line("T1", "p", "info", "x", "one"),
        json_line("T0", "p", "info", "x", "zero"),
    ]
    .join("\n");

    let options = PrettyOptions {
        sorting_group_size: 2,
        ..PrettyOptions::default()
    };
    let (out, _, summary) = run(input, options).await;

    assert_eq!(
        out,
        "T2 INFO    p x two\n\
         T3 INFO    p x three\n\
         ---\n\
         T0 INFO    p x zero\n\
         T1 INFO    p x one\n"
    );
    assert_eq!(summary.batches_emitted, 2);
}

#[tokio::test]
async fn filters_apply_end_to_end() {
    let input = [
        json_line("T0", "p1", "debug", "x", "quiet"),
        json_line("T1", "p1", "warning", "x", "loud"),
        json_line("T2", "p2", "error", "x", "elsewhere"),
    ]
    .join("\n");

    let options = PrettyOptions {
        filter: RecordFilter::new(vec![], vec!["p1".to_string()], Some(LogLevel::Info)),
        ..PrettyOptions::default()
    };
    let (out, _, summary) = run(input, options).await;

    assert_eq!(out, "T1 WARNING p1 x loud\n");
    assert_eq!(summary.records_filtered, 2);
    assert_eq!(summary.records_forwarded, 1);
}

#[tokio::test]
async fn empty_input_prints_nothing() {
    let (out, err, summary) = run(String::new(), PrettyOptions::default()).await;
    assert_eq!(out, "");
    assert_eq!(err, "");
    assert_eq!(summary.batches_emitted, 0);
}

#[tokio::test]
async fn cancellation_ends_a_pipeline_with_open_input() {
    let (_writer, reader) = tokio::io::duplex(64);
    let (trigger, shutdown) = shutdown_channel();

    let pipeline = tokio::spawn(run_pretty(
        reader,
        SharedBuffer::default(),
        SharedBuffer::default(),
        PrettyOptions::default(),
        shutdown,
    ));

    tokio::task::yield_now().await;
    trigger.trigger();

    let summary = tokio::time::timeout(Duration::from_secs(5), pipeline)
        .await
        .expect("pipeline did not stop")
        .unwrap()
        .unwrap();
    assert_eq!(summary.records_printed, 0);
}
