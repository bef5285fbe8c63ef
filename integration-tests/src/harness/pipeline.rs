use pgctl_core::cli::logs::{PipelineSummary, PrettyOptions, ShutdownSignal, run_pretty};
use pgctl_core::testing::SharedBuffer;
use std::io::Cursor;
use std::path::Path;

/// What one pipeline run produced.
pub struct PipelineRun {
    pub stdout: String,
    pub stderr: String,
    pub summary: PipelineSummary,
}

impl PipelineRun {
    /// Rendered groups, split on the `---` separator.
    pub fn groups(&self) -> Vec<Vec<&str>> {
        let mut groups = vec![Vec::new()];
        for line in self.stdout.lines() {
            if line == "---" {
                groups.push(Vec::new());
            } else if let Some(current) = groups.last_mut() {
                current.push(line);
            }
        }
        groups.retain(|g| !g.is_empty());
        groups
    }
}

/// Read a file from `fixtures/`.
pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name);

    assert!(path.exists(), "fixture does not exist: {:?}", path);
    std::fs::read_to_string(&path).expect("failed to read fixture")
}

/// Run the whole pipeline over an in-memory input until it ends.
pub async fn run_pipeline(input: impl Into<Vec<u8>>, options: PrettyOptions) -> PipelineRun {
    let stdout = SharedBuffer::default();
    let stderr = SharedBuffer::default();

    let summary = run_pretty(
        Cursor::new(input.into()),
        stdout.clone(),
        stderr.clone(),
        options,
        ShutdownSignal::never(),
    )
    .await
    .expect("pipeline failed");

    PipelineRun {
        stdout: stdout.contents(),
        stderr: stderr.contents(),
        summary,
    }
}
