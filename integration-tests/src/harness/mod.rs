pub mod pipeline;
pub mod tracing;

pub use pgctl_core::testing::{BrokenWriter, SharedBuffer};
pub use pipeline::{PipelineRun, fixture, run_pipeline};
pub use self::tracing::{CapturedEvent, init_test_tracing};
