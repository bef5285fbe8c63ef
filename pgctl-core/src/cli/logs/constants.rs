use std::time::Duration;

/// How long a partial group may wait before it is flushed.
pub const FLUSH_INTERVAL: Duration = Duration::from_secs(1);

pub const DEFAULT_SORTING_GROUP_SIZE: usize = 1000;
pub const DEFAULT_MAX_LINE_SIZE: usize = 16 * 1024 * 1024;
pub const INITIAL_LINE_CAPACITY: usize = 4096;

/// Printed between two consecutive groups.
pub const GROUP_SEPARATOR: &str = "---";

/// Timestamp width at the default verbosity (millisecond precision).
pub const SHORT_TIMESTAMP_WIDTH: usize = 23;
pub const MAX_MESSAGE_WIDTH: usize = 100;
pub const ELLIPSIS: &str = "...";

pub const YAML_INDENT: &str = "    ";
