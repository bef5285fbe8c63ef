mod error;
mod loader;
#[cfg(test)]
mod tests;
pub mod types;

pub use error::{ConfigError, config_error_hint, print_config_error};
pub use loader::{load_config_file, load_pretty_settings, resolve_pretty_settings};
pub use types::{ConfigFile, PrettySection, PrettySettings};
