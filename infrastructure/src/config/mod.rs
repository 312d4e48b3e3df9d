//! Configuration file loading for briefdesk
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./briefdesk.toml` or `./.briefdesk.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/briefdesk/config.toml`
//! 4. Fallback: `~/.config/briefdesk/config.toml`
//! 5. Default values

mod file_config;
mod loader;
mod validation;

pub use file_config::{
    FileArchiveConfig, FileConfig, FileIntakeConfig, FileOutputConfig, FileWebhookConfig,
};
pub use loader::ConfigLoader;
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
