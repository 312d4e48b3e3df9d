//! Infrastructure layer for briefdesk
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod correlation;
pub mod delivery;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigIssueCode, ConfigLoader, FileArchiveConfig, FileConfig, FileIntakeConfig,
    FileOutputConfig, FileWebhookConfig, Severity,
};
pub use correlation::InMemoryCorrelationStore;
pub use delivery::{JsonlSubmissionArchive, WebhookBriefSink};
