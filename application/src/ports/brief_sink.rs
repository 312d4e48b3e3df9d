//! Port for delivering a completed brief downstream.
//!
//! Following the Ports and Adapters pattern:
//! - **Port**: [`BriefSink`] - defined here in the application layer
//! - **Adapter**: `WebhookBriefSink` - implemented in the infrastructure layer
//!
//! Delivery is at-least-once and fire-and-forget from the intake's point of
//! view: a failed delivery is reported back as an outcome, never as a crash
//! of the in-flight questionnaire.

use async_trait::async_trait;
use brief_domain::BriefSubmission;
use thiserror::Error;

/// Errors an adapter can hit while handing a brief downstream.
#[derive(Error, Debug)]
pub enum SinkError {
    /// The endpoint answered, but not with success (e.g. HTTP 4xx/5xx).
    #[error("delivery rejected: {0}")]
    Rejected(String),

    /// The endpoint could not be reached at all.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Port for delivering the structured brief to a downstream consumer.
#[async_trait]
pub trait BriefSink: Send + Sync {
    async fn deliver(&self, submission: &BriefSubmission) -> Result<(), SinkError>;
}

/// No-op sink for tests and dry runs.
pub struct NullSink;

#[async_trait]
impl BriefSink for NullSink {
    async fn deliver(&self, _submission: &BriefSubmission) -> Result<(), SinkError> {
        Ok(())
    }
}
