//! Port for structured submission logging.
//!
//! Defines the [`SubmissionLogger`] trait for recording intake events
//! (accepted briefs, delivery outcomes) to a structured archive.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures completed
//! submissions in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured submission event for logging.
pub struct SubmissionEvent {
    /// Event type identifier (e.g., "brief_submitted").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl SubmissionEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging submission events to a structured archive.
///
/// Implementations write each event as a single record (e.g., one JSONL
/// line). The `record` method is intentionally synchronous and non-fallible
/// to avoid disrupting the intake flow; archive failures are logged and
/// swallowed by the adapter.
pub trait SubmissionLogger: Send + Sync {
    /// Record a submission event.
    fn record(&self, event: SubmissionEvent);
}

/// No-op implementation for tests and when archiving is disabled.
pub struct NoSubmissionLogger;

impl SubmissionLogger for NoSubmissionLogger {
    fn record(&self, _event: SubmissionEvent) {}
}
