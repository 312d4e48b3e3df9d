//! Outbound adapters for completed briefs.

mod archive;
mod webhook;

pub use archive::JsonlSubmissionArchive;
pub use webhook::{EVENT_BRIEF_SUBMITTED, EVENT_HEADER, SIGNATURE_HEADER, WebhookBriefSink};
