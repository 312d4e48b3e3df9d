//! Application layer for briefdesk
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    brief_sink::{BriefSink, NullSink, SinkError},
    correlation::{CorrelationStore, CorrelationToken},
    submission_log::{NoSubmissionLogger, SubmissionEvent, SubmissionLogger},
};
pub use use_cases::begin_intake::{BeginIntakeOutput, BeginIntakeUseCase};
pub use use_cases::compose_details::{ComposeDetailsUseCase, DetailsPage};
pub use use_cases::submit_brief::{
    DeliveryOutcome, SubmitBriefError, SubmitBriefOutput, SubmitBriefUseCase,
};
