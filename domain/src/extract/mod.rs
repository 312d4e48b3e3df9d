//! Extraction subdomain.
//!
//! Reverses composition: raw submitted values plus the original selection
//! become the structured [`submission::BriefSubmission`]. Missing optional
//! answers extract to `null`; required fields were validated upstream.

pub mod answers;
pub mod extractor;
pub mod submission;

// Re-export main types
pub use answers::{AnswerSheet, RawAnswer};
pub use submission::{AnswerValue, BriefSubmission, FieldAnswers};
