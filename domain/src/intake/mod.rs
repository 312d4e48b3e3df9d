//! Intake session subdomain.
//!
//! The per-questionnaire state machine and opening-form validation:
//!
//! - [`stage::IntakeStage`] - Opened → CategoriesSelected →
//!   DetailsComposed → Submitted, forward only
//! - [`draft::OpeningDraft`] - raw typed values, validated into a
//!   [`selection::Selection`] or field-keyed [`draft::FieldErrors`]
//! - [`session::IntakeSession`] - ties stage and draft together

pub mod draft;
pub mod selection;
pub mod session;
pub mod stage;

// Re-export main types
pub use draft::{DATE_FORMAT, FieldError, FieldErrors, OpeningDraft};
pub use selection::Selection;
pub use session::IntakeSession;
pub use stage::IntakeStage;
