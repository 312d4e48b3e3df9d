//! Domain layer for briefdesk
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Catalog
//!
//! The immutable registry of everything the intake can ask: per-category
//! exclusive questions, shared questions with applicability sets, and
//! per-category extra groups. Built once at startup; id collisions are
//! configuration errors, not runtime surprises.
//!
//! ## Compose / Extract
//!
//! Two pure functions bracket the questionnaire round-trip:
//!
//! - **Compose**: selected categories → ordered, de-duplicated question
//!   blocks (exclusive, then shared once each, then extra groups)
//! - **Extract**: raw submitted values + the original selection → the
//!   structured [`BriefSubmission`], grouped by category and section

pub mod catalog;
pub mod compose;
pub mod config;
pub mod extract;
pub mod intake;

// Re-export commonly used types
pub use catalog::{
    Catalog, CatalogBuilder, CatalogError, Category, ChoiceOption, FormPage, InputKind,
    QuestionBlock, SharedRule, opening,
};
pub use compose::{ComposeError, ComposedDetails};
pub use config::OutputFormat;
pub use extract::{AnswerSheet, AnswerValue, BriefSubmission, FieldAnswers, RawAnswer};
pub use intake::{
    DATE_FORMAT, FieldError, FieldErrors, IntakeSession, IntakeStage, OpeningDraft, Selection,
};
