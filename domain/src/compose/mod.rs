//! Composition subdomain.
//!
//! Turns a category selection into the ordered follow-up questionnaire:
//! exclusive blocks, then shared blocks (each at most once), then extra
//! groups. Pure function of catalog and selection.

pub mod composer;

// Re-export main types
pub use composer::{ComposeError, ComposedDetails, DETAILS_SUBMIT_LABEL, DETAILS_TITLE};
