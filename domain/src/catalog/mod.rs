//! Question catalog subdomain.
//!
//! The catalog is the immutable registry of everything the intake can ask:
//!
//! - [`category::Category`] - the four service categories
//! - [`block::QuestionBlock`] - one prompt with a typed input
//! - [`shared::SharedRule`] - a question asked once when any applicable
//!   category is selected
//! - [`registry::Catalog`] - the validated registry, built once at startup
//!
//! Block ids are globally unique; the builder rejects collisions and the
//! reserved opening-page ids instead of silently shadowing a question.

pub mod block;
pub mod category;
pub mod opening;
pub mod registry;
pub mod shared;
mod standard;

// Re-export main types
pub use block::{ChoiceOption, FormPage, InputKind, QuestionBlock};
pub use category::Category;
pub use registry::{Catalog, CatalogBuilder, CatalogError};
pub use shared::SharedRule;
