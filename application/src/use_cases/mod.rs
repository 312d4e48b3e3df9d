//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod begin_intake;
pub mod compose_details;
pub mod submit_brief;
